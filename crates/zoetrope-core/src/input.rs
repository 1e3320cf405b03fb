use crate::Vec2;
use bitflags::bitflags;

bitflags! {
    /// Buttons held during a pointer event. Touch reports `PRIMARY`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct PointerButtons: u8 {
        const PRIMARY = 1;
        const SECONDARY = 1 << 1;
        const MIDDLE = 1 << 2;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down(PointerButtons),
    Move,
    Up(PointerButtons),
    Cancel,
}

#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub event: PointerEventKind,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn down(kind: PointerKind, position: Vec2) -> Self {
        Self {
            kind,
            event: PointerEventKind::Down(PointerButtons::PRIMARY),
            position,
        }
    }

    pub fn up(kind: PointerKind, position: Vec2) -> Self {
        Self {
            kind,
            event: PointerEventKind::Up(PointerButtons::PRIMARY),
            position,
        }
    }
}
