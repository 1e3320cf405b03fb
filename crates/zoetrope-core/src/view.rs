use crate::{Color, Modifier, Vec2};
use std::rc::Rc;

pub type ViewId = u64;

pub type PageCallback = Rc<dyn Fn(usize)>;

/// Node kinds of the declarative tree.
///
/// Plain containers carry no payload; controls that a host renders natively
/// (the pager scroll region, the page-indicator dots) carry their props and
/// callbacks inline, the same way buttons and sliders would.
#[derive(Clone)]
pub enum ViewKind {
    Surface,
    Box,
    Row,
    Column,
    Stack,
    /// Horizontally scrollable region. The host layout reports geometry
    /// through the setters and forwards wheel/drag deltas to `on_scroll`,
    /// which returns the leftover it did not consume.
    ScrollH {
        on_scroll: Option<Rc<dyn Fn(Vec2) -> Vec2>>,
        set_viewport_width: Option<Rc<dyn Fn(f32)>>,
        set_content_width: Option<Rc<dyn Fn(f32)>>,
        get_scroll_offset: Option<Rc<dyn Fn() -> f32>>,
        set_scroll_offset: Option<Rc<dyn Fn(f32)>>,
    },
    Text {
        text: String,
        color: Color,
        font_size: f32,
    },
    /// Native dot-style page indicator. Hosts with a platform page control
    /// sync these props into it (see `zoetrope-ui`'s bridge); `on_page_change`
    /// is invoked with the index of a tapped dot.
    PageIndicator {
        pages: usize,
        active_page: usize,
        tint: Color,
        active_tint: Color,
        dot_size: f32,
        dot_spacing: f32,
        on_page_change: Option<PageCallback>,
    },
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Surface => write!(f, "Surface"),
            ViewKind::Box => write!(f, "Box"),
            ViewKind::Row => write!(f, "Row"),
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Stack => write!(f, "Stack"),
            ViewKind::ScrollH { .. } => write!(f, "ScrollH"),
            ViewKind::Text {
                text,
                color,
                font_size,
            } => f
                .debug_struct("Text")
                .field("text", text)
                .field("color", color)
                .field("font_size", font_size)
                .finish(),
            ViewKind::PageIndicator {
                pages,
                active_page,
                tint,
                active_tint,
                dot_size,
                dot_spacing,
                ..
            } => f
                .debug_struct("PageIndicator")
                .field("pages", pages)
                .field("active_page", active_page)
                .field("tint", tint)
                .field("active_tint", active_tint)
                .field("dot_size", dot_size)
                .field("dot_spacing", dot_spacing)
                .field("on_page_change", &"<callback>")
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            modifier: Modifier::default(),
            children: vec![],
        }
    }

    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }

    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
}
