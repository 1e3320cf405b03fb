use std::rc::Rc;

use taffy::{AlignItems, AlignSelf, JustifyContent};

use crate::{Color, PointerEvent, Size, Transform, Vec2};

#[derive(Clone, Copy, Debug)]
pub struct Border {
    pub width: f32,
    pub color: Color,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PaddingValues {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

/// Chainable layout/draw/input attributes attached to a [`View`](crate::View).
///
/// All lengths are dp; hosts convert via the `Density` local at layout time.
#[derive(Clone, Default)]
pub struct Modifier {
    pub size: Option<Size>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub fill_max: bool,
    pub fill_max_w: bool,
    pub fill_max_h: bool,
    pub padding: Option<f32>,
    pub padding_values: Option<PaddingValues>,
    pub margin_left: Option<f32>,
    pub margin_right: Option<f32>,
    pub margin_top: Option<f32>,
    pub margin_bottom: Option<f32>,
    pub background: Option<Color>,
    pub border: Option<Border>,
    pub clip_rounded: Option<f32>,
    pub alpha: Option<f32>,
    pub transform: Option<Transform>,
    pub flex_grow: Option<f32>,
    pub align_self: Option<AlignSelf>,
    pub justify_content: Option<JustifyContent>,
    pub align_items_container: Option<AlignItems>,
    /// Hit-testing order only; draw order is unchanged.
    pub z_index: f32,
    pub click: bool,
    pub on_scroll: Option<Rc<dyn Fn(Vec2) -> Vec2>>,
    pub on_pointer_down: Option<Rc<dyn Fn(PointerEvent)>>,
    pub on_pointer_up: Option<Rc<dyn Fn(PointerEvent)>>,
}

impl std::fmt::Debug for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modifier")
            .field("size", &self.size)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("fill_max", &self.fill_max)
            .field("padding", &self.padding)
            .field("background", &self.background)
            .field("border", &self.border)
            .field("clip_rounded", &self.clip_rounded)
            .field("alpha", &self.alpha)
            .field("transform", &self.transform)
            .field("z_index", &self.z_index)
            .field("click", &self.click)
            .field("on_scroll", &self.on_scroll.as_ref().map(|_| "..."))
            .field("on_pointer_down", &self.on_pointer_down.as_ref().map(|_| "..."))
            .field("on_pointer_up", &self.on_pointer_up.as_ref().map(|_| "..."))
            .finish_non_exhaustive()
    }
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, w: f32, h: f32) -> Self {
        self.size = Some(Size {
            width: w,
            height: h,
        });
        self
    }

    pub fn width(mut self, w: f32) -> Self {
        self.width = Some(w);
        self
    }

    pub fn height(mut self, h: f32) -> Self {
        self.height = Some(h);
        self
    }

    pub fn fill_max_size(mut self) -> Self {
        self.fill_max = true;
        self
    }

    pub fn fill_max_width(mut self) -> Self {
        self.fill_max_w = true;
        self
    }

    pub fn fill_max_height(mut self) -> Self {
        self.fill_max_h = true;
        self
    }

    pub fn padding(mut self, v: f32) -> Self {
        self.padding = Some(v);
        self
    }

    pub fn padding_values(mut self, padding: PaddingValues) -> Self {
        self.padding_values = Some(padding);
        self
    }

    pub fn margin_horizontal(mut self, v: f32) -> Self {
        self.margin_left = Some(v);
        self.margin_right = Some(v);
        self
    }

    pub fn margin_right(mut self, v: f32) -> Self {
        self.margin_right = Some(v);
        self
    }

    pub fn margin_vertical(mut self, v: f32) -> Self {
        self.margin_top = Some(v);
        self.margin_bottom = Some(v);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn border(mut self, width: f32, color: Color, radius: f32) -> Self {
        self.border = Some(Border {
            width,
            color,
            radius,
        });
        self
    }

    pub fn clip_rounded(mut self, radius: f32) -> Self {
        self.clip_rounded = Some(radius);
        self
    }

    pub fn alpha(mut self, a: f32) -> Self {
        self.alpha = Some(a);
        self
    }

    pub fn flex_grow(mut self, v: f32) -> Self {
        self.flex_grow = Some(v);
        self
    }

    pub fn align_self(mut self, a: AlignSelf) -> Self {
        self.align_self = Some(a);
        self
    }

    pub fn align_self_center(mut self) -> Self {
        self.align_self = Some(AlignSelf::Center);
        self
    }

    pub fn justify_content(mut self, j: JustifyContent) -> Self {
        self.justify_content = Some(j);
        self
    }

    pub fn align_items(mut self, a: AlignItems) -> Self {
        self.align_items_container = Some(a);
        self
    }

    pub fn z_index(mut self, z: f32) -> Self {
        self.z_index = z;
        self
    }

    pub fn clickable(mut self) -> Self {
        self.click = true;
        self
    }

    pub fn on_scroll(mut self, f: impl Fn(Vec2) -> Vec2 + 'static) -> Self {
        self.on_scroll = Some(Rc::new(f));
        self
    }

    pub fn on_pointer_down(mut self, f: impl Fn(PointerEvent) + 'static) -> Self {
        self.on_pointer_down = Some(Rc::new(f));
        self
    }

    pub fn on_pointer_up(mut self, f: impl Fn(PointerEvent) + 'static) -> Self {
        self.on_pointer_up = Some(Rc::new(f));
        self
    }

    pub fn scale(self, s: f32) -> Self {
        self.scale2(s, s)
    }

    pub fn scale2(mut self, sx: f32, sy: f32) -> Self {
        let mut t = self.transform.unwrap_or_else(Transform::identity);
        t.scale_x *= sx;
        t.scale_y *= sy;
        self.transform = Some(t);
        self
    }

    pub fn translate(mut self, x: f32, y: f32) -> Self {
        let t = self.transform.unwrap_or_else(Transform::identity);
        self.transform = Some(t.combine(&Transform::translate(x, y)));
        self
    }
}
