pub use crate::animation::{
    AnimatedValue, AnimationSpec, Clock, Easing, Interpolate, SystemClock, TestClock, now,
    set_clock,
};
pub use crate::color::Color;
pub use crate::error::ColorParseError;
pub use crate::geometry::{Rect, Size, Transform, Vec2};
pub use crate::input::{PointerButtons, PointerEvent, PointerEventKind, PointerKind};
pub use crate::locals::{
    Density, Dp, Theme, density, dp_to_px, px_to_dp, theme, with_density, with_theme,
};
pub use crate::modifier::{Border, Modifier, PaddingValues};
pub use crate::runtime::{
    ComposeGuard, remember, remember_state, remember_state_with_key, remember_with_key,
};
pub use crate::signal::{Signal, SubKey, signal};
pub use crate::view::{View, ViewId, ViewKind};
