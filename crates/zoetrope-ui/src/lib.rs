#![allow(non_snake_case)]
//! Carousel widgets for Zoetrope.
//!
//! Two public pieces: [`Carousel`], a paginated horizontally-scrolling card
//! list, and [`PageIndicator`] with its native-widget
//! [`bridge`](indicator::PageIndicatorBridge). Everything composes down to
//! `zoetrope_core::View` trees; a host framework lays them out, paints them,
//! and feeds input back through the callbacks on the tree.

pub mod carousel;
pub mod indicator;
pub mod items;

use zoetrope_core::*;

pub use carousel::{
    Carousel, CarouselConfig, CarouselEffect, CarouselGeometry, CarouselState, ConfigError,
    active_index, focus_scale, remember_carousel_state, settle_scale,
};
pub use indicator::{IndicatorBackend, IndicatorStyle, PageIndicator, PageIndicatorBridge};
pub use items::{CarouselItem, ItemBinding};

pub fn Surface(modifier: Modifier, child: View) -> View {
    View::new(0, ViewKind::Surface)
        .modifier(modifier)
        .with_children(vec![child])
}

pub fn Box(modifier: Modifier) -> View {
    View::new(0, ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(0, ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(0, ViewKind::Column).modifier(modifier)
}

pub fn Stack(modifier: Modifier) -> View {
    View::new(0, ViewKind::Stack).modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Text {
            text: text.into(),
            color: theme().on_surface,
            font_size: 16.0, // dp
        },
    )
}

pub fn Spacer() -> View {
    Box(Modifier::new().flex_grow(1.0))
}

pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
