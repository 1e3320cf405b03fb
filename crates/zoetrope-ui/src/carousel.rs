//! # Paginated card carousel
//!
//! `Carousel` renders a host-owned collection as a horizontal strip of
//! fixed-size cards that snaps to one card at rest, with an optional parallax
//! effect on each card's content, a focus scale that favors the centered
//! card, and a page-indicator row kept in sync with the settled selection.
//!
//! The widget is split the way the scroll containers are: a
//! [`CarouselState`] owns offset, fling and snap animation (remembered across
//! compose passes), and the `Carousel` function re-derives the whole view
//! tree from it every pass.
//!
//! ```rust
//! use std::rc::Rc;
//! use zoetrope_core::*;
//! use zoetrope_ui::*;
//!
//! #[derive(Clone, PartialEq)]
//! struct Cover { id: u32, title: String }
//!
//! impl CarouselItem for Cover {
//!     type Id = u32;
//!     fn id(&self) -> u32 { self.id }
//! }
//!
//! fn Shelf(covers: Signal<Vec<Cover>>) -> View {
//!     let state = remember_carousel_state::<u32>("shelf");
//!     Carousel(&CarouselConfig::default(), covers, state, |cover| {
//!         Text(cover.value().title.clone())
//!     })
//! }
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use taffy::AlignItems;
use thiserror::Error;
use web_time::Instant;
use zoetrope_core::animation::now;
use zoetrope_core::*;

use crate::indicator::{IndicatorStyle, PageIndicator};
use crate::items::{CarouselItem, ItemBinding};

/// Per-card parallax strategy: maps a card's scroll-relative distance to a
/// horizontal displacement of its inner content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CarouselEffect {
    /// No parallax.
    #[default]
    None,
    /// Content drifts 1:1 with the card's distance from the scroll origin.
    LinearOffset,
    /// Accelerated drift, capped at 1.4× the card's own viewport width so
    /// far-off cards don't run away.
    ClampedOffset,
}

impl CarouselEffect {
    pub fn displacement(self, distance: f32, card_viewport_width: f32) -> f32 {
        match self {
            CarouselEffect::None => 0.0,
            CarouselEffect::LinearOffset => distance,
            CarouselEffect::ClampedOffset => (distance * 1.4).min(card_viewport_width * 1.4),
        }
    }
}

/// Scale of a card at `distance` px from the viewport midpoint: 1.0 centered,
/// easing down to 0.9 at one half-viewport away and beyond.
pub fn focus_scale(distance: f32, half_viewport: f32) -> f32 {
    if half_viewport <= 0.0 {
        return 1.0;
    }
    (1.0 - (distance.abs() / half_viewport) * 0.1).max(0.9)
}

/// Extra scale layered on every card while a snap animation is in flight:
/// 1.0 at both ends, dipping to 0.95 mid-transition.
pub fn settle_scale(progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    1.0 - 0.05 * (1.0 - (2.0 * t - 1.0).abs())
}

/// Derived active index: the position of the settled selection's id in the
/// collection, 0 when the id is stale or the collection is empty.
pub fn active_index<T: CarouselItem>(items: &[T], selected: Option<&T::Id>) -> usize {
    selected
        .and_then(|id| items.iter().position(|item| &item.id() == id))
        .unwrap_or(0)
}

/// Pager math, all in px. Cards sit at `edge_inset + i * stride`; scroll
/// offset `snap_offset(i)` puts card `i` exactly in the middle of the
/// viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CarouselGeometry {
    pub card_width: f32,
    pub spacing: f32,
    pub viewport_width: f32,
    pub count: usize,
}

impl CarouselGeometry {
    /// Symmetric inset that lets the first and last cards center.
    pub fn edge_inset(&self) -> f32 {
        ((self.viewport_width - self.card_width) / 2.0).max(0.0)
    }

    pub fn stride(&self) -> f32 {
        self.card_width + self.spacing
    }

    pub fn snap_offset(&self, index: usize) -> f32 {
        index as f32 * self.stride()
    }

    pub fn max_offset(&self) -> f32 {
        match self.count {
            0 => 0.0,
            n => (n - 1) as f32 * self.stride(),
        }
    }

    pub fn content_width(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        self.count as f32 * self.card_width
            + (self.count - 1) as f32 * self.spacing
            + 2.0 * self.edge_inset()
    }

    /// Page whose snap offset is closest to `offset`, clamped into range.
    pub fn nearest_page(&self, offset: f32) -> usize {
        if self.count == 0 || self.stride() <= 0.0 {
            return 0;
        }
        let page = (offset / self.stride()).round().max(0.0) as usize;
        page.min(self.count - 1)
    }

    /// Raw scroll-relative distance of card `index` from the scroll origin.
    pub fn scroll_distance(&self, index: usize, offset: f32) -> f32 {
        self.snap_offset(index) - offset
    }
}

// fling friction per tick and the velocity floor that ends it (px/frame)
const FLING_DECAY: f32 = 0.9;
const FLING_STOP: f32 = 0.5;
// quiet time after the last input before an off-boundary offset snaps home
const SETTLE_DEBOUNCE: Duration = Duration::from_millis(120);
const ALIGN_EPSILON: f32 = 0.5;

struct Settle {
    anim: AnimatedValue<f32>,
    target: usize,
}

/// Scroll, snap and selection state of one carousel. Remember it with
/// [`remember_carousel_state`] so it survives compose passes.
///
/// `Id` is the item's identifier type; the settled selection is stored by id,
/// not by index, so it tracks items across reorders.
pub struct CarouselState<Id: PartialEq + Clone + 'static> {
    offset: Signal<f32>,
    viewport_width: Signal<f32>,
    selected: Signal<Option<Id>>,
    geometry: Cell<CarouselGeometry>,

    // physics
    vel: RefCell<f32>,
    flinging: RefCell<bool>,
    last_input_t: RefCell<Instant>,
    settle: RefCell<Option<Settle>>,
}

impl<Id: PartialEq + Clone + 'static> Default for CarouselState<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: PartialEq + Clone + 'static> CarouselState<Id> {
    pub fn new() -> Self {
        Self {
            offset: signal(0.0),
            viewport_width: signal(0.0),
            selected: signal(None),
            geometry: Cell::new(CarouselGeometry::default()),
            vel: RefCell::new(0.0),
            flinging: RefCell::new(false),
            last_input_t: RefCell::new(now()),
            settle: RefCell::new(None),
        }
    }

    /// Reported by the host layout; the carousel never queries the display.
    pub fn set_viewport_width(&self, w: f32) {
        self.viewport_width.set(w.max(0.0));
        let mut g = self.geometry.get();
        g.viewport_width = w.max(0.0);
        self.geometry.set(g);
        self.clamp_offset();
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width.get()
    }

    /// Refresh pager metrics (px). Called once per compose pass.
    pub(crate) fn configure(&self, card_width: f32, spacing: f32, count: usize) {
        let mut g = self.geometry.get();
        g.card_width = card_width;
        g.spacing = spacing;
        g.count = count;
        g.viewport_width = self.viewport_width.get();
        self.geometry.set(g);
        self.clamp_offset();
    }

    pub fn geometry(&self) -> CarouselGeometry {
        self.geometry.get()
    }

    pub fn offset(&self) -> f32 {
        self.offset.get()
    }

    fn clamp_offset(&self) {
        let max = self.geometry.get().max_offset();
        self.offset.update(|o| *o = o.clamp(0.0, max));
    }

    /// Consume a horizontal scroll delta (px) and return the leftover for
    /// nested scrolling. User input supersedes any snap in flight.
    pub fn scroll_by(&self, dx: f32) -> f32 {
        self.settle.borrow_mut().take();

        let before = self.offset.get();
        let max = self.geometry.get().max_offset();
        let after = (before + dx).clamp(0.0, max);
        self.offset.set(after);

        let consumed = after - before;
        *self.vel.borrow_mut() = consumed; // px/frame baseline
        *self.flinging.borrow_mut() = consumed.abs() > 0.25;
        *self.last_input_t.borrow_mut() = now();

        dx - consumed
    }

    /// Host/scrollbar writes the absolute offset (px).
    pub fn set_offset(&self, off: f32) {
        self.settle.borrow_mut().take();
        *self.flinging.borrow_mut() = false;
        *self.vel.borrow_mut() = 0.0;
        let max = self.geometry.get().max_offset();
        self.offset.set(off.clamp(0.0, max));
        *self.last_input_t.borrow_mut() = now();
    }

    /// Advance one frame: snap animation first, then fling decay, then the
    /// settle-after-quiet check. Returns `true` while anything is moving.
    pub fn tick(&self) -> bool {
        {
            let mut settle = self.settle.borrow_mut();
            if let Some(s) = settle.as_mut() {
                let running = s.anim.update();
                let max = self.geometry.get().max_offset();
                // overshoot may poke past the rail; the offset stays clamped
                self.offset.set(s.anim.get().clamp(0.0, max));
                if !running {
                    log::debug!("carousel settled on page {}", s.target);
                    *settle = None;
                }
                return running;
            }
        }

        if *self.flinging.borrow() {
            let vel = *self.vel.borrow();
            if vel.abs() < FLING_STOP {
                *self.flinging.borrow_mut() = false;
                *self.vel.borrow_mut() = 0.0;
                self.begin_settle();
                return self.is_settling();
            }

            let before = self.offset.get();
            let max = self.geometry.get().max_offset();
            let after = (before + vel).clamp(0.0, max);
            self.offset.set(after);

            if (after - before).abs() < 0.01 {
                // pinned against a rail
                *self.flinging.borrow_mut() = false;
                *self.vel.borrow_mut() = 0.0;
                self.begin_settle();
                return self.is_settling();
            }

            *self.vel.borrow_mut() = vel * FLING_DECAY;
            return true;
        }

        // idle: once input has gone quiet, home in on the nearest boundary
        let quiet = now().saturating_duration_since(*self.last_input_t.borrow());
        if quiet >= SETTLE_DEBOUNCE && !self.is_aligned() {
            self.begin_settle();
            return self.is_settling();
        }
        false
    }

    fn is_aligned(&self) -> bool {
        let g = self.geometry.get();
        if g.count == 0 {
            return true;
        }
        let off = self.offset.get();
        (g.snap_offset(g.nearest_page(off)) - off).abs() <= ALIGN_EPSILON
    }

    fn begin_settle(&self) {
        let g = self.geometry.get();
        if g.count == 0 {
            return;
        }
        let off = self.offset.get();
        let target = g.nearest_page(off);
        if (g.snap_offset(target) - off).abs() <= ALIGN_EPSILON {
            self.offset.set(g.snap_offset(target));
            return;
        }
        self.start_settle_to(target);
    }

    fn start_settle_to(&self, target: usize) {
        let goal = self.geometry.get().snap_offset(target);
        let mut anim = AnimatedValue::new(self.offset.get(), AnimationSpec::snappy());
        anim.set_target(goal);
        *self.settle.borrow_mut() = Some(Settle { anim, target });
    }

    pub fn is_settling(&self) -> bool {
        self.settle.borrow().is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.is_settling() || *self.flinging.borrow()
    }

    /// Linear progress of the snap animation while one is in flight.
    pub fn settle_progress(&self) -> Option<f32> {
        self.settle.borrow().as_ref().and_then(|s| s.anim.progress())
    }

    /// Animated snap to page `index` (the indicator-tap path). An index
    /// outside the collection is ignored.
    pub fn select_page(&self, index: usize) {
        let g = self.geometry.get();
        if index >= g.count {
            log::trace!("select_page({index}) outside 0..{}; ignored", g.count);
            return;
        }
        *self.flinging.borrow_mut() = false;
        *self.vel.borrow_mut() = 0.0;
        self.start_settle_to(index);
    }

    /// Immediate, non-animated alignment on page `index`.
    pub fn jump_to_page(&self, index: usize) {
        let g = self.geometry.get();
        if index >= g.count {
            log::trace!("jump_to_page({index}) outside 0..{}; ignored", g.count);
            return;
        }
        self.settle.borrow_mut().take();
        *self.flinging.borrow_mut() = false;
        *self.vel.borrow_mut() = 0.0;
        self.offset.set(g.snap_offset(index));
    }

    /// The page the offset is (closest to) resting on; 0 when empty.
    pub fn current_page(&self) -> usize {
        self.geometry.get().nearest_page(self.offset.get())
    }

    pub fn selected(&self) -> Option<Id> {
        self.selected.get()
    }

    pub fn set_selected(&self, id: Option<Id>) {
        self.selected.set(id);
    }

    /// When the strip is at rest on a boundary, record that card's id as the
    /// settled selection. No-op while anything is moving.
    pub fn sync_selection<T: CarouselItem<Id = Id>>(&self, items: &[T]) {
        if items.is_empty() {
            if self.selected.with(|s| s.is_some()) {
                self.selected.set(None);
            }
            return;
        }
        if self.is_animating() || !self.is_aligned() {
            return;
        }
        let page = self.current_page().min(items.len() - 1);
        let id = items[page].id();
        if self.selected.with(|s| s.as_ref() != Some(&id)) {
            self.selected.set(Some(id));
        }
    }
}

/// Construction-time options. All lengths are dp.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    pub effect: CarouselEffect,
    pub card_width: f32,
    pub card_height: f32,
    pub item_spacing: f32,
    /// Gap between the card strip and the page indicator.
    pub paging_control_spacing: f32,
    /// `None` falls back to the ambient theme's outline color.
    pub indicator_tint: Option<Color>,
    /// `None` falls back to the ambient theme's primary color.
    pub active_indicator_tint: Option<Color>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            effect: CarouselEffect::None,
            card_width: 310.0,
            card_height: 403.0,
            item_spacing: 16.0,
            paging_control_spacing: 8.0,
            indicator_tint: None,
            active_indicator_tint: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NonPositiveDimension { name: &'static str, value: f32 },
    #[error("{name} must not be negative, got {value}")]
    NegativeSpacing { name: &'static str, value: f32 },
}

impl CarouselConfig {
    pub fn effect(mut self, effect: CarouselEffect) -> Self {
        self.effect = effect;
        self
    }

    pub fn card_size(mut self, width: f32, height: f32) -> Self {
        self.card_width = width;
        self.card_height = height;
        self
    }

    pub fn item_spacing(mut self, spacing: f32) -> Self {
        self.item_spacing = spacing;
        self
    }

    pub fn paging_control_spacing(mut self, spacing: f32) -> Self {
        self.paging_control_spacing = spacing;
        self
    }

    pub fn indicator_tints(mut self, tint: Color, active: Color) -> Self {
        self.indicator_tint = Some(tint);
        self.active_indicator_tint = Some(active);
        self
    }

    /// Opt-in sanity check for configs coming from data rather than source.
    /// The widget itself degrades gracefully on malformed values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |name, value: f32| {
            if value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::NonPositiveDimension { name, value })
            }
        };
        positive("card_width", self.card_width)?;
        positive("card_height", self.card_height)?;
        for (name, value) in [
            ("item_spacing", self.item_spacing),
            ("paging_control_spacing", self.paging_control_spacing),
        ] {
            if value < 0.0 {
                return Err(ConfigError::NegativeSpacing { name, value });
            }
        }
        Ok(())
    }

    fn indicator_style(&self) -> IndicatorStyle {
        let mut style = IndicatorStyle::default();
        if let Some(tint) = self.indicator_tint {
            style.tint = tint;
        }
        if let Some(tint) = self.active_indicator_tint {
            style.active_tint = tint;
        }
        style
    }
}

/// Keyed [`CarouselState`] slot, like the scroll-state helpers.
pub fn remember_carousel_state<Id: PartialEq + Clone + 'static>(
    key: impl Into<String>,
) -> Rc<CarouselState<Id>> {
    remember_with_key(key.into(), CarouselState::new)
}

/// Paginated card strip plus page indicator.
///
/// `items` is the host-owned collection; `content` builds one card from a
/// write-through [`ItemBinding`] and runs once per visible item per pass.
pub fn Carousel<T, F>(
    config: &CarouselConfig,
    items: Signal<Vec<T>>,
    state: Rc<CarouselState<T::Id>>,
    content: F,
) -> View
where
    T: CarouselItem,
    F: Fn(ItemBinding<T>) -> View + 'static,
{
    let snapshot = items.get();
    let count = snapshot.len();

    // dp→px once; every px figure below comes from this geometry
    state.configure(
        dp_to_px(config.card_width),
        dp_to_px(config.item_spacing),
        count,
    );
    state.tick();
    state.sync_selection(&snapshot);

    let g = state.geometry();
    let offset = state.offset();
    let settle_factor = state.settle_progress().map(settle_scale).unwrap_or(1.0);
    let half_viewport = g.viewport_width / 2.0;
    let stride = g.stride();

    // visible range with one card of buffer each side; before the host has
    // reported a viewport every card is composed
    let (first, last) = if count == 0 || stride <= 0.0 {
        (0, count)
    } else if g.viewport_width <= 0.0 {
        (0, count)
    } else {
        let first_visible = ((offset - g.edge_inset()) / stride).floor().max(0.0) as usize;
        let per_screen = (g.viewport_width / stride).ceil() as usize + 1;
        (
            first_visible.saturating_sub(1),
            (first_visible + per_screen + 1).min(count),
        )
    };

    let mut cards: Vec<View> = Vec::with_capacity(last - first + 2);

    if first > 0 {
        cards.push(crate::Box(
            Modifier::new().size(px_to_dp(first as f32 * stride), 1.0),
        ));
    }

    for (index, item) in snapshot.iter().enumerate().take(last).skip(first) {
        let raw = g.scroll_distance(index, offset);
        let displacement = config.effect.displacement(raw, g.card_width);
        let scale = focus_scale(raw, half_viewport) * settle_factor;

        let body = content(ItemBinding::new(item.clone(), items.clone(), index));
        // content drifts against the scroll direction
        let inner = if displacement == 0.0 {
            body
        } else {
            crate::Box(Modifier::new().translate(-px_to_dp(displacement), 0.0))
                .with_children(vec![body])
        };

        let mut card = Modifier::new()
            .size(config.card_width, config.card_height)
            .scale(scale);
        if index + 1 < count {
            card = card.margin_right(config.item_spacing);
        }
        cards.push(crate::Box(card).with_children(vec![inner]));
    }

    if last < count {
        cards.push(crate::Box(
            Modifier::new().size(px_to_dp((count - last) as f32 * stride), 1.0),
        ));
    }

    let inset = px_to_dp(g.edge_inset());
    let strip = crate::Row(
        Modifier::new()
            .padding_values(PaddingValues {
                left: inset,
                right: inset,
                ..Default::default()
            })
            .align_items(AlignItems::Center),
    )
    .with_children(cards);

    let on_scroll = {
        let state = state.clone();
        Rc::new(move |d: Vec2| -> Vec2 {
            Vec2 {
                x: state.scroll_by(d.x),
                y: d.y,
            }
        })
    };
    let set_viewport = {
        let state = state.clone();
        Rc::new(move |w: f32| state.set_viewport_width(w))
    };
    let get_scroll = {
        let state = state.clone();
        Rc::new(move || -> f32 {
            state.tick();
            state.offset()
        })
    };
    let set_scroll = {
        let state = state.clone();
        Rc::new(move |off: f32| state.set_offset(off))
    };

    let rail = View::new(
        0,
        ViewKind::ScrollH {
            on_scroll: Some(on_scroll),
            set_viewport_width: Some(set_viewport),
            set_content_width: None,
            get_scroll_offset: Some(get_scroll),
            set_scroll_offset: Some(set_scroll),
        },
    )
    .modifier(Modifier::new().fill_max_width().height(config.card_height))
    .with_children(vec![strip]);

    let active = active_index(&snapshot, state.selected().as_ref());
    let dots = PageIndicator(count, active, config.indicator_style(), {
        let state = state.clone();
        move |page| state.select_page(page)
    });

    crate::Column(Modifier::new().align_items(AlignItems::Center)).with_children(vec![
        rail,
        crate::Box(Modifier::new().size(1.0, config.paging_control_spacing)),
        dots,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use zoetrope_core::animation::{SystemClock, TestClock, set_clock};

    #[derive(Clone, Debug, PartialEq)]
    struct Slide {
        key: u32,
        label: String,
    }

    impl CarouselItem for Slide {
        type Id = u32;
        fn id(&self) -> u32 {
            self.key
        }
    }

    fn slides(n: usize) -> Vec<Slide> {
        // ids deliberately unequal to their index
        (0..n)
            .map(|i| Slide {
                key: i as u32 * 10 + 7,
                label: format!("slide {i}"),
            })
            .collect()
    }

    fn state_with(count: usize, viewport: f32) -> CarouselState<u32> {
        let state = CarouselState::new();
        state.set_viewport_width(viewport);
        state.configure(310.0, 16.0, count);
        state
    }

    // The animation clock is process-global; clock-driven tests serialize on
    // this and restore the system clock when done.
    static CLOCK_GUARD: Mutex<()> = Mutex::new(());

    struct Clockwork {
        t: Instant,
    }

    impl Clockwork {
        fn advance(&mut self, ms: u64) {
            self.t += Duration::from_millis(ms);
            set_clock(Box::new(TestClock { t: self.t }));
        }
    }

    fn with_clock(f: impl FnOnce(&mut Clockwork)) {
        let _guard = CLOCK_GUARD.lock().unwrap_or_else(|e| e.into_inner());
        let t = Instant::now();
        set_clock(Box::new(TestClock { t }));
        f(&mut Clockwork { t });
        set_clock(Box::new(SystemClock));
    }

    #[test]
    fn effect_displacement_matches_contract() {
        let w = 310.0;
        for x in [0.0, 10.0, 155.0, 310.0, 433.9, 1000.0] {
            assert_eq!(CarouselEffect::None.displacement(x, w), 0.0);
            assert_eq!(CarouselEffect::LinearOffset.displacement(x, w), x);
            assert_eq!(
                CarouselEffect::ClampedOffset.displacement(x, w),
                (x * 1.4).min(w * 1.4)
            );
        }
    }

    #[test]
    fn clamped_effect_is_monotonic_then_constant() {
        let w = 310.0;
        let mut prev = f32::MIN;
        for step in 0..=120 {
            let x = step as f32 * 5.0;
            let d = CarouselEffect::ClampedOffset.displacement(x, w);
            assert!(d >= prev, "not monotonic at x={x}");
            prev = d;
        }
        // past the clamp point the displacement is pinned at w * 1.4
        let cap = w * 1.4;
        assert_eq!(CarouselEffect::ClampedOffset.displacement(310.0, w), cap);
        assert_eq!(CarouselEffect::ClampedOffset.displacement(900.0, w), cap);
    }

    #[test]
    fn focus_scale_stays_in_bounds() {
        let h = 195.0;
        assert_eq!(focus_scale(0.0, h), 1.0);
        assert!((focus_scale(h / 2.0, h) - 0.95).abs() < 1e-6);
        assert!((focus_scale(h, h) - 0.9).abs() < 1e-6);
        assert_eq!(focus_scale(h * 3.0, h), 0.9);
        for step in 0..200 {
            let s = focus_scale(step as f32 * 7.0, h);
            assert!((0.9..=1.0).contains(&s));
        }
        // degenerate viewport: no scaling
        assert_eq!(focus_scale(50.0, 0.0), 1.0);
    }

    #[test]
    fn settle_scale_dips_to_095_mid_flight() {
        assert_eq!(settle_scale(0.0), 1.0);
        assert!((settle_scale(0.25) - 0.975).abs() < 1e-6);
        assert!((settle_scale(0.5) - 0.95).abs() < 1e-6);
        assert_eq!(settle_scale(1.0), 1.0);
    }

    #[test]
    fn geometry_math() {
        let g = CarouselGeometry {
            card_width: 310.0,
            spacing: 16.0,
            viewport_width: 390.0,
            count: 6,
        };
        assert_eq!(g.edge_inset(), 40.0);
        assert_eq!(g.stride(), 326.0);
        assert_eq!(g.snap_offset(2), 652.0);
        assert_eq!(g.max_offset(), 1630.0);
        assert_eq!(g.content_width(), 6.0 * 310.0 + 5.0 * 16.0 + 80.0);
        assert_eq!(g.nearest_page(0.0), 0);
        assert_eq!(g.nearest_page(640.0), 2);
        assert_eq!(g.nearest_page(1.0e9), 5);

        let empty = CarouselGeometry {
            count: 0,
            ..g
        };
        assert_eq!(empty.max_offset(), 0.0);
        assert_eq!(empty.content_width(), 0.0);
        assert_eq!(empty.nearest_page(500.0), 0);
    }

    #[test]
    fn active_index_falls_back_to_zero() {
        let items = slides(4);
        assert_eq!(active_index::<Slide>(&[], None), 0);
        assert_eq!(active_index::<Slide>(&[], Some(&27)), 0);
        assert_eq!(active_index(&items, None), 0);
        assert_eq!(active_index(&items, Some(&9999)), 0); // stale id
        assert_eq!(active_index(&items, Some(&items[3].id())), 3);
    }

    #[test]
    fn select_page_out_of_range_is_a_noop() {
        with_clock(|_| {
            let state = state_with(6, 390.0);
            state.jump_to_page(2);
            let before = state.offset();

            state.select_page(6);
            state.select_page(usize::MAX);
            assert!(!state.is_settling());
            assert_eq!(state.offset(), before);
        });
    }

    #[test]
    fn selection_round_trips_through_every_page() {
        with_clock(|clock| {
            let items = slides(6);
            let state = state_with(6, 390.0);
            for i in 0..6 {
                state.select_page(i);
                assert!(state.is_settling());
                clock.advance(360);
                assert!(!state.tick());
                state.sync_selection(&items);

                assert_eq!(state.current_page(), i);
                assert_eq!(active_index(&items, state.selected().as_ref()), i);
            }
        });
    }

    #[test]
    fn settle_animation_lands_exactly_on_the_boundary() {
        with_clock(|clock| {
            let state = state_with(6, 390.0);
            state.select_page(3);

            // mid-flight the dip factor is below 1
            clock.advance(175);
            assert!(state.tick());
            let progress = state.settle_progress().unwrap();
            assert!((0.4..0.6).contains(&progress));
            assert!(settle_scale(progress) < 0.96);

            clock.advance(200);
            state.tick();
            assert!(!state.is_settling());
            assert_eq!(state.offset(), state.geometry().snap_offset(3));
        });
    }

    #[test]
    fn drag_supersedes_a_snap_in_flight() {
        with_clock(|clock| {
            let state = state_with(6, 390.0);
            state.select_page(3);
            clock.advance(100);
            state.tick();
            assert!(state.is_settling());

            let leftover = state.scroll_by(-20.0);
            assert!(leftover.abs() < 1e-3);
            assert!(!state.is_settling());
        });
    }

    #[test]
    fn scroll_clamps_at_the_rails_and_reports_leftover() {
        with_clock(|_| {
            let state = state_with(6, 390.0);
            assert_eq!(state.scroll_by(-50.0), -50.0);
            assert_eq!(state.offset(), 0.0);

            let leftover = state.scroll_by(5000.0);
            assert_eq!(state.offset(), state.geometry().max_offset());
            assert_eq!(leftover, 5000.0 - 1630.0);
        });
    }

    #[test]
    fn fling_always_settles_on_a_boundary() {
        with_clock(|clock| {
            let state = state_with(6, 390.0);
            state.scroll_by(40.0);

            let mut frames = 0;
            loop {
                clock.advance(16);
                let moving = state.tick();
                frames += 1;
                assert!(frames < 1000, "carousel never settled");
                if !moving && !state.is_animating() {
                    // allow the debounce path one more pass
                    clock.advance(200);
                    if !state.tick() && !state.is_animating() {
                        break;
                    }
                }
            }

            let g = state.geometry();
            let landed = g.snap_offset(state.current_page());
            assert!((state.offset() - landed).abs() <= 0.5);
        });
    }

    #[test]
    fn empty_collection_never_panics() {
        with_clock(|clock| {
            let state: CarouselState<u32> = state_with(0, 390.0);
            assert!(!state.tick());
            state.select_page(0);
            assert!(!state.is_settling());
            assert_eq!(state.current_page(), 0);

            clock.advance(500);
            assert!(!state.tick());

            state.set_selected(Some(7));
            state.sync_selection::<Slide>(&[]);
            assert_eq!(state.selected(), None);
            assert_eq!(active_index::<Slide>(&[], state.selected().as_ref()), 0);
        });
    }

    #[test]
    fn six_card_scenario_matches_the_paging_contract() {
        with_clock(|clock| {
            let items = slides(6);
            let state = state_with(6, 390.0);

            // exactly aligned on the third card (index 2)
            state.jump_to_page(2);
            state.sync_selection(&items);
            assert_eq!(active_index(&items, state.selected().as_ref()), 2);
            assert_eq!(state.current_page(), 2);

            // indicator tap on dot 5, then let the snap finish
            state.select_page(5);
            clock.advance(400);
            state.tick();
            state.sync_selection(&items);
            assert_eq!(active_index(&items, state.selected().as_ref()), 5);
            assert_eq!(state.current_page(), 5);
        });
    }

    #[test]
    fn selection_follows_ids_across_reorders() {
        with_clock(|_| {
            let mut items = slides(4);
            let state = state_with(4, 390.0);
            state.jump_to_page(1);
            state.sync_selection(&items);
            let chosen = items[1].clone();

            items.swap(1, 3);
            assert_eq!(
                active_index(&items, state.selected().as_ref()),
                3,
                "selection should track {chosen:?} by id"
            );
        });
    }

    #[test]
    fn config_defaults_and_validation() {
        let config = CarouselConfig::default();
        assert_eq!(config.effect, CarouselEffect::None);
        assert_eq!((config.card_width, config.card_height), (310.0, 403.0));
        assert_eq!(config.item_spacing, 16.0);
        assert_eq!(config.paging_control_spacing, 8.0);
        assert!(config.validate().is_ok());

        let bad = CarouselConfig::default().card_size(0.0, 100.0);
        assert_eq!(
            bad.validate(),
            Err(ConfigError::NonPositiveDimension {
                name: "card_width",
                value: 0.0
            })
        );
        let bad = CarouselConfig::default().item_spacing(-2.0);
        assert!(matches!(
            bad.validate(),
            Err(ConfigError::NegativeSpacing { .. })
        ));
    }

    fn compose(items: &Signal<Vec<Slide>>, state: &Rc<CarouselState<u32>>) -> View {
        let _pass = ComposeGuard::begin();
        Carousel(&CarouselConfig::default(), items.clone(), state.clone(), |slide| {
            crate::Text(slide.value().label.clone())
        })
    }

    fn indicator_of(view: &View) -> (usize, usize, PageCallback) {
        let dots = view.children.last().expect("indicator child");
        match &dots.kind {
            ViewKind::PageIndicator {
                pages,
                active_page,
                on_page_change,
                ..
            } => (*pages, *active_page, on_page_change.clone().unwrap()),
            other => panic!("expected PageIndicator, got {other:?}"),
        }
    }

    #[test]
    fn composed_tree_has_rail_gap_and_dots() {
        with_clock(|_| {
            let items = signal(slides(3));
            let state = Rc::new(state_with(3, 390.0));
            let view = compose(&items, &state);

            assert_eq!(view.children.len(), 3);
            assert!(matches!(view.children[0].kind, ViewKind::ScrollH { .. }));

            let (pages, active, _) = indicator_of(&view);
            assert_eq!(pages, 3);
            assert_eq!(active, 0);

            // three cards fit the 390px viewport plus buffer: all composed
            let strip = &view.children[0].children[0];
            assert_eq!(strip.children.len(), 3);
        });
    }

    #[test]
    fn indicator_tap_navigates_and_out_of_range_is_ignored() {
        with_clock(|clock| {
            let items = signal(slides(6));
            let state = Rc::new(state_with(6, 390.0));

            let view = compose(&items, &state);
            let (_, _, tap) = indicator_of(&view);

            // out of range first: nothing may move
            tap(6);
            tap(99);
            assert!(!state.is_settling());
            assert_eq!(state.offset(), 0.0);

            tap(2);
            clock.advance(400);
            state.tick();
            state.sync_selection(&items.get());

            let view = compose(&items, &state);
            let (pages, active, _) = indicator_of(&view);
            assert_eq!(pages, 6);
            assert_eq!(active, 2);
        });
    }

    #[test]
    fn parallax_wraps_content_only_when_the_effect_is_on() {
        with_clock(|_| {
            let items = signal(slides(3));
            let state = Rc::new(state_with(3, 390.0));
            state.jump_to_page(1);

            let plain = compose(&items, &state);
            let strip = &plain.children[0].children[0];
            // card 0 sits a full stride left of the origin; with the default
            // effect its content is the bare text node
            assert!(matches!(strip.children[0].children[0].kind, ViewKind::Text { .. }));

            let _pass = ComposeGuard::begin();
            let config = CarouselConfig::default().effect(CarouselEffect::LinearOffset);
            let offset_view = Carousel(&config, items.clone(), state.clone(), |slide| {
                crate::Text(slide.value().label.clone())
            });
            let strip = &offset_view.children[0].children[0];
            let wrapper = &strip.children[0].children[0];
            let transform = wrapper.modifier.transform.expect("parallax translation");
            // card 0 is -326px from the origin; content drifts +326px (in dp)
            assert!((transform.translate_x - 326.0).abs() < 0.5);
        });
    }
}
