//! Dot-style page indicator, bridged to a native platform control.
//!
//! Composition emits a `ViewKind::PageIndicator` node carrying the dot props
//! and the tap callback. Hosts that render the tree themselves can draw the
//! dots from those props; hosts with a platform page control (the usual case
//! on mobile) put a [`PageIndicatorBridge`] between the node and the widget:
//! `sync` pushes prop updates down as property writes, `notify_tap` forwards
//! the widget's tap events back up. The bridge is a pure shim; it keeps no
//! page state of its own.

use std::cell::RefCell;
use std::rc::Rc;

use zoetrope_core::*;

/// Tints and metrics of the dot row. `Default` pulls both tints from the
/// ambient [`Theme`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorStyle {
    pub tint: Color,
    pub active_tint: Color,
    /// Dot diameter, dp.
    pub dot_size: f32,
    /// Gap between dots, dp.
    pub dot_spacing: f32,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        let theme = theme();
        Self {
            tint: theme.outline,
            active_tint: theme.primary,
            dot_size: 8.0,
            dot_spacing: 8.0,
        }
    }
}

/// One dot per page, the active one highlighted. `active_page` is expected to
/// already be in range (the carousel derives it that way); `pages == 0`
/// renders no dots at all.
pub fn PageIndicator(
    pages: usize,
    active_page: usize,
    style: IndicatorStyle,
    on_select: impl Fn(usize) + 'static,
) -> View {
    View::new(
        0,
        ViewKind::PageIndicator {
            pages,
            active_page,
            tint: style.tint,
            active_tint: style.active_tint,
            dot_size: style.dot_size,
            dot_spacing: style.dot_spacing,
            on_page_change: Some(Rc::new(on_select)),
        },
    )
}

/// The native widget surface the bridge writes into.
pub trait IndicatorBackend {
    fn render(&mut self, pages: usize, active_page: usize, style: &IndicatorStyle);
}

/// Adapter between a composed indicator node and a platform dot control.
pub struct PageIndicatorBridge<B: IndicatorBackend> {
    backend: RefCell<B>,
    on_page_change: RefCell<Option<PageCallback>>,
}

impl<B: IndicatorBackend> PageIndicatorBridge<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: RefCell::new(backend),
            on_page_change: RefCell::new(None),
        }
    }

    /// Push an indicator node's props into the native widget and capture its
    /// tap callback. Returns `false` (touching nothing) for any other node.
    pub fn sync(&self, view: &View) -> bool {
        let ViewKind::PageIndicator {
            pages,
            active_page,
            tint,
            active_tint,
            dot_size,
            dot_spacing,
            on_page_change,
        } = &view.kind
        else {
            return false;
        };

        let style = IndicatorStyle {
            tint: *tint,
            active_tint: *active_tint,
            dot_size: *dot_size,
            dot_spacing: *dot_spacing,
        };
        self.backend.borrow_mut().render(*pages, *active_page, &style);
        *self.on_page_change.borrow_mut() = on_page_change.clone();
        true
    }

    /// Forward a native tap on dot `index` to the composition. Passed through
    /// verbatim; bounds handling belongs to the receiving side.
    pub fn notify_tap(&self, index: usize) {
        let cb = self.on_page_change.borrow().clone();
        match cb {
            Some(cb) => cb(index),
            None => log::trace!("indicator tap on dot {index} before first sync; dropped"),
        }
    }

    pub fn into_backend(self) -> B {
        self.backend.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Box;

    #[derive(Default)]
    struct RecordingControl {
        log: Rc<RefCell<Vec<(usize, usize, IndicatorStyle)>>>,
    }

    impl IndicatorBackend for RecordingControl {
        fn render(&mut self, pages: usize, active_page: usize, style: &IndicatorStyle) {
            self.log.borrow_mut().push((pages, active_page, *style));
        }
    }

    #[test]
    fn sync_writes_props_into_the_backend() {
        let control = RecordingControl::default();
        let log = control.log.clone();
        let bridge = PageIndicatorBridge::new(control);

        let style = IndicatorStyle {
            tint: Color::from_hex("#333333"),
            active_tint: Color::WHITE,
            ..IndicatorStyle::default()
        };
        assert!(bridge.sync(&PageIndicator(4, 1, style, |_| {})));

        let entries = log.borrow();
        assert_eq!(entries.len(), 1);
        let (pages, active, synced) = entries[0];
        assert_eq!((pages, active), (4, 1));
        assert_eq!(synced.tint, Color::from_hex("#333333"));
        assert_eq!(synced.active_tint, Color::WHITE);
    }

    #[test]
    fn sync_ignores_other_nodes() {
        let control = RecordingControl::default();
        let log = control.log.clone();
        let bridge = PageIndicatorBridge::new(control);

        assert!(!bridge.sync(&Box(Modifier::new())));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn taps_are_forwarded_to_the_composition() {
        let taps = Rc::new(RefCell::new(Vec::new()));
        let bridge = PageIndicatorBridge::new(RecordingControl::default());

        // before any sync there is no listener; this must not panic
        bridge.notify_tap(0);

        let taps_in = taps.clone();
        bridge.sync(&PageIndicator(3, 0, IndicatorStyle::default(), move |k| {
            taps_in.borrow_mut().push(k)
        }));

        bridge.notify_tap(2);
        bridge.notify_tap(0);
        assert_eq!(*taps.borrow(), vec![2, 0]);
    }

    #[test]
    fn empty_collection_renders_zero_dots() {
        let control = RecordingControl::default();
        let log = control.log.clone();
        let bridge = PageIndicatorBridge::new(control);

        bridge.sync(&PageIndicator(0, 0, IndicatorStyle::default(), |_| {}));
        assert_eq!(log.borrow()[0].0, 0);
        assert_eq!(log.borrow()[0].1, 0);
    }

    #[test]
    fn default_style_follows_the_theme() {
        let custom = Theme {
            primary: Color::from_hex("#FF0066"),
            outline: Color::from_hex("#101010"),
            ..Theme::default()
        };
        with_theme(custom, || {
            let style = IndicatorStyle::default();
            assert_eq!(style.active_tint, Color::from_hex("#FF0066"));
            assert_eq!(style.tint, Color::from_hex("#101010"));
        });
    }
}
