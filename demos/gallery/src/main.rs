//! Headless carousel walkthrough.
//!
//! Drives a six-card carousel frame by frame without a renderer: a simulated
//! drag, a "native" tap on the last indicator dot through the bridge, and a
//! per-card mutation through the item binding. The animation clock is pinned
//! and stepped manually so the run is reproducible.

use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use web_time::Instant;
use zoetrope_core::*;
use zoetrope_ui::{
    Carousel, CarouselConfig, CarouselEffect, CarouselItem, CarouselState, Column,
    IndicatorBackend, IndicatorStyle, ItemBinding, PageIndicatorBridge, Spacer, Text, ViewExt,
};

#[derive(Clone, Debug, PartialEq)]
struct Artwork {
    id: u32,
    title: &'static str,
    tone: Color,
    starred: bool,
}

impl CarouselItem for Artwork {
    type Id = u32;
    fn id(&self) -> u32 {
        self.id
    }
}

fn gallery() -> Vec<Artwork> {
    let piece = |id, title, hex| Artwork {
        id,
        title,
        tone: Color::from_hex(hex),
        starred: false,
    };
    vec![
        piece(1, "Dune at Dusk", "#C2703D"),
        piece(2, "Harbor Lights", "#2E5E8C"),
        piece(3, "Moss Terrace", "#3E7D4F"),
        piece(4, "Paper Cranes", "#B8B2A7"),
        piece(5, "Night Market", "#7C3E8C"),
        piece(6, "Tide Pools", "#2E8C85"),
    ]
}

#[allow(non_snake_case)]
fn ArtworkCard(art: ItemBinding<Artwork>) -> View {
    let title = art.value().title;
    let star = if art.value().starred { "★" } else { "☆" };
    let tone = art.value().tone;

    Column(
        Modifier::new()
            .fill_max_size()
            .background(tone)
            .clip_rounded(24.0)
            .padding(16.0)
            .clickable()
            .on_pointer_down(move |_| art.update(|a| a.starred = !a.starred)),
    )
    .child((Text(title), Spacer(), Text(format!("{star} tap to star"))))
}

struct ConsoleDots;

impl IndicatorBackend for ConsoleDots {
    fn render(&mut self, pages: usize, active_page: usize, _style: &IndicatorStyle) {
        let dots: String = (0..pages)
            .map(|i| if i == active_page { '●' } else { '○' })
            .collect();
        println!("  dots  [{dots}]");
    }
}

fn advance(clock: &mut Instant, ms: u64) {
    *clock += Duration::from_millis(ms);
    set_clock(Box::new(TestClock { t: *clock }));
}

fn run_until_settled(state: &CarouselState<u32>, clock: &mut Instant) {
    for _ in 0..600 {
        advance(clock, 16);
        if !state.tick() && !state.is_animating() {
            // leave enough quiet time for the snap debounce to engage
            advance(clock, 160);
            if !state.tick() && !state.is_animating() {
                return;
            }
        }
    }
}

fn compose_frame(
    config: &CarouselConfig,
    artworks: &Signal<Vec<Artwork>>,
    state: &Rc<CarouselState<u32>>,
) -> View {
    let _pass = ComposeGuard::begin();
    Carousel(config, artworks.clone(), state.clone(), ArtworkCard)
}

fn report(view: &View, bridge: &PageIndicatorBridge<ConsoleDots>, state: &CarouselState<u32>) {
    println!(
        "  page {} at offset {:.1}px",
        state.current_page(),
        state.offset()
    );
    // card transforms show the focus scale and parallax at work
    let strip = &view.children[0].children[0];
    for (i, node) in strip.children.iter().enumerate() {
        if let Some(t) = node.modifier.transform {
            println!("  node {i}: scale {:.3}", t.scale_x);
        }
    }
    if let Some(dots) = view.children.last() {
        bridge.sync(dots);
    }
}

// Rightmost pressable node: at rest on the last page that is the focused card.
fn find_pointer_target(view: &View) -> Option<Rc<dyn Fn(PointerEvent)>> {
    if let Some(cb) = &view.modifier.on_pointer_down {
        return Some(cb.clone());
    }
    view.children.iter().rev().find_map(find_pointer_target)
}

fn main() -> Result<()> {
    env_logger::init();

    let mut clock = Instant::now();
    set_clock(Box::new(TestClock { t: clock }));

    let artworks = signal(gallery());
    let state: Rc<CarouselState<u32>> = Rc::new(CarouselState::new());
    state.set_viewport_width(390.0);

    let config = CarouselConfig::default().effect(CarouselEffect::ClampedOffset);
    config.validate()?;
    let bridge = PageIndicatorBridge::new(ConsoleDots);

    println!("mounted:");
    let view = compose_frame(&config, &artworks, &state);
    report(&view, &bridge, &state);

    println!("drag right, then settle:");
    for _ in 0..14 {
        state.scroll_by(48.0);
        advance(&mut clock, 16);
        state.tick();
    }
    run_until_settled(&state, &mut clock);
    let view = compose_frame(&config, &artworks, &state);
    report(&view, &bridge, &state);

    println!("native tap on dot 5:");
    bridge.notify_tap(5);
    run_until_settled(&state, &mut clock);
    let view = compose_frame(&config, &artworks, &state);
    report(&view, &bridge, &state);

    println!("tap the focused card to star it:");
    if let Some(press) = find_pointer_target(&view) {
        press(PointerEvent::down(PointerKind::Touch, Vec2::ZERO));
    }
    let starred: Vec<&'static str> = artworks
        .get()
        .iter()
        .filter(|a| a.starred)
        .map(|a| a.title)
        .collect();
    println!("  starred: {starred:?}");

    Ok(())
}
