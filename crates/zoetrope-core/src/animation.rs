use parking_lot::RwLock;
use std::time::Duration;
use web_time::Instant;

/// Query the installed animation clock.
///
/// Falls back to the system clock when none has been installed. Tests install
/// a [`TestClock`] and step it explicitly; `set_clock` can be called any
/// number of times, so a test can re-pin the clock between frames.
pub fn now() -> Instant {
    CLOCK.read().as_ref().map(|c| c.now()).unwrap_or_else(Instant::now)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Eased with a single slight overshoot past the target and no further
    /// bounce. Used for snap-to-page scrolling.
    Overshoot,
}

impl Easing {
    pub fn interpolate(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::Overshoot => {
                // back-out curve, overshoots by ~10% around t = 0.7
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                let u = t - 1.0;
                1.0 + C3 * u * u * u + C1 * u * u
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
    pub delay: Duration,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            easing: Easing::EaseInOut,
            delay: Duration::ZERO,
        }
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
        }
    }

    pub fn fast() -> Self {
        Self {
            duration: Duration::from_millis(150),
            easing: Easing::EaseOut,
            delay: Duration::ZERO,
        }
    }

    /// The page-snap spec: ~0.35s with a slight overshoot and no bounce.
    pub fn snappy() -> Self {
        Self {
            duration: Duration::from_millis(350),
            easing: Easing::Overshoot,
            delay: Duration::ZERO,
        }
    }
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for crate::Color {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        let ch = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
        crate::Color(
            ch(self.0, other.0),
            ch(self.1, other.1),
            ch(self.2, other.2),
            ch(self.3, other.3),
        )
    }
}

/// Source of "now" for every animation in the process.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

static CLOCK: RwLock<Option<Box<dyn Clock>>> = RwLock::new(None);

/// Install (or replace) the global animation clock.
pub fn set_clock(clock: Box<dyn Clock>) {
    *CLOCK.write() = Some(clock);
}

/// A clock pinned to an instant; tests re-install it to step time.
#[derive(Clone, Copy)]
pub struct TestClock {
    pub t: Instant,
}

impl Clock for TestClock {
    fn now(&self) -> Instant {
        self.t
    }
}

/// A value that moves toward its target over time.
///
/// Advance with [`update`](AnimatedValue::update) once per frame; it returns
/// `false` once the value has arrived.
pub struct AnimatedValue<T: Interpolate + Clone> {
    current: T,
    target: T,
    start: T,
    spec: AnimationSpec,
    start_time: Option<Instant>,
}

impl<T: Interpolate + Clone> AnimatedValue<T> {
    pub fn new(initial: T, spec: AnimationSpec) -> Self {
        Self {
            current: initial.clone(),
            target: initial.clone(),
            start: initial,
            spec,
            start_time: None,
        }
    }

    pub fn set_target(&mut self, target: T) {
        if self.start_time.is_none() {
            self.start = self.current.clone();
        }
        self.target = target;
        self.start_time = Some(now());
    }

    /// Advance to the clock's current time. Returns `true` while in flight.
    pub fn update(&mut self) -> bool {
        let Some(started) = self.start_time else {
            return false;
        };
        let elapsed = now().saturating_duration_since(started);

        if elapsed < self.spec.delay {
            return true;
        }
        let run = elapsed - self.spec.delay;

        if run >= self.spec.duration {
            self.current = self.target.clone();
            self.start_time = None;
            return false;
        }

        let t = run.as_secs_f32() / self.spec.duration.as_secs_f32();
        let eased = self.spec.easing.interpolate(t);
        self.current = self.start.interpolate(&self.target, eased);
        true
    }

    /// Linear time progress in `[0, 1]` while in flight, `None` at rest.
    pub fn progress(&self) -> Option<f32> {
        let started = self.start_time?;
        let elapsed = now().saturating_duration_since(started);
        if elapsed < self.spec.delay {
            return Some(0.0);
        }
        let run = (elapsed - self.spec.delay).as_secs_f32();
        Some((run / self.spec.duration.as_secs_f32()).clamp(0.0, 1.0))
    }

    pub fn get(&self) -> &T {
        &self.current
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn is_animating(&self) -> bool {
        self.start_time.is_some()
    }
}
