/// Animated programmatic scrolling
///
/// A `ScrollAnimation` interpolates a scroll offset from `from` to `to` over a
/// fixed duration. It is sampled with frame timestamps from
/// `iced::window::frames()`, so the animation runs at display rate.
use std::time::{Duration, Instant};

/// How long a programmatic scroll takes
pub const SCROLL_ANIMATION: Duration = Duration::from_millis(280);

/// Easing curve applied to animation progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] onto the curve
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
    easing: Easing,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32, started: Instant) -> Self {
        Self {
            from,
            to,
            started,
            duration: SCROLL_ANIMATION,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Linear progress in [0, 1] at `now`
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }

        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Offset at `now`. Lands exactly on the target once finished.
    pub fn sample(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }

        self.from + (self.to - self.from) * self.easing.apply(t)
    }
}
