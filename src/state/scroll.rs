/// Scroll position tracking for one horizontal list
///
/// Each list keeps its last known offset, runs its own programmatic
/// animation, and sorts incoming scroll notifications into user gestures
/// and echoes of our own `scroll_to` commands. Only user gestures may
/// drive the active index.
use std::time::{Duration, Instant};

use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::Task;

use super::motion::{Easing, ScrollAnimation};

/// Quiet time after the last user scroll event before a gesture counts as settled
pub const SETTLE_DELAY: Duration = Duration::from_millis(120);

/// Offsets this close to a commanded offset are treated as its echo
const ECHO_TOLERANCE: f32 = 1.0;

/// Who moved the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOrigin {
    User,
    Programmatic,
}

#[derive(Debug, Clone)]
pub struct ScrollTracker {
    id: scrollable::Id,
    offset: f32,
    viewport_width: f32,
    easing: Easing,
    animation: Option<ScrollAnimation>,
    /// Last offset we told the widget to scroll to
    commanded: Option<f32>,
    /// Time of the most recent user scroll event not yet settled
    gesture_at: Option<Instant>,
}

impl ScrollTracker {
    pub fn new(viewport_width: f32) -> Self {
        Self {
            id: scrollable::Id::unique(),
            offset: 0.0,
            viewport_width,
            easing: Easing::default(),
            animation: None,
            commanded: None,
            gesture_at: None,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn id(&self) -> &scrollable::Id {
        &self.id
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        if width > 0.0 {
            self.viewport_width = width;
        }
    }

    /// Where the list is headed: the animation target, or the current offset
    pub fn target(&self) -> f32 {
        self.animation
            .map_or(self.offset, |animation| animation.target())
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether this list needs frame ticks
    pub fn is_busy(&self) -> bool {
        self.is_animating() || self.gesture_at.is_some()
    }

    /// Record a scroll notification from the widget and classify it
    pub fn on_scrolled(&mut self, offset: f32, viewport_width: f32, now: Instant) -> ScrollOrigin {
        self.set_viewport_width(viewport_width);

        if self.animation.is_some() {
            return ScrollOrigin::Programmatic;
        }

        if let Some(commanded) = self.commanded {
            if (offset - commanded).abs() <= ECHO_TOLERANCE {
                self.offset = offset;
                return ScrollOrigin::Programmatic;
            }
        }

        self.offset = offset;
        self.commanded = None;
        self.gesture_at = Some(now);
        ScrollOrigin::User
    }

    /// Start an animated scroll from the current offset to `target`
    pub fn animate_to(&mut self, target: f32, now: Instant) {
        self.gesture_at = None;

        // Already there, or already on the way
        let placed = self.animation.is_some() || self.commanded.is_some();
        if placed && (target - self.target()).abs() <= ECHO_TOLERANCE {
            return;
        }

        self.animation = Some(ScrollAnimation::new(self.offset, target, now).with_easing(self.easing));
    }

    /// Move to `target` immediately, cancelling any animation
    pub fn jump_to(&mut self, target: f32) -> f32 {
        self.animation = None;
        self.gesture_at = None;
        self.offset = target;
        self.commanded = Some(target);
        target
    }

    /// Advance the running animation. Returns the offset to scroll to, if any.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let animation = self.animation?;
        let offset = animation.sample(now);

        if animation.is_finished(now) {
            self.animation = None;
        }

        self.offset = offset;
        self.commanded = Some(offset);
        Some(offset)
    }

    /// If the user's gesture has been quiet for [`SETTLE_DELAY`], end it and
    /// return the offset it came to rest at.
    pub fn take_settled(&mut self, now: Instant) -> Option<f32> {
        let at = self.gesture_at?;
        if now.saturating_duration_since(at) < SETTLE_DELAY {
            return None;
        }

        self.gesture_at = None;
        Some(self.offset)
    }

    /// Task that moves the widget to `offset`
    pub fn scroll_to<T>(&self, offset: f32) -> Task<T> {
        scrollable::scroll_to(self.id.clone(), AbsoluteOffset { x: offset, y: 0.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::motion::SCROLL_ANIMATION;

    #[test]
    fn test_user_gesture_settles_after_delay() {
        let start = Instant::now();
        let mut tracker = ScrollTracker::new(400.0);

        assert_eq!(tracker.on_scrolled(150.0, 400.0, start), ScrollOrigin::User);
        assert!(tracker.is_busy());
        assert_eq!(tracker.take_settled(start + Duration::from_millis(50)), None);

        let later = start + Duration::from_millis(60);
        assert_eq!(tracker.on_scrolled(300.0, 400.0, later), ScrollOrigin::User);
        assert_eq!(tracker.take_settled(later + Duration::from_millis(100)), None);
        assert_eq!(tracker.take_settled(later + SETTLE_DELAY), Some(300.0));
        assert!(!tracker.is_busy());
    }

    #[test]
    fn test_animation_reaches_target_and_echoes_are_ignored() {
        let start = Instant::now();
        let mut tracker = ScrollTracker::new(400.0);

        tracker.animate_to(800.0, start);
        assert!(tracker.is_animating());
        assert_eq!(tracker.target(), 800.0);

        let mid = tracker.tick(start + Duration::from_millis(100)).unwrap();
        assert!(mid > 0.0 && mid < 800.0);
        assert_eq!(tracker.on_scrolled(mid, 400.0, start), ScrollOrigin::Programmatic);

        assert_eq!(tracker.tick(start + SCROLL_ANIMATION), Some(800.0));
        assert!(!tracker.is_animating());
        assert_eq!(tracker.tick(start + SCROLL_ANIMATION * 2), None);

        // Late echo of the final scroll_to
        assert_eq!(
            tracker.on_scrolled(800.0, 400.0, start + SCROLL_ANIMATION * 2),
            ScrollOrigin::Programmatic
        );
        assert!(!tracker.is_busy());
    }

    #[test]
    fn test_jump_is_immediate() {
        let mut tracker = ScrollTracker::new(400.0);
        tracker.animate_to(1200.0, Instant::now());

        assert_eq!(tracker.jump_to(600.0), 600.0);
        assert!(!tracker.is_animating());
        assert_eq!(tracker.offset(), 600.0);
        assert_eq!(
            tracker.on_scrolled(600.0, 400.0, Instant::now()),
            ScrollOrigin::Programmatic
        );
    }

    #[test]
    fn test_animation_to_current_commanded_offset_is_skipped() {
        let mut tracker = ScrollTracker::new(400.0);
        tracker.jump_to(400.0);

        tracker.animate_to(400.0, Instant::now());
        assert!(!tracker.is_animating());
    }

    #[test]
    fn test_viewport_width_ignores_empty_bounds() {
        let mut tracker = ScrollTracker::new(400.0);
        tracker.on_scrolled(0.0, 0.0, Instant::now());
        assert_eq!(tracker.viewport_width(), 400.0);

        tracker.on_scrolled(0.0, 380.0, Instant::now());
        assert_eq!(tracker.viewport_width(), 380.0);
    }
}
