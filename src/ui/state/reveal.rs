// SPDX-License-Identifier: MPL-2.0
//! Entrance animation bookkeeping for landing page sections.
//!
//! A [`Reveal`] records when a section was first scrolled into view. Item
//! progress is derived from the elapsed time with a per-item stagger, so a
//! card grid fades in one card after another. All progress math is pure over
//! [`Duration`] values; only the trigger timestamp touches wall-clock time.
//!
//! Animation timing is strictly a rendering concern: nothing behavioral
//! depends on a reveal having finished.

use std::time::{Duration, Instant};

/// Delay between consecutive items of a revealed group.
pub const ITEM_STAGGER: Duration = Duration::from_millis(100);

/// Time a single item takes to fade in fully.
pub const ITEM_DURATION: Duration = Duration::from_millis(500);

/// Cubic ease-out curve over `t` in `[0, 1]`.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Progress of item `index` after `elapsed` time, eased and clamped to
/// `[0, 1]`. Items later in the group start later.
#[must_use]
pub fn staggered_progress(elapsed: Duration, index: usize) -> f32 {
    let delay = ITEM_STAGGER
        .checked_mul(u32::try_from(index).unwrap_or(u32::MAX))
        .unwrap_or(Duration::MAX);
    let Some(active) = elapsed.checked_sub(delay) else {
        return 0.0;
    };
    let t = active.as_secs_f32() / ITEM_DURATION.as_secs_f32();
    ease_out(t)
}

/// Total time a group of `item_count` items needs to settle completely.
#[must_use]
pub fn settle_duration(item_count: usize) -> Duration {
    let last = item_count.saturating_sub(1);
    ITEM_STAGGER
        .checked_mul(u32::try_from(last).unwrap_or(u32::MAX))
        .unwrap_or(Duration::MAX)
        .saturating_add(ITEM_DURATION)
}

/// Trigger-once entrance animation state.
///
/// The default state is untriggered: every item reports zero progress until
/// [`Reveal::trigger`] records the first time the section entered the
/// viewport. Subsequent triggers are ignored, matching the "animate once on
/// scroll into view" contract. [`Reveal::restart`] exists for the gallery,
/// whose grid re-runs its entrance when the filter changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reveal {
    triggered_at: Option<Instant>,
}

impl Reveal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A reveal that is already running, used for content visible on launch.
    #[must_use]
    pub fn started(now: Instant) -> Self {
        Self {
            triggered_at: Some(now),
        }
    }

    /// Starts the animation if it has not started yet.
    pub fn trigger(&mut self, now: Instant) {
        if self.triggered_at.is_none() {
            self.triggered_at = Some(now);
        }
    }

    /// Restarts the animation unconditionally.
    pub fn restart(&mut self, now: Instant) {
        self.triggered_at = Some(now);
    }

    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.triggered_at.is_some()
    }

    /// Progress of item `index` at `now`, in `[0, 1]`.
    #[must_use]
    pub fn item_progress(&self, index: usize, now: Instant) -> f32 {
        match self.triggered_at {
            Some(start) => staggered_progress(now.saturating_duration_since(start), index),
            None => 0.0,
        }
    }

    /// Returns `true` while any of `item_count` items is still animating.
    #[must_use]
    pub fn is_animating(&self, item_count: usize, now: Instant) -> bool {
        match self.triggered_at {
            Some(start) => {
                now.saturating_duration_since(start) < settle_duration(item_count)
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_is_bounded() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(-1.0), 0.0);
        assert_eq!(ease_out(2.0), 1.0);
    }

    #[test]
    fn ease_out_front_loads_motion() {
        // Ease-out covers more than half the distance in the first half.
        assert!(ease_out(0.5) > 0.5);
    }

    #[test]
    fn first_item_starts_immediately() {
        assert_eq!(staggered_progress(Duration::ZERO, 0), 0.0);
        assert!(staggered_progress(Duration::from_millis(50), 0) > 0.0);
    }

    #[test]
    fn later_items_wait_for_their_stagger_delay() {
        // Item 2 starts 200ms in; at 150ms it has not moved.
        assert_eq!(staggered_progress(Duration::from_millis(150), 2), 0.0);
        assert!(staggered_progress(Duration::from_millis(250), 2) > 0.0);
    }

    #[test]
    fn progress_is_monotone_in_elapsed_time() {
        let mut last = 0.0_f32;
        for ms in (0..1000).step_by(50) {
            let progress = staggered_progress(Duration::from_millis(ms), 1);
            assert!(progress >= last);
            last = progress;
        }
    }

    #[test]
    fn progress_clamps_to_one() {
        assert_eq!(staggered_progress(Duration::from_secs(10), 3), 1.0);
    }

    #[test]
    fn settle_duration_accounts_for_stagger() {
        assert_eq!(settle_duration(1), ITEM_DURATION);
        assert_eq!(settle_duration(4), ITEM_STAGGER * 3 + ITEM_DURATION);
        // Zero items settle instantly after the base duration.
        assert_eq!(settle_duration(0), ITEM_DURATION);
    }

    #[test]
    fn untriggered_reveal_reports_zero_progress() {
        let reveal = Reveal::new();
        let now = Instant::now();
        assert_eq!(reveal.item_progress(0, now), 0.0);
        assert!(!reveal.is_animating(4, now));
        assert!(!reveal.is_triggered());
    }

    #[test]
    fn trigger_is_idempotent() {
        let mut reveal = Reveal::new();
        let start = Instant::now();
        reveal.trigger(start);
        let later = start + Duration::from_secs(5);
        reveal.trigger(later);
        // Second trigger must not restart the animation.
        assert_eq!(reveal.item_progress(0, later), 1.0);
    }

    #[test]
    fn restart_resets_progress() {
        let start = Instant::now();
        let mut reveal = Reveal::started(start);
        let later = start + Duration::from_secs(5);
        assert_eq!(reveal.item_progress(0, later), 1.0);

        reveal.restart(later);
        assert_eq!(reveal.item_progress(0, later), 0.0);
        assert!(reveal.is_animating(6, later));
    }

    #[test]
    fn animation_settles_after_last_item() {
        let start = Instant::now();
        let reveal = Reveal::started(start);
        let mid = start + Duration::from_millis(300);
        let done = start + settle_duration(4);
        assert!(reveal.is_animating(4, mid));
        assert!(!reveal.is_animating(4, done));
    }
}
