//! Double-press gesture detection.
//!
//! A single physical key (e.g. `d`) is overloaded so that two presses
//! within a short window mean something more consequential than one.
//! Each logical gesture key is tracked independently — a pending `d`
//! never resolves a following `g` into a double tap.
//!
//! The tracker never schedules callbacks. Callers pass the current
//! [`Instant`] into [`GestureTracker::press`] and evaluate
//! [`GestureTracker::expire`] on their own tick; because expiry compares
//! against the recorded press time, a deadline computed for an earlier
//! press can never clear a later one.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How long after a first press a second press still counts as a double tap.
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(500);

/// Logical keys that participate in double-tap detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKey {
    /// `d d` — queue the highlighted row for deletion.
    Delete,
    /// `y y` — flash the highlight (yank).
    Yank,
    /// `g g` — jump to the top of the list.
    Top,
}

/// Per-key double-tap state.
#[derive(Debug, Default)]
pub struct GestureTracker {
    pending: HashMap<GestureKey, Instant>,
}

impl GestureTracker {
    /// Creates a tracker with no pending presses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a press of `key` at `now`.
    ///
    /// Returns `true` when this press completes a double tap: the previous
    /// press of the same key happened within [`DOUBLE_TAP_WINDOW`]. A
    /// recognized double tap consumes the pending state, so an immediate
    /// third press starts a fresh single-press count. A press outside the
    /// window restarts the window instead.
    pub fn press(&mut self, key: GestureKey, now: Instant) -> bool {
        if let Some(first) = self.pending.get(&key) {
            if now.duration_since(*first) <= DOUBLE_TAP_WINDOW {
                self.pending.remove(&key);
                return true;
            }
        }
        self.pending.insert(key, now);
        false
    }

    /// Clears the pending press for `key`, if any.
    ///
    /// Used when another action consumes the key's meaning (e.g. a visual
    /// mode delete resolves on the first press).
    pub fn reset(&mut self, key: GestureKey) {
        self.pending.remove(&key);
    }

    /// Drops pending presses whose window elapsed before `now`.
    pub fn expire(&mut self, now: Instant) {
        self.pending
            .retain(|_, first| now.duration_since(*first) <= DOUBLE_TAP_WINDOW);
    }

    /// The earliest instant at which a pending press will expire, if any.
    ///
    /// Event loops use this to bound their poll timeout so expiry is
    /// observed without busy-waiting.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending
            .values()
            .min()
            .map(|first| *first + DOUBLE_TAP_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_press_is_not_a_double_tap() {
        let mut tracker = GestureTracker::new();
        assert!(!tracker.press(GestureKey::Delete, Instant::now()));
    }

    #[test]
    fn two_presses_within_window_report_double_tap() {
        let mut tracker = GestureTracker::new();
        let t0 = Instant::now();
        assert!(!tracker.press(GestureKey::Delete, t0));
        assert!(tracker.press(GestureKey::Delete, t0 + Duration::from_millis(300)));
    }

    #[test]
    fn second_press_after_window_restarts_count() {
        let mut tracker = GestureTracker::new();
        let t0 = Instant::now();
        assert!(!tracker.press(GestureKey::Delete, t0));
        // 0.6s later: too late, counts as a fresh first press.
        assert!(!tracker.press(GestureKey::Delete, t0 + Duration::from_millis(600)));
        // ...which a prompt follow-up then completes.
        assert!(tracker.press(GestureKey::Delete, t0 + Duration::from_millis(800)));
    }

    #[test]
    fn third_press_starts_fresh_sequence() {
        let mut tracker = GestureTracker::new();
        let t0 = Instant::now();
        assert!(!tracker.press(GestureKey::Top, t0));
        assert!(tracker.press(GestureKey::Top, t0 + Duration::from_millis(100)));
        // Immediately after a resolved double tap, the count is back to one.
        assert!(!tracker.press(GestureKey::Top, t0 + Duration::from_millis(200)));
        assert!(tracker.press(GestureKey::Top, t0 + Duration::from_millis(300)));
    }

    #[test]
    fn keys_are_tracked_independently() {
        let mut tracker = GestureTracker::new();
        let t0 = Instant::now();
        assert!(!tracker.press(GestureKey::Delete, t0));
        assert!(!tracker.press(GestureKey::Yank, t0 + Duration::from_millis(100)));
        // The delete press is still pending despite the interleaved yank.
        assert!(tracker.press(GestureKey::Delete, t0 + Duration::from_millis(200)));
    }

    #[test]
    fn expire_clears_elapsed_presses_only() {
        let mut tracker = GestureTracker::new();
        let t0 = Instant::now();
        tracker.press(GestureKey::Delete, t0);
        tracker.press(GestureKey::Yank, t0 + Duration::from_millis(400));

        tracker.expire(t0 + Duration::from_millis(600));

        // Delete's window elapsed; yank's did not.
        assert!(!tracker.press(GestureKey::Delete, t0 + Duration::from_millis(650)));
        assert!(tracker.press(GestureKey::Yank, t0 + Duration::from_millis(650)));
    }

    #[test]
    fn stale_deadline_cannot_clear_newer_press() {
        let mut tracker = GestureTracker::new();
        let t0 = Instant::now();
        tracker.press(GestureKey::Delete, t0);
        // A second sequence starts after the first window lapses.
        tracker.press(GestureKey::Delete, t0 + Duration::from_millis(700));

        // Expiry evaluated at the *first* press's deadline must not touch
        // the newer press.
        tracker.expire(t0 + DOUBLE_TAP_WINDOW);
        assert!(tracker.press(GestureKey::Delete, t0 + Duration::from_millis(900)));
    }

    #[test]
    fn reset_consumes_pending_press() {
        let mut tracker = GestureTracker::new();
        let t0 = Instant::now();
        tracker.press(GestureKey::Delete, t0);
        tracker.reset(GestureKey::Delete);
        assert!(!tracker.press(GestureKey::Delete, t0 + Duration::from_millis(100)));
    }

    #[test]
    fn next_deadline_tracks_earliest_press() {
        let mut tracker = GestureTracker::new();
        assert!(tracker.next_deadline().is_none());

        let t0 = Instant::now();
        tracker.press(GestureKey::Yank, t0 + Duration::from_millis(100));
        tracker.press(GestureKey::Delete, t0);
        assert_eq!(tracker.next_deadline(), Some(t0 + DOUBLE_TAP_WINDOW));
    }
}
