//! Swipe gesture interpretation
//!
//! Tracks a drag from press to release and resolves it to a navigation
//! command only when the motion is predominantly horizontal and long enough.
//! Coordinates are plain logical points so the logic stays GUI-free.

use crate::commands::NavCommand;
use crate::constants::carousel::SWIPE_THRESHOLD;

#[derive(Debug, Default)]
pub struct SwipeTracker {
    start: Option<(f32, f32)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Resolve the gesture on release. Dragging content left-to-right
    /// (positive delta) goes to the previous card, right-to-left to the next.
    /// Below-threshold or vertical-dominant motion yields nothing, as does a
    /// release without a recorded start.
    pub fn finish(&mut self, x: f32, y: f32) -> Option<NavCommand> {
        let (start_x, start_y) = self.start.take()?;
        let delta_x = x - start_x;
        let delta_y = y - start_y;

        if delta_x.abs() <= delta_y.abs() || delta_x.abs() <= SWIPE_THRESHOLD {
            return None;
        }

        if delta_x > 0.0 {
            Some(NavCommand::Previous)
        } else {
            Some(NavCommand::Next)
        }
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(dx: f32, dy: f32) -> Option<NavCommand> {
        let mut tracker = SwipeTracker::new();
        tracker.begin(200.0, 300.0);
        tracker.finish(200.0 + dx, 300.0 + dy)
    }

    #[test]
    fn test_horizontal_left_swipe_is_next() {
        assert_eq!(swipe(-80.0, 5.0), Some(NavCommand::Next));
    }

    #[test]
    fn test_horizontal_right_swipe_is_previous() {
        assert_eq!(swipe(80.0, -5.0), Some(NavCommand::Previous));
    }

    #[test]
    fn test_vertical_dominant_swipe_is_ignored() {
        assert_eq!(swipe(-80.0, 90.0), None);
    }

    #[test]
    fn test_below_threshold_swipe_is_ignored() {
        assert_eq!(swipe(-30.0, 0.0), None);
        assert_eq!(swipe(50.0, 0.0), None); // exactly at threshold does not trigger
    }

    #[test]
    fn test_finish_without_begin_yields_nothing() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.finish(100.0, 100.0), None);
    }

    #[test]
    fn test_gesture_consumed_after_finish() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(0.0, 0.0);
        assert_eq!(tracker.finish(-80.0, 0.0), Some(NavCommand::Next));
        assert_eq!(tracker.finish(-160.0, 0.0), None);
    }

    #[test]
    fn test_cancel_discards_start() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(0.0, 0.0);
        tracker.cancel();
        assert_eq!(tracker.finish(-80.0, 0.0), None);
    }
}
