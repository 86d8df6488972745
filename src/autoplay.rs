//! Auto-play timer
//!
//! Advances the carousel on a fixed interval. Suspended while the pointer
//! hovers the carousel or the window is unfocused; while suspended the clock
//! is held, so resuming never produces a burst of catch-up advances. All
//! methods take explicit instants so tests can drive a logical clock.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct AutoPlay {
    interval: Duration,
    last_advance: Option<Instant>,
    hovered: bool,
    window_visible: bool,
}

impl AutoPlay {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_advance: None,
            hovered: false,
            window_visible: true,
        }
    }

    /// Idempotent: starting an already-running timer is a no-op, never a
    /// second timer.
    pub fn start(&mut self, now: Instant) {
        if self.last_advance.is_none() {
            self.last_advance = Some(now);
        }
    }

    pub fn stop(&mut self) {
        self.last_advance = None;
    }

    pub fn is_running(&self) -> bool {
        self.last_advance.is_some()
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn set_window_visible(&mut self, visible: bool) {
        self.window_visible = visible;
    }

    fn suspended(&self) -> bool {
        self.hovered || !self.window_visible
    }

    /// True at most once per elapsed interval; the caller issues one `Next`.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(last) = self.last_advance else {
            return false;
        };
        if self.suspended() {
            // Hold the clock so the interval restarts from the resume point
            self.last_advance = Some(now);
            return false;
        }
        if now.duration_since(last) >= self.interval {
            self.last_advance = Some(now);
            true
        } else {
            false
        }
    }

    /// Time until the next advance, for repaint scheduling.
    /// None when stopped or suspended.
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        let last = self.last_advance?;
        if self.suspended() {
            return None;
        }
        Some(self.interval.saturating_sub(now.duration_since(last)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_secs(5);

    #[test]
    fn test_advances_once_per_interval() {
        let t0 = Instant::now();
        let mut autoplay = AutoPlay::new(INTERVAL);
        autoplay.start(t0);

        assert!(!autoplay.poll(t0 + Duration::from_secs(2)));
        assert!(autoplay.poll(t0 + Duration::from_secs(5)));
        // The clock re-armed at t0+5s
        assert!(!autoplay.poll(t0 + Duration::from_secs(6)));
        assert!(autoplay.poll(t0 + Duration::from_secs(10)));
    }

    #[test]
    fn test_start_is_idempotent() {
        let t0 = Instant::now();
        let mut autoplay = AutoPlay::new(INTERVAL);
        autoplay.start(t0);
        // A second start must not re-arm the interval
        autoplay.start(t0 + Duration::from_secs(4));
        assert!(autoplay.poll(t0 + Duration::from_secs(5)));
    }

    #[test]
    fn test_stopped_timer_never_fires() {
        let t0 = Instant::now();
        let mut autoplay = AutoPlay::new(INTERVAL);
        assert!(!autoplay.poll(t0 + Duration::from_secs(60)));
        autoplay.start(t0);
        autoplay.stop();
        assert!(!autoplay.poll(t0 + Duration::from_secs(60)));
    }

    #[test]
    fn test_hover_suspends_without_catchup_burst() {
        let t0 = Instant::now();
        let mut autoplay = AutoPlay::new(INTERVAL);
        autoplay.start(t0);

        autoplay.set_hovered(true);
        // Hovered across several intervals: no advances
        assert!(!autoplay.poll(t0 + Duration::from_secs(7)));
        assert!(!autoplay.poll(t0 + Duration::from_secs(14)));

        autoplay.set_hovered(false);
        // Resumed: a full interval must elapse from the resume point
        assert!(!autoplay.poll(t0 + Duration::from_secs(15)));
        assert!(autoplay.poll(t0 + Duration::from_secs(19)));
    }

    #[test]
    fn test_hidden_window_suspends() {
        let t0 = Instant::now();
        let mut autoplay = AutoPlay::new(INTERVAL);
        autoplay.start(t0);
        autoplay.set_window_visible(false);
        assert!(!autoplay.poll(t0 + Duration::from_secs(10)));
        autoplay.set_window_visible(true);
        assert!(!autoplay.poll(t0 + Duration::from_secs(11)));
        assert!(autoplay.poll(t0 + Duration::from_secs(15)));
    }

    #[test]
    fn test_next_deadline_counts_down() {
        let t0 = Instant::now();
        let mut autoplay = AutoPlay::new(INTERVAL);
        assert_eq!(autoplay.next_deadline(t0), None);
        autoplay.start(t0);
        assert_eq!(
            autoplay.next_deadline(t0 + Duration::from_secs(2)),
            Some(Duration::from_secs(3))
        );
        autoplay.set_hovered(true);
        assert_eq!(autoplay.next_deadline(t0 + Duration::from_secs(2)), None);
    }
}
