//! Detail overlay state
//!
//! A single global panel bound to at most one project at a time. Opening an
//! invalid index is rejected with a log; closing is idempotent. While open,
//! the main scroll area is locked (restored on close).

use tracing::warn;

#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayState {
    open: Option<usize>,
}

impl OverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the overlay on `index`. Rejected when the index is out of range
    /// or the record list is empty; the previous state is left untouched.
    pub fn open(&mut self, index: usize, total: usize) {
        if index >= total {
            warn!(index, total, "overlay open rejected, index out of range");
            return;
        }
        self.open = Some(index);
    }

    /// Close the overlay. A no-op when already closed.
    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Background scrolling is suppressed exactly while the overlay is open
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_close_round_trip() {
        for index in 0..4 {
            let mut overlay = OverlayState::new();
            overlay.open(index, 4);
            assert_eq!(overlay.open_index(), Some(index));
            assert!(overlay.scroll_locked());
            overlay.close();
            assert_eq!(overlay.open_index(), None);
            assert!(!overlay.scroll_locked());
        }
    }

    #[test]
    fn test_open_out_of_range_leaves_state_unchanged() {
        let mut overlay = OverlayState::new();
        overlay.open(5, 3);
        assert_eq!(overlay.open_index(), None);

        overlay.open(1, 3);
        overlay.open(7, 3);
        assert_eq!(overlay.open_index(), Some(1));
    }

    #[test]
    fn test_open_on_empty_list_rejected() {
        let mut overlay = OverlayState::new();
        overlay.open(0, 0);
        assert_eq!(overlay.open_index(), None);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut overlay = OverlayState::new();
        overlay.close();
        overlay.close();
        assert_eq!(overlay.open_index(), None);
    }

    #[test]
    fn test_reopen_replaces_index() {
        let mut overlay = OverlayState::new();
        overlay.open(0, 3);
        overlay.open(2, 3);
        assert_eq!(overlay.open_index(), Some(2));
    }
}
