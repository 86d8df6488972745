//! Carousel controller
//!
//! A circular index over the fixed-size project list. Every input channel
//! (buttons, dots, arrow keys, swipe, auto-play) funnels into `next`,
//! `previous` or `go_to`; rendering is a pure function of the resulting
//! state, so redundant repaints have no cumulative effect.

use tracing::debug;

/// Presentation role of a card relative to the current index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRole {
    Active,
    Neighbor,
    Inactive,
}

#[derive(Debug, Clone, Copy)]
pub struct CarouselState {
    current: usize,
    total: usize,
}

impl CarouselState {
    /// A carousel over `total` cards, starting at index 0.
    /// `total == 0` yields an inert carousel: every command is a no-op.
    pub fn new(total: usize) -> Self {
        if total == 0 {
            debug!("carousel initialized with no cards, navigation disabled");
        }
        Self { current: 0, total }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_inert(&self) -> bool {
        self.total == 0
    }

    pub fn next(&mut self) {
        if self.total == 0 {
            debug!("next ignored, carousel is inert");
            return;
        }
        self.current = (self.current + 1) % self.total;
    }

    pub fn previous(&mut self) {
        if self.total == 0 {
            debug!("previous ignored, carousel is inert");
            return;
        }
        self.current = (self.current + self.total - 1) % self.total;
    }

    /// Jump to `index`. Out-of-range is a rejected command, not an error.
    pub fn go_to(&mut self, index: usize) {
        if index >= self.total {
            debug!(index, total = self.total, "go_to out of range, ignored");
            return;
        }
        self.current = index;
    }

    /// Horizontal translation input for the track, in [0, 1)
    pub fn offset_fraction(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.current as f32 / self.total as f32
    }

    /// Exactly one card is Active; its circular neighbors are Neighbor,
    /// the rest Inactive.
    pub fn card_role(&self, index: usize) -> CardRole {
        if self.total == 0 || index >= self.total {
            return CardRole::Inactive;
        }
        if index == self.current {
            return CardRole::Active;
        }
        let succ = (self.current + 1) % self.total;
        let pred = (self.current + self.total - 1) % self.total;
        if index == succ || index == pred {
            CardRole::Neighbor
        } else {
            CardRole::Inactive
        }
    }
}
