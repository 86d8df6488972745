//! Typewriter headline animation
//!
//! An explicit four-phase machine cycling through a phrase list: type the
//! phrase out, hold, delete it, hold, move to the next phrase. `tick`
//! advances one step and returns the delay until the next tick, so the GUI
//! drives it off wall-clock deadlines and tests drive it directly.

use std::time::Duration;

use crate::constants::timing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    TypingForward,
    PausedAtFull,
    DeletingBackward,
    PausedAtEmpty,
}

#[derive(Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_ix: usize,
    shown_chars: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase_ix: 0,
            shown_chars: 0,
            phase: Phase::TypingForward,
        }
    }

    /// No phrases means nothing to animate
    pub fn is_inert(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Currently visible prefix of the active phrase
    pub fn visible(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.phrase_ix) else {
            return "";
        };
        match phrase.char_indices().nth(self.shown_chars) {
            Some((byte_ix, _)) => &phrase[..byte_ix],
            None => phrase,
        }
    }

    /// Advance one step; returns the delay until the next tick
    pub fn tick(&mut self) -> Duration {
        if self.phrases.is_empty() {
            return timing::HOLD_EMPTY;
        }
        let phrase_len = self.phrases[self.phrase_ix].chars().count();

        match self.phase {
            Phase::TypingForward => {
                if self.shown_chars < phrase_len {
                    self.shown_chars += 1;
                }
                if self.shown_chars == phrase_len {
                    self.phase = Phase::PausedAtFull;
                    timing::HOLD_FULL
                } else {
                    timing::TYPE_DELAY
                }
            }
            Phase::PausedAtFull => {
                self.phase = Phase::DeletingBackward;
                timing::DELETE_DELAY
            }
            Phase::DeletingBackward => {
                self.shown_chars = self.shown_chars.saturating_sub(1);
                if self.shown_chars == 0 {
                    self.phase = Phase::PausedAtEmpty;
                    timing::HOLD_EMPTY
                } else {
                    timing::DELETE_DELAY
                }
            }
            Phase::PausedAtEmpty => {
                self.phrase_ix = (self.phrase_ix + 1) % self.phrases.len();
                self.phase = Phase::TypingForward;
                timing::TYPE_DELAY
            }
        }
    }
}
