//! Navigation command dispatch
//!
//! Every input channel resolves to one of these commands and goes through
//! `dispatch`. The egui update pass is single-threaded, so commands apply
//! synchronously and atomically: one discrete input, one state transition.

use crate::carousel::CarouselState;
use crate::overlay::OverlayState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    GoTo(usize),
    Open(usize),
    Close,
}

pub fn dispatch(command: NavCommand, carousel: &mut CarouselState, overlay: &mut OverlayState) {
    match command {
        NavCommand::Next => carousel.next(),
        NavCommand::Previous => carousel.previous(),
        NavCommand::GoTo(index) => carousel.go_to(index),
        NavCommand::Open(index) => overlay.open(index, carousel.total()),
        NavCommand::Close => overlay.close(),
    }
}
