//! Reusable pieces of the showcase window

pub mod card;
pub mod detail_view;
pub mod navbar;
