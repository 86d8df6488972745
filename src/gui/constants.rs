//! Layout, palette and copy for the showcase window

use egui::Color32;

/// Window chrome
pub const APP_ID: &str = "folio-deck";
pub const WINDOW_TITLE: &str = "Folio Deck";
pub const WINDOW_WIDTH: f32 = 1100.0;
pub const WINDOW_HEIGHT: f32 = 780.0;
pub const WINDOW_MIN_WIDTH: f32 = 820.0;
pub const WINDOW_MIN_HEIGHT: f32 = 620.0;

/// Layout spacing
pub const SECTION_SPACING: f32 = 18.0;
pub const ITEM_SPACING: f32 = 8.0;
pub const HERO_TOP_PADDING: f32 = 90.0;
pub const HERO_BOTTOM_PADDING: f32 = 120.0;
pub const SECTION_BOTTOM_PADDING: f32 = 80.0;

/// Carousel card layout
pub const CARD_WIDTH: f32 = 340.0;
pub const CARD_MIN_HEIGHT: f32 = 220.0;
pub const CARD_SPACING: f32 = 16.0;
pub const NAV_BUTTON_GUTTER: f32 = 90.0;

/// Detail overlay layout
pub const DETAIL_WIDTH: f32 = 560.0;
pub const DETAIL_HEIGHT: f32 = 520.0;

/// Section reveal fade duration (seconds)
pub const REVEAL_SECONDS: f32 = 0.45;

/// Palette
pub const ACCENT: Color32 = Color32::from_rgb(100, 181, 246);
pub const CARD_FILL: Color32 = Color32::from_rgb(30, 33, 40);
pub const CARD_ACTIVE_FILL: Color32 = Color32::from_rgb(38, 42, 52);
pub const CARD_STROKE: Color32 = Color32::from_rgb(55, 60, 70);
pub const TAG_FILL: Color32 = Color32::from_rgb(45, 52, 65);
pub const DOT_INACTIVE: Color32 = Color32::from_gray(110);
pub const SCRIM: Color32 = Color32::from_black_alpha(160);
pub const BANNER_FILL: Color32 = Color32::from_rgb(90, 28, 28);
pub const BANNER_TEXT: Color32 = Color32::from_rgb(255, 205, 205);

/// Page copy
pub const HERO_NAME: &str = "Hey, I'm Alex";
pub const HERO_TAGLINE: &str = "I build fast, friendly tools for the terminal and the web.";
pub const HERO_PHRASES: &[&str] = &[
    "Software Engineer",
    "Systems Programmer",
    "Open Source Contributor",
];
pub const ABOUT_BODY: &str = "I spend most of my time in Rust and the occasional \
weekend in a text editor I swore I'd stop customizing. The projects above are \
the ones I keep coming back to: small tools with sharp edges filed down.";
pub const CONTACT_EMAIL: &str = "hello@example.dev";
pub const CONTACT_GITHUB: &str = "https://github.com/example";
pub const BANNER_LOAD_FAILURE: &str = "Something went wrong while loading the \
project catalog, so the showcase is running with placeholder content. Try reloading.";
