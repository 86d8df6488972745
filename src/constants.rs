//! Application-wide constants
//!
//! Single source of truth for the magic numbers and string literals used
//! throughout the showcase: navigation thresholds, animation pacing and
//! config file locations.

/// Carousel navigation constants
pub mod carousel {
    /// Minimum horizontal drag distance (logical points) for a swipe to count
    pub const SWIPE_THRESHOLD: f32 = 50.0;

    /// Maximum number of tech tags shown on a carousel card
    /// (the detail overlay always shows the full list)
    pub const CARD_TAG_LIMIT: usize = 10;

    /// Card-level description clamp (characters)
    pub const CARD_DESCRIPTION_LIMIT: usize = 140;
}

/// Timer pacing for the cosmetic animations
pub mod timing {
    use std::time::Duration;

    /// Delay between typed characters
    pub const TYPE_DELAY: Duration = Duration::from_millis(90);

    /// Delay between deleted characters
    pub const DELETE_DELAY: Duration = Duration::from_millis(45);

    /// Hold time once a phrase is fully typed
    pub const HOLD_FULL: Duration = Duration::from_millis(1800);

    /// Hold time once a phrase is fully deleted
    pub const HOLD_EMPTY: Duration = Duration::from_millis(400);

    /// Default auto-play advance interval in milliseconds
    pub const AUTOPLAY_DEFAULT_MS: u64 = 5000;
}

/// Navbar and section-reveal thresholds
pub mod scroll {
    /// Scroll offset past which the navbar switches to its condensed style
    pub const NAVBAR_THRESHOLD: f32 = 100.0;

    /// Fraction of the viewport a section must enter before it reveals
    pub const REVEAL_FRACTION: f32 = 0.85;

    /// Reference line (fraction of viewport height from the top) used to
    /// decide which section is current for navbar highlighting
    pub const CURRENT_LINE_FRACTION: f32 = 0.4;
}

/// Config file location
pub mod config {
    /// Directory under the platform config dir
    pub const APP_DIR: &str = "folio-deck";

    /// Settings filename
    pub const FILENAME: &str = "settings.json";
}

/// Catalog fallback record text
pub mod fallback {
    /// Title of the synthetic record substituted on a failed catalog load
    pub const TITLE: &str = "Projects failed to load";

    /// Description of the synthetic record
    pub const DESCRIPTION: &str =
        "The project catalog could not be read. Check the data file path and reload.";
}

/// Validation bounds for user-editable settings
pub mod validation {
    /// Minimum auto-play interval (ms)
    pub const MIN_AUTOPLAY_MS: u64 = 1000;

    /// Maximum auto-play interval (ms)
    pub const MAX_AUTOPLAY_MS: u64 = 60_000;
}
