//! Configuration constants for the reveal-step engine
//!
//! This module contains the timing, threshold, and presentation constants
//! used throughout the crate. The step timings must match the shipped
//! client bit for bit; changing them changes observable game behavior.

/// Reveal-step timing and disclosure constants
pub mod step {
    /// Delay before the celebratory sprite is picked, in milliseconds
    pub const FIRST_REVEAL_DELAY_MS: u64 = 500;
    /// Delay before other players' submissions are disclosed, in milliseconds
    pub const DISCLOSURE_DELAY_MS: u64 = 2000;
    /// Submissions are disclosed only when strictly more than this many exist
    pub const DISCLOSURE_THRESHOLD: usize = 1;
    /// Minimum configurable step delay in seconds
    pub const MIN_DELAY: u64 = 0;
    /// Maximum configurable step delay in seconds
    pub const MAX_DELAY: u64 = 30;
    /// Maximum number of submissions shown in the panel at once
    pub const SUBMISSIONS_DISPLAY_LIMIT: usize = 50;
    /// Sprite shown next to correct submissions in the panel
    pub const STARS_SPRITE: &str = "blinkingStars2";
}

/// Responsive layout constants
pub mod layout {
    /// Minimum viewport width classified as desktop, in logical pixels
    pub const DESKTOP_MIN_WIDTH: u32 = 900;
    /// Quiet period before a resize reclassification applies, in milliseconds
    pub const RESIZE_DEBOUNCE_MS: u64 = 100;
}

/// Theme scale constants
pub mod theme {
    /// Base unit of the spacing scale, in pixels
    pub const SPACING_UNIT: u32 = 4;
}
