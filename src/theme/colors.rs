//! Color constants for the light and dark themes.

pub const WHITE: &str = "white";
pub const BLACK: &str = "black";

// === SEARCH RESULTS AREA ===
pub const SEARCH_BG_LIGHT: &str = "#f9f9f9";
pub const SEARCH_BG_DARK: &str = "#231f20";
