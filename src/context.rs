//! Shared context for NxtWatch views.
//!
//! The root component provides the theme and the search client; any
//! descendant reads them through the hooks below.

use dioxus::prelude::*;
use nxtwatch_core::VideoApi;

use crate::theme::colors;

/// Light or dark presentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Root CSS class selecting the palette.
    pub fn class(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
        }
    }

    /// Background of the search results area.
    pub fn search_background(self) -> &'static str {
        match self {
            ThemeMode::Light => colors::SEARCH_BG_LIGHT,
            ThemeMode::Dark => colors::SEARCH_BG_DARK,
        }
    }

    pub fn page_background(self) -> &'static str {
        match self {
            ThemeMode::Light => colors::WHITE,
            ThemeMode::Dark => colors::BLACK,
        }
    }

    pub fn text_color(self) -> &'static str {
        match self {
            ThemeMode::Light => colors::BLACK,
            ThemeMode::Dark => colors::WHITE,
        }
    }
}

/// Hook to read the current theme.
///
/// Returns the provided signal; writing to it re-themes every consumer.
pub fn use_theme() -> Signal<ThemeMode> {
    use_context::<Signal<ThemeMode>>()
}

/// Hook to access the shared search client.
pub fn use_video_api() -> Signal<VideoApi> {
    use_context::<Signal<VideoApi>>()
}
