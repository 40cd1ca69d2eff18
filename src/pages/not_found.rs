//! Not Found page - any route without a match.

use dioxus::prelude::*;
use nxtwatch_ui::StatusPanel;

use crate::context::{use_theme, ThemeMode};

const NOT_FOUND_IMG_LIGHT: &str =
    "https://assets.ccbp.in/frontend/react-js/nxt-watch-not-found-light-theme-img.png";
const NOT_FOUND_IMG_DARK: &str =
    "https://assets.ccbp.in/frontend/react-js/nxt-watch-not-found-dark-theme-img.png";

fn not_found_image(mode: ThemeMode) -> &'static str {
    if mode.is_dark() {
        NOT_FOUND_IMG_DARK
    } else {
        NOT_FOUND_IMG_LIGHT
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let theme = use_theme();
    let mode = theme();

    tracing::debug!(path = %segments.join("/"), "No route matched");

    rsx! {
        StatusPanel {
            image_url: not_found_image(mode).to_string(),
            image_alt: "not found".to_string(),
            heading: "Page Not Found".to_string(),
            description: "we are sorry, the page you requested could not be found.".to_string(),
            dark: mode.is_dark(),
            class: "not-found".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_follows_theme() {
        assert!(not_found_image(ThemeMode::Dark).ends_with("dark-theme-img.png"));
        assert!(not_found_image(ThemeMode::Light).ends_with("light-theme-img.png"));
    }
}
