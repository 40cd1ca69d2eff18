//! Navigation Header Component
//!
//! App title linking home, plus the light/dark theme toggle.

use dioxus::prelude::*;
use nxtwatch_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::context::use_theme;

const LOGO_LIGHT: &str = "https://assets.ccbp.in/frontend/react-js/nxt-watch-logo-light-theme-img.png";
const LOGO_DARK: &str = "https://assets.ccbp.in/frontend/react-js/nxt-watch-logo-dark-theme-img.png";

#[component]
pub fn NavHeader() -> Element {
    let mut theme = use_theme();
    let mode = theme();

    let logo = if mode.is_dark() { LOGO_DARK } else { LOGO_LIGHT };
    // Unicode: sun (U+2600) or crescent moon (U+263E)
    let toggle_symbol = if mode.is_dark() { "\u{2600}" } else { "\u{263E}" };

    rsx! {
        header { class: "nav-header",
            Link { to: Route::Search {}, class: "nav-logo",
                img { src: "{logo}", alt: "website logo" }
            }
            Button {
                variant: ButtonVariant::Ghost,
                class: "theme-toggle".to_string(),
                test_id: "theme".to_string(),
                onclick: move |_| {
                    let next = theme().toggled();
                    tracing::debug!(?next, "Switching theme");
                    theme.set(next);
                },
                "{toggle_symbol}"
            }
        }
    }
}
