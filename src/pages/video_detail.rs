//! Video detail - target of `/video/:id` links from the result cards.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn VideoDetail(id: String) -> Element {
    rsx! {
        section { class: "video-detail",
            h1 { class: "video-detail-title", "Video {id}" }
            Link { to: Route::Search {}, class: "back-link", "\u{2190} Back to search" }
        }
    }
}
