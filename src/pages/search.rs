//! Search page - the app's home route.

use dioxus::prelude::*;

use crate::components::SearchVideos;

#[component]
pub fn Search() -> Element {
    rsx! {
        section { class: "search-page",
            SearchVideos {}
        }
    }
}
