use dioxus::prelude::*;

use crate::app_config;
use crate::components::NavHeader;
use crate::pages::{NotFound, Search, VideoDetail};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Search page, lists videos on open
/// - `/video/:id` - Detail page for one video
/// - anything else - Not found page
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Search {},
        #[route("/video/:id")]
        VideoDetail { id: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, theme and client context, and routing.
#[component]
pub fn App() -> Element {
    let config = app_config();
    let theme = use_signal(|| config.initial_theme);
    let api = use_signal(|| config.api.clone());

    use_context_provider(|| theme);
    use_context_provider(|| api);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Page chrome shared by every route.
#[component]
fn Shell() -> Element {
    let theme = crate::context::use_theme();
    let mode = theme();
    let class = format!("app-shell {}", mode.class());
    let style = format!(
        "background: {}; color: {};",
        mode.page_background(),
        mode.text_color()
    );

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            NavHeader {}
            main { class: "app-content", Outlet::<Route> {} }
        }
    }
}
