//! Search Videos - search input, result grid and fetch status views.
//!
//! All state lives in a [`SearchSession`]; this component only forwards
//! user events to it, executes the requests it hands back, and renders
//! whichever branch the session selects.

use dioxus::prelude::*;
use nxtwatch_core::{SearchBranch, SearchRequest, SearchSession, VideoApi};
use nxtwatch_ui::{Button, ButtonVariant, Loader, SearchBar, StatusPanel};

use crate::components::{CardLayout, CompactVideoCard, VideoCard};
use crate::context::{use_theme, use_video_api};

const NO_RESULTS_IMG: &str =
    "https://assets.ccbp.in/frontend/react-js/nxt-watch-no-search-results-img.png";
const FAILURE_IMG_LIGHT: &str =
    "https://assets.ccbp.in/frontend/react-js/nxt-watch-failure-view-light-theme-img.png";
const FAILURE_IMG_DARK: &str =
    "https://assets.ccbp.in/frontend/react-js/nxt-watch-failure-view-dark-theme-img.png";

/// Content of a full-page status branch.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StatusCopy {
    image_url: &'static str,
    image_alt: &'static str,
    heading: &'static str,
    description: &'static str,
    retry: bool,
}

/// Status panel content for `branch`, `None` for branches that are not a
/// status page.
fn status_copy(branch: SearchBranch, dark: bool) -> Option<StatusCopy> {
    let (image_url, image_alt, heading, description) = match branch {
        SearchBranch::NoResults => (
            NO_RESULTS_IMG,
            "no videos",
            "No Search result found",
            "Try different key words or remove search filter",
        ),
        SearchBranch::Failure => (
            if dark { FAILURE_IMG_DARK } else { FAILURE_IMG_LIGHT },
            "failure view",
            "Oops! Something Went Wrong",
            "We are having some trouble completing your request. Please try again.",
        ),
        _ => return None,
    };

    Some(StatusCopy {
        image_url,
        image_alt,
        heading,
        description,
        retry: branch.offers_retry(),
    })
}

/// Execute `request` and feed the outcome back into the session.
fn dispatch(api: VideoApi, mut session: Signal<SearchSession>, request: SearchRequest) {
    spawn(async move {
        let outcome = api.search(&request.query).await;
        if !session.write().complete(request.ticket, outcome) {
            tracing::debug!(query = %request.query, "Ignored superseded search result");
        }
    });
}

#[component]
pub fn SearchVideos() -> Element {
    let api = use_video_api();
    let theme = use_theme();
    let mut session = use_signal(SearchSession::new);
    let mut layout = use_signal(CardLayout::default);

    // Initial fetch with an empty query
    use_effect(move || {
        let request = session.write().mount();
        dispatch(api.peek().clone(), session, request);
    });

    let mut submit = move || {
        let request = session.write().submit();
        dispatch(api(), session, request);
    };

    let mut retry = move || {
        let request = session.write().retry();
        match request {
            Some(request) => dispatch(api(), session, request),
            None => tracing::debug!("Retry requested with nothing to retry"),
        }
    };

    let branch = session.read().branch();
    let dark = theme().is_dark();

    if let Some(copy) = status_copy(branch, dark) {
        return rsx! {
            if copy.retry {
                StatusPanel {
                    image_url: copy.image_url.to_string(),
                    image_alt: copy.image_alt.to_string(),
                    heading: copy.heading.to_string(),
                    description: copy.description.to_string(),
                    on_retry: move |_| retry(),
                    dark,
                }
            } else {
                StatusPanel {
                    image_url: copy.image_url.to_string(),
                    image_alt: copy.image_alt.to_string(),
                    heading: copy.heading.to_string(),
                    description: copy.description.to_string(),
                    dark,
                }
            }
        };
    }

    match branch {
        SearchBranch::Loading => rsx! {
            Loader {}
        },
        SearchBranch::Results => {
            let draft = session.read().input_draft().to_string();
            let videos = session.read().results().to_vec();
            let background = theme().search_background();
            let today = chrono::Local::now().date_naive();
            let current = layout();
            let grid_class = current.grid_class();
            let toggle_label = current.toggle_label();

            rsx! {
                div { class: "search-videos", style: "background: {background};",
                    div { class: "search-toolbar",
                        if branch.shows_search_bar() {
                            SearchBar {
                                value: draft,
                                oninput: move |text: String| session.write().set_draft(text),
                                onsubmit: move |_| submit(),
                            }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            class: "layout-toggle".to_string(),
                            onclick: move |_| layout.set(current.toggled()),
                            "{toggle_label}"
                        }
                    }
                    ul { class: "{grid_class}",
                        for video in videos {
                            if current == CardLayout::Compact {
                                CompactVideoCard {
                                    key: "{video.id}",
                                    details: video.clone(),
                                }
                            } else {
                                VideoCard {
                                    key: "{video.id}",
                                    details: video.clone(),
                                    today,
                                }
                            }
                        }
                    }
                }
            }
        }
        _ => rsx! {},
    }
}
