//! Video cards shown in search results. Both variants link to the video's
//! detail page.
//!
//! - [`VideoCard`] - thumbnail, channel avatar, title, channel, views and age
//! - [`CompactVideoCard`] - thumbnail, title and views only

use chrono::NaiveDate;
use dioxus::prelude::*;
use nxtwatch_core::{VideoSummary, ViewCount};

use crate::app::Route;

/// How the result grid renders each video.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardLayout {
    #[default]
    Full,
    Compact,
}

impl CardLayout {
    pub fn toggled(self) -> Self {
        match self {
            CardLayout::Full => CardLayout::Compact,
            CardLayout::Compact => CardLayout::Full,
        }
    }

    /// CSS class of the result list for this layout.
    pub fn grid_class(self) -> &'static str {
        match self {
            CardLayout::Full => "video-grid",
            CardLayout::Compact => "video-grid compact",
        }
    }

    /// Caption of the button that switches to the other layout.
    pub fn toggle_label(self) -> &'static str {
        match self {
            CardLayout::Full => "compact view",
            CardLayout::Compact => "full view",
        }
    }
}

/// "1.4K views", "5 views"
pub fn views_label(count: &ViewCount) -> String {
    format!("{} views", count)
}

#[component]
pub fn VideoCard(details: VideoSummary, today: NaiveDate) -> Element {
    let published = details.published_label(today);
    let views = views_label(&details.view_count);

    rsx! {
        Link {
            to: Route::VideoDetail { id: details.id.clone() },
            class: "video-card-link",
            li { class: "video-card",
                img {
                    class: "video-thumbnail",
                    src: "{details.thumbnail_url}",
                    alt: "video thumbnail",
                }
                div { class: "video-card-bottom",
                    img {
                        class: "channel-avatar",
                        src: "{details.channel.profile_image_url}",
                        alt: "channel logo",
                    }
                    div { class: "video-details",
                        p { class: "video-title", "{details.title}" }
                        p { class: "video-channel", "{details.channel.name}" }
                        p { class: "video-meta", "{views} \u{2022} {published}" }
                    }
                }
            }
        }
    }
}

/// Thumbnail-first card without channel details.
#[component]
pub fn CompactVideoCard(details: VideoSummary) -> Element {
    let views = views_label(&details.view_count);

    rsx! {
        Link {
            to: Route::VideoDetail { id: details.id.clone() },
            class: "video-card-link",
            li { class: "video-card compact",
                img {
                    class: "video-thumbnail",
                    src: "{details.thumbnail_url}",
                    alt: "video thumbnail",
                }
                div { class: "video-details",
                    p { class: "video-title", "{details.title}" }
                    p { class: "video-meta", "{views}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_label() {
        assert_eq!(views_label(&ViewCount::Label("1.4K".into())), "1.4K views");
        assert_eq!(views_label(&ViewCount::Count(5)), "5 views");
    }

    #[test]
    fn test_card_layout_toggle() {
        assert_eq!(CardLayout::default(), CardLayout::Full);
        assert_eq!(CardLayout::Full.toggled(), CardLayout::Compact);
        assert_eq!(CardLayout::Compact.toggled(), CardLayout::Full);
        assert_eq!(CardLayout::Compact.grid_class(), "video-grid compact");
        assert_eq!(CardLayout::Full.toggle_label(), "compact view");
    }

    #[test]
    fn test_detail_route_matches_summary_route() {
        let route = Route::VideoDetail { id: "ad9822d2".into() };
        assert_eq!(route.to_string(), "/video/ad9822d2");
    }
}
