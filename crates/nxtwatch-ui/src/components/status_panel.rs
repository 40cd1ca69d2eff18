//! Full-page status message: illustration, heading, description and an
//! optional retry action. Backs the failure, empty-result and 404 views.

use dioxus::prelude::*;

use super::button::{join_classes, RetryButton};

#[derive(Clone, PartialEq, Props)]
pub struct StatusPanelProps {
    pub image_url: String,
    pub image_alt: String,
    pub heading: String,
    pub description: String,
    /// Renders a Retry button when set
    #[props(default)]
    pub on_retry: Option<EventHandler<()>>,
    #[props(default = false)]
    pub dark: bool,
    #[props(default)]
    pub class: Option<String>,
}

/// Centered status message
///
/// # Design Notes
///
/// - `dark` selects the `.theme-dark` palette, otherwise `.theme-light`
/// - The Retry button only renders when `on_retry` is set
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StatusPanel {
///         image_url: FAILURE_IMG.to_string(),
///         image_alt: "failure view".to_string(),
///         heading: "Oops! Something Went Wrong".to_string(),
///         description: "Please try again.".to_string(),
///         on_retry: move |_| retry(),
///         dark: theme().is_dark(),
///     }
/// }
/// ```
#[component]
pub fn StatusPanel(props: StatusPanelProps) -> Element {
    let theme_class = if props.dark { "theme-dark" } else { "theme-light" };
    let base = format!("status-panel {}", theme_class);
    let full_class = join_classes(&base, props.class.as_deref());

    rsx! {
        div { class: "{full_class}",
            img {
                class: "status-image",
                src: "{props.image_url}",
                alt: "{props.image_alt}",
            }
            h1 { class: "status-heading", "{props.heading}" }
            p { class: "status-description", "{props.description}" }
            if let Some(on_retry) = props.on_retry {
                RetryButton { onclick: move |_| on_retry.call(()) }
            }
        }
    }
}
