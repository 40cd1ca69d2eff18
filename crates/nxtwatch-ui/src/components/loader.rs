//! Three-dots loading indicator.

use dioxus::prelude::*;

/// Accent color of the loader dots.
pub const LOADER_COLOR: &str = "#0b69ff";

#[derive(Clone, PartialEq, Props)]
pub struct LoaderProps {
    /// Overall size in pixels
    #[props(default = 50)]
    pub size: u32,
    #[props(default = LOADER_COLOR.to_string())]
    pub color: String,
}

/// Animated three-dots spinner, centered in its container.
#[component]
pub fn Loader(props: LoaderProps) -> Element {
    let dot = props.size / 5;
    let delays = [0u32, 160, 320];

    rsx! {
        div { class: "loader-container", "data-testid": "loader",
            div {
                class: "three-dots",
                style: "width: {props.size}px; height: {props.size}px;",
                for delay in delays {
                    span {
                        key: "{delay}",
                        class: "dot",
                        style: "width: {dot}px; height: {dot}px; background: {props.color}; animation-delay: {delay}ms;",
                    }
                }
            }
        }
    }
}
