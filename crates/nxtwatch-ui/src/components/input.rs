//! Search Bar
//!
//! Search field plus search button. Typing reports the draft through
//! `oninput`; the button or the Enter key reports a submit.

use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};

/// Properties for the SearchBar component
#[derive(Clone, PartialEq, Props)]
pub struct SearchBarProps {
    /// Current draft text
    pub value: String,
    /// Called with the new text on every keystroke
    pub oninput: EventHandler<String>,
    /// Called on button click or Enter
    pub onsubmit: EventHandler<()>,
    #[props(default = "Search".to_string())]
    pub placeholder: String,
}

/// Search field with a submit button
///
/// # Design Notes
///
/// - Controlled input: the parent owns the draft and passes it back as `value`
/// - Typing never submits; only Enter or the button does
/// - The button carries `data-testid="searchButton"`
///
/// # Example
///
/// ```rust,ignore
/// let mut draft = use_signal(String::new);
///
/// rsx! {
///     SearchBar {
///         value: draft(),
///         oninput: move |text| draft.set(text),
///         onsubmit: move |_| run_search(draft()),
///     }
/// }
/// ```
#[component]
pub fn SearchBar(props: SearchBarProps) -> Element {
    let onsubmit = props.onsubmit;

    rsx! {
        div { class: "search-bar",
            input {
                class: "search-input",
                r#type: "search",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if is_submit_key(&evt.key()) {
                        onsubmit.call(());
                    }
                },
            }
            Button {
                variant: ButtonVariant::Ghost,
                class: "search-btn".to_string(),
                test_id: "searchButton".to_string(),
                onclick: move |_| onsubmit.call(()),
                // magnifying glass
                "\u{1F50D}"
            }
        }
    }
}

fn is_submit_key(key: &Key) -> bool {
    *key == Key::Enter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_enter_submits() {
        assert!(is_submit_key(&Key::Enter));
        assert!(!is_submit_key(&Key::Tab));
        assert!(!is_submit_key(&Key::Character("c".to_string())));
    }
}
