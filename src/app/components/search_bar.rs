//! Search bar component
//!
//! Controlled input: the owner keeps the value and gets every keystroke back.

use dioxus::prelude::*;

pub const SEARCH_PLACEHOLDER: &str = "Search tutorials, creators, or topics...";

/// Search input for filtering tutorials
#[component]
pub fn SearchBar(value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        div { class: "c-search-bar",
            input {
                r#type: "text",
                class: "c-search-bar__input",
                placeholder: SEARCH_PLACEHOLDER,
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
            span { class: "c-search-bar__icon", "🔍" }
        }
    }
}
