//! Tutorials view
//!
//! Sidebar navigation, search input and the grid of playlist cards for a
//! caller-supplied catalog. Local state is only sidebar visibility and the
//! search text; the filtered topics are recomputed on every render.

use dioxus::prelude::*;
use crate::app::components::{NoResults, SearchBar, TopicSection, TutorialsSidebar};
use crate::domain::models::Topic;
use crate::shared::hooks::use_tutorials_view;

/// `initial_query` pre-fills the search box (deep links); empty by default
#[component]
pub fn TutorialsView(topics: Vec<Topic>, #[props(default)] initial_query: String) -> Element {
    let mut view = use_tutorials_view(initial_query);

    let sidebar_open = view.sidebar_open();
    let search_query = view.search_query();
    let filtered_topics = view.state.read().derived_view(&topics);

    rsx! {
        div { class: "c-tutorials",
            // Mobile hamburger
            button {
                class: "c-tutorials__hamburger",
                aria_label: "Toggle menu",
                onclick: move |_| view.toggle_sidebar(),
                span {}
                span {}
                span {}
            }

            TutorialsSidebar { topics: topics.clone(), is_open: sidebar_open }

            main { class: "c-tutorials__main",
                div { class: "c-tutorials__header",
                    div { class: "c-tutorials__header-content",
                        h2 { "YouTube Tutorials" }
                        p { "Curated video playlists for every developer skill level" }

                        SearchBar {
                            value: search_query.clone(),
                            on_input: move |query: String| view.set_search_query(query),
                        }
                    }
                }

                div { class: "c-tutorials__cards",
                    if filtered_topics.is_empty() {
                        NoResults { query: search_query.clone() }
                    } else {
                        for topic in filtered_topics.iter() {
                            TopicSection { key: "{topic.slug}", topic: topic.clone() }
                        }
                    }
                }
            }

            // Overlay for mobile, closes the sidebar
            if sidebar_open {
                div {
                    class: "c-tutorials__overlay",
                    onclick: move |_| view.close_sidebar(),
                }
            }
        }
    }
}
