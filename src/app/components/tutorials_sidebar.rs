use dioxus::prelude::*;
use crate::domain::models::Topic;

/// Topic navigation. Always lists every topic, whatever the current search.
#[component]
pub fn TutorialsSidebar(topics: Vec<Topic>, is_open: bool) -> Element {
    let sidebar_class = if is_open {
        "c-tutorials-sidebar c-tutorials-sidebar--open"
    } else {
        "c-tutorials-sidebar"
    };
    let category_count = topics.len();

    rsx! {
        aside { class: "{sidebar_class}",
            div { class: "c-tutorials-sidebar__header",
                a { href: "/", class: "c-tutorials-sidebar__title-link",
                    div { class: "c-tutorials-sidebar__logo",
                        img {
                            src: "/logo.svg",
                            alt: "Learning Hub Logo",
                            class: "c-tutorials-sidebar__logo-image",
                        }
                        h1 { "Learning Hub" }
                    }
                }
                p { "YouTube Tutorials" }
            }

            nav { class: "c-tutorials-sidebar__content",
                for topic in topics.iter() {
                    a {
                        key: "{topic.slug}",
                        href: topic.anchor_href(),
                        class: "c-tutorials-sidebar__category",
                        span { "{topic.icon}" }
                        span { "{topic.name}" }
                    }
                }
            }

            div { class: "c-tutorials-sidebar__footer",
                p { "✨ Curated Content" }
                p { "{category_count} Categories" }
            }
        }
    }
}
