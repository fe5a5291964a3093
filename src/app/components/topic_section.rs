use dioxus::prelude::*;
use crate::app::components::PlaylistCard;
use crate::domain::models::{Playlist, Topic};

/// One topic heading followed by its grid of playlist cards.
/// The section id is the topic slug so sidebar anchors can jump to it.
#[component]
pub fn TopicSection(topic: Topic) -> Element {
    let cards: Vec<(String, Playlist)> = topic
        .playlists
        .iter()
        .enumerate()
        .map(|(index, playlist)| (topic.playlist_key(index), playlist.clone()))
        .collect();

    rsx! {
        section {
            class: "c-topic-section",
            id: "{topic.slug}",

            div { class: "c-topic-section__header",
                span { class: "c-topic-section__icon", "{topic.icon}" }
                h2 { class: "c-topic-section__title", "{topic.name}" }
                p { class: "c-topic-section__description", "{topic.description}" }
            }

            div { class: "c-topic-section__grid",
                for (card_key, playlist) in cards {
                    PlaylistCard { key: "{card_key}", playlist: playlist }
                }
            }
        }
    }
}
