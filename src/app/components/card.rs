use dioxus::prelude::*;
use crate::domain::models::Playlist;

/// Card linking out to one playlist. Opens in a new tab.
#[component]
pub fn PlaylistCard(playlist: Playlist) -> Element {
    let badge_class = playlist.difficulty.badge_class();
    let difficulty = playlist.difficulty.as_str();
    let language = playlist.language_label();

    rsx! {
        a {
            class: "c-playlist-card",
            href: "{playlist.url}",
            target: "_blank",
            rel: "noopener noreferrer",

            div { class: "c-playlist-card__header",
                span { class: "c-playlist-card__badge {badge_class}", "{difficulty}" }
                span { class: "c-playlist-card__language", "{language}" }
            }

            h3 { class: "c-playlist-card__title", "{playlist.title}" }
            div { class: "c-playlist-card__creator",
                span { "By {playlist.creator}" }
                span { "•" }
                span { "{playlist.year}" }
            }

            p { class: "c-playlist-card__description", "{playlist.description}" }

            div { class: "c-playlist-card__footer",
                div { class: "c-playlist-card__stats",
                    span { class: "c-playlist-card__stat", "📺 {playlist.video_count} videos" }
                }
                span { class: "c-playlist-card__watch", "Watch Now" }
            }
        }
    }
}
