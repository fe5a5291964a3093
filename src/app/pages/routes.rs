use crate::app::components::{ErrorMessage, LoadingText, TutorialsView};
use crate::server_fns::get_topics;

use dioxus::prelude::*;
use dioxus::document;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    // Landing page
    #[route("/")]
    Home {},

    // ?query= pre-fills the search box
    #[route("/youtube-tutorials?:query")]
    Tutorials { query: String },

    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Learning Hub app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    // Produced by build.rs from assets/css/main.css
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Title { "Learning Hub" }
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        div { class: "c-home",
            img { src: "/logo.svg", alt: "Learning Hub Logo", class: "c-home__logo" }
            h1 { class: "c-home__title", "Learning Hub" }
            p { class: "c-home__tagline", "Hand-picked resources for developers at every level" }

            Link {
                to: Route::Tutorials { query: String::new() },
                class: "c-home__card",
                span { class: "c-home__card-icon", "📺" }
                h2 { "YouTube Tutorials" }
                p { "Curated video playlists, grouped by topic" }
            }
        }
    }
}

/// Loads the catalog on the server and hands it to the view
#[component]
fn Tutorials(query: String) -> Element {
    let topics = use_server_future(move || async move { get_topics().await })?;

    match &*topics.read() {
        Some(Ok(topics)) => rsx! {
            TutorialsView { topics: topics.clone(), initial_query: query.clone() }
        },
        Some(Err(e)) => {
            tracing::error!("Failed to load tutorials: {}", e);
            rsx! {
                ErrorMessage { message: "Could not load the tutorial catalog. Please try again later.".to_string() }
            }
        }
        None => rsx! {
            LoadingText { message: "Loading tutorials...".to_string() }
        },
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "error-page",
            h1 { "Page not found" }
            p { "Nothing lives at \"/{path}\"." }
            Link { to: Route::Home {}, class: "breadcrumb-link", "← Back to Home" }
        }
    }
}
