//! Learning Hub - Main Entry Point
//!
//! Serves the Dioxus application together with the JSON topics API.
//! Uses dioxus::serve() pattern for dx serve compatibility.

use learning_hub::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    // IMPORTANT: Use dioxus::server::axum, NOT axum directly
    use dioxus::server::axum::routing::get;

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Learning Hub...");

    use learning_hub::handlers::{get_topic_handler, list_topics_handler, search_topics_handler};

    dioxus::serve(|| {
        async move {
            // Load the catalog up front so a broken catalog shows in the logs at startup
            if let Err(e) = learning_hub::infrastructure::catalog() {
                tracing::warn!("Tutorial catalog unavailable: {}. Tutorials page will show an error.", e);
            }

            // NOTE: Axum 0.8 uses {param} syntax instead of :param
            let router = dioxus::server::router(App)
                .route("/api/topics", get(list_topics_handler))
                .route("/api/topics/search", get(search_topics_handler))
                .route("/api/topics/{slug}", get(get_topic_handler));

            Ok(router)
        }
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] Learning Hub - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
