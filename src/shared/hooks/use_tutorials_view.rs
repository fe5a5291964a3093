use crate::shared::state::TutorialsViewState;
use dioxus::prelude::*;

/// Signal-backed handle over the tutorials view state
#[derive(Clone, Copy)]
pub struct UseTutorialsView {
    pub state: Signal<TutorialsViewState>,
}

impl UseTutorialsView {
    pub fn sidebar_open(&self) -> bool {
        self.state.read().sidebar_open
    }

    pub fn search_query(&self) -> String {
        self.state.read().search_query.clone()
    }

    pub fn toggle_sidebar(&mut self) {
        self.state.write().toggle_sidebar();
    }

    pub fn close_sidebar(&mut self) {
        self.state.write().close_sidebar();
    }

    pub fn set_search_query(&mut self, query: String) {
        self.state.write().set_search_query(query);
    }
}

/// Hook to manage the tutorials view state.
/// State lives as long as the component that calls it; the sidebar always
/// starts closed and `initial_query` only seeds the first render.
pub fn use_tutorials_view(initial_query: String) -> UseTutorialsView {
    let state = use_signal(move || TutorialsViewState {
        search_query: initial_query,
        ..TutorialsViewState::default()
    });
    UseTutorialsView { state }
}
