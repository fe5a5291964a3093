//! Local interaction state of the tutorials view

use crate::domain::models::Topic;
use crate::domain::services::filter_topics;

/// Sidebar visibility and search text for one mounted tutorials view.
/// A fresh view always starts closed with an empty query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TutorialsViewState {
    pub sidebar_open: bool,
    pub search_query: String,
}

impl TutorialsViewState {
    /// Menu button: flip the sidebar
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Overlay click: always closes
    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    /// Store the raw input value, untouched
    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
    }

    /// Topics visible for the current query
    pub fn derived_view(&self, topics: &[Topic]) -> Vec<Topic> {
        filter_topics(topics, &self.search_query)
    }
}
