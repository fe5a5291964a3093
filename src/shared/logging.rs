//! Structured logging module for Learning Hub
//!
//! Provides consistent, contextual logging across the server side.
//! Uses tracing spans for operation tracking and structured fields.

use std::path::Path;

/// Log levels for different operations
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    CatalogLoad,
    CatalogValidation,
    TopicSearch,
    TopicLookup,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::CatalogLoad => "catalog_load",
            LogOperation::CatalogValidation => "catalog_validation",
            LogOperation::TopicSearch => "topic_search",
            LogOperation::TopicLookup => "topic_lookup",
        }
    }
}

/// Log catalog load start from a file
pub fn log_catalog_load_start(path: &Path) {
    tracing::info!(
        operation = LogOperation::CatalogLoad.as_str(),
        source = %path.display(),
        "Loading tutorial catalog"
    );
}

/// Log catalog load from the embedded default
pub fn log_catalog_load_embedded() {
    tracing::info!(
        operation = LogOperation::CatalogLoad.as_str(),
        source = "embedded",
        "Loading embedded tutorial catalog"
    );
}

/// Log catalog load success
pub fn log_catalog_load_success(topic_count: usize, playlist_count: usize) {
    tracing::info!(
        operation = LogOperation::CatalogLoad.as_str(),
        topic_count = topic_count,
        playlist_count = playlist_count,
        "Tutorial catalog loaded"
    );
}

/// Log catalog load failure
pub fn log_catalog_load_error(error: &str) {
    tracing::error!(
        operation = LogOperation::CatalogLoad.as_str(),
        error = error,
        "Failed to load tutorial catalog"
    );
}

/// Log a non-fatal catalog problem
pub fn log_catalog_warning(warning: &str) {
    tracing::warn!(
        operation = LogOperation::CatalogValidation.as_str(),
        warning = warning,
        "Suspicious catalog entry"
    );
}

/// Log search result
pub fn log_topic_search(query: &str, topic_count: usize, playlist_count: usize) {
    tracing::debug!(
        operation = LogOperation::TopicSearch.as_str(),
        query = query,
        topic_count = topic_count,
        playlist_count = playlist_count,
        "Filtered tutorial catalog"
    );
}

/// Log topic lookup miss
pub fn log_topic_not_found(slug: &str) {
    tracing::debug!(
        operation = LogOperation::TopicLookup.as_str(),
        slug = slug,
        "Topic not found"
    );
}

/// Macro for creating structured log context
#[macro_export]
macro_rules! log_context {
    ($operation:expr) => {
        tracing::info_span!(
            "learning_hub",
            operation = $operation.as_str()
        )
    };
    ($operation:expr, $slug:expr) => {
        tracing::info_span!(
            "learning_hub",
            operation = $operation.as_str(),
            slug = $slug
        )
    };
}
