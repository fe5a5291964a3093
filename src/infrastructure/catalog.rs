//! Tutorial catalog loading
//!
//! The catalog is a JSON array of topics. It comes either from a file
//! (`TUTORIALS_CATALOG`) or from the copy embedded at build time, and is
//! loaded once per process.

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::OnceCell;

use crate::config::{catalog_path_from_env, AppConfig};
use crate::domain::models::Topic;
use crate::domain::services::playlist_count;
use crate::shared::errors::{AppError, Result};
use crate::shared::logging;

/// Catalog shipped with the binary
pub const EMBEDDED_CATALOG: &str = include_str!("../../assets/data/tutorials.json");

/// Global catalog instance (loaded on first access)
static CATALOG: OnceCell<Vec<Topic>> = OnceCell::new();

/// Parse a catalog from its JSON text
pub fn parse_catalog(json: &str) -> Result<Vec<Topic>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a catalog file
pub fn load_catalog_from_path(path: &Path) -> Result<Vec<Topic>> {
    logging::log_catalog_load_start(path);

    if !path.exists() {
        return Err(AppError::CatalogNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    parse_catalog(&content)
}

/// Parse the embedded catalog
pub fn load_embedded_catalog() -> Result<Vec<Topic>> {
    logging::log_catalog_load_embedded();
    parse_catalog(EMBEDDED_CATALOG)
}

/// Load the catalog selected by `config` and log anything suspicious in it.
/// Problems are reported, never rejected: the view renders whatever it gets.
pub fn load_catalog(config: &AppConfig) -> Result<Vec<Topic>> {
    let result = match &config.catalog_path {
        Some(path) => load_catalog_from_path(path),
        None => load_embedded_catalog(),
    };

    match result {
        Ok(topics) => {
            for warning in catalog_warnings(&topics) {
                logging::log_catalog_warning(&warning);
            }
            logging::log_catalog_load_success(topics.len(), playlist_count(&topics));
            Ok(topics)
        }
        Err(e) => {
            logging::log_catalog_load_error(&e.to_string());
            Err(e)
        }
    }
}

/// Load the process-wide catalog with an explicit config.
/// No-op returning the existing catalog if it is already loaded.
pub fn init_catalog(config: &AppConfig) -> Result<&'static [Topic]> {
    CATALOG
        .get_or_try_init(|| load_catalog(config))
        .map(Vec::as_slice)
}

/// Process-wide catalog, loaded on first call from `TUTORIALS_CATALOG` only
pub fn catalog() -> Result<&'static [Topic]> {
    CATALOG
        .get_or_try_init(|| {
            let config = AppConfig {
                catalog_path: catalog_path_from_env(),
                ..AppConfig::default()
            };
            load_catalog(&config)
        })
        .map(Vec::as_slice)
}

/// Find a topic by slug in the process-wide catalog
pub fn find_topic(slug: &str) -> Result<Topic> {
    catalog()?
        .iter()
        .find(|t| t.slug == slug)
        .cloned()
        .ok_or_else(|| {
            logging::log_topic_not_found(slug);
            AppError::TopicNotFound(slug.to_string())
        })
}

/// Describe catalog entries that would render oddly (duplicate slugs, empty topics)
pub fn catalog_warnings(topics: &[Topic]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut warnings = Vec::new();

    for topic in topics {
        if !seen.insert(topic.slug.as_str()) {
            warnings.push(format!("duplicate topic slug '{}'", topic.slug));
        }
        if topic.playlists.is_empty() {
            warnings.push(format!("topic '{}' has no playlists", topic.slug));
        }
    }

    warnings
}
