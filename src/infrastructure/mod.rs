// Server-side data sources
pub mod catalog;

pub use catalog::{catalog, catalog_warnings, find_topic, init_catalog, load_catalog, load_catalog_from_path, parse_catalog};
