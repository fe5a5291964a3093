/// JSON API over the tutorial catalog
pub mod topics;

pub use topics::{get_topic_handler, list_topics_handler, search_topics_handler, SearchParams};
