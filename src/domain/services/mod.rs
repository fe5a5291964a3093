// Business logic services
// Framework-agnostic, 100% testable

pub mod tutorial_filter;
pub use tutorial_filter::{filter_topics, playlist_count};
