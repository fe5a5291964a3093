// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod playlist;
pub mod topic;

pub use playlist::{Difficulty, Playlist};
pub use topic::Topic;
