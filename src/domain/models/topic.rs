use serde::{Deserialize, Serialize};
use super::playlist::Playlist;

/// A named category grouping related tutorial playlists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    /// Unique identifier, used as the section anchor and list key
    pub slug: String,
    pub description: String,
    pub icon: String,
    pub playlists: Vec<Playlist>,
}

impl Topic {
    /// Anchor href pointing at this topic's section on the page
    pub fn anchor_href(&self) -> String {
        format!("#{}", self.slug)
    }

    /// Render key for the playlist at `index`
    pub fn playlist_key(&self, index: usize) -> String {
        format!("{}-{}", self.slug, index)
    }
}
