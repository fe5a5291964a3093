use serde::{Deserialize, Serialize};

/// Skill level a playlist targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    /// BEM modifier for the difficulty badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "c-playlist-card__badge--beginner",
            Difficulty::Intermediate => "c-playlist-card__badge--intermediate",
            Difficulty::Advanced => "c-playlist-card__badge--advanced",
        }
    }
}

/// A curated reference to an externally hosted series of tutorial videos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub title: String,
    pub creator: String,
    pub url: String,
    pub language: String,
    pub difficulty: Difficulty,
    pub video_count: u32,
    pub description: String,
    pub year: i32,
}

impl Playlist {
    /// Display label for the language badge.
    /// Only Hindi gets its own label, everything else is shown as English.
    pub fn language_label(&self) -> &'static str {
        if self.language == "Hindi" {
            "🇮🇳 Hindi"
        } else {
            "🇬🇧 English"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist(language: &str) -> Playlist {
        Playlist {
            title: "Rust in Hindi".to_string(),
            creator: "CodeWithHarry".to_string(),
            url: "https://www.youtube.com/playlist?list=PL1".to_string(),
            language: language.to_string(),
            difficulty: Difficulty::Beginner,
            video_count: 42,
            description: "Rust from scratch".to_string(),
            year: 2023,
        }
    }

    #[test]
    fn test_language_label() {
        assert_eq!(playlist("Hindi").language_label(), "🇮🇳 Hindi");
        assert_eq!(playlist("English").language_label(), "🇬🇧 English");
        // Unknown languages fall back to English
        assert_eq!(playlist("Spanish").language_label(), "🇬🇧 English");
        assert_eq!(playlist("hindi").language_label(), "🇬🇧 English");
    }

    #[test]
    fn test_difficulty_serde_is_lowercase() {
        let json = serde_json::to_string(&Difficulty::Intermediate).unwrap();
        assert_eq!(json, "\"intermediate\"");

        let parsed: Difficulty = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(parsed, Difficulty::Advanced);
        assert_eq!(parsed.as_str(), "advanced");
    }

    #[test]
    fn test_playlist_uses_camel_case_fields() {
        let json = r#"{
            "title": "Rust in Hindi",
            "creator": "CodeWithHarry",
            "url": "https://www.youtube.com/playlist?list=PL1",
            "language": "Hindi",
            "difficulty": "beginner",
            "videoCount": 42,
            "description": "Rust from scratch",
            "year": 2023
        }"#;

        let parsed: Playlist = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, playlist("Hindi"));

        let value = serde_json::to_value(&parsed).unwrap();
        assert_eq!(value["videoCount"], 42);
        assert!(value.get("video_count").is_none());
    }
}
