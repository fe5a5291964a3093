//! Tutorial search filter
//!
//! Derives the visible subset of the catalog for a search query.
//!
//! Matching rules:
//! 1. Query and candidate fields are lower-cased
//! 2. A playlist matches when the query is a substring of its title, creator,
//!    description, or the name of the topic it belongs to
//! 3. Topics left without any matching playlist are dropped
//!
//! The whole query is matched as one substring, words are not split.
//! An empty query matches everything.

use crate::domain::models::{Playlist, Topic};

/// Check whether a playlist matches an already lower-cased query
fn playlist_matches(playlist: &Playlist, topic_name_lower: &str, query_lower: &str) -> bool {
    playlist.title.to_lowercase().contains(query_lower)
        || playlist.creator.to_lowercase().contains(query_lower)
        || playlist.description.to_lowercase().contains(query_lower)
        || topic_name_lower.contains(query_lower)
}

/// Filter topics and their playlists by a search query.
///
/// Returns a new list; the input is never modified. Topic order and playlist
/// order are preserved, and no returned topic has an empty playlist list.
pub fn filter_topics(topics: &[Topic], query: &str) -> Vec<Topic> {
    let query_lower = query.to_lowercase();

    topics
        .iter()
        .filter_map(|topic| {
            let topic_name_lower = topic.name.to_lowercase();
            let playlists: Vec<Playlist> = topic
                .playlists
                .iter()
                .filter(|p| playlist_matches(p, &topic_name_lower, &query_lower))
                .cloned()
                .collect();

            if playlists.is_empty() {
                None
            } else {
                Some(Topic {
                    playlists,
                    ..topic.clone()
                })
            }
        })
        .collect()
}

/// Total number of playlists across a list of topics
pub fn playlist_count(topics: &[Topic]) -> usize {
    topics.iter().map(|t| t.playlists.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Difficulty;

    fn make_playlist(title: &str, creator: &str, description: &str) -> Playlist {
        Playlist {
            title: title.to_string(),
            creator: creator.to_string(),
            url: format!("https://www.youtube.com/playlist?list={}", title.replace(' ', "")),
            language: "English".to_string(),
            difficulty: Difficulty::Beginner,
            video_count: 10,
            description: description.to_string(),
            year: 2024,
        }
    }

    fn make_topic(name: &str, slug: &str, playlists: Vec<Playlist>) -> Topic {
        Topic {
            name: name.to_string(),
            slug: slug.to_string(),
            description: format!("{} tutorials", name),
            icon: "📚".to_string(),
            playlists,
        }
    }

    fn web_dev() -> Topic {
        make_topic(
            "Web Dev",
            "web-dev",
            vec![
                make_playlist("React Crash Course", "Traversy Media", "Learn React basics"),
                make_playlist("Vue Guide", "Net Ninja", "Learn Vue"),
            ],
        )
    }

    fn catalog() -> Vec<Topic> {
        vec![
            web_dev(),
            make_topic(
                "Systems",
                "systems",
                vec![
                    make_playlist("Rust for Beginners", "Let's Get Rusty", "Ownership and borrowing"),
                    make_playlist("Operating Systems", "Neso Academy", "Processes, threads and memory"),
                ],
            ),
            make_topic(
                "Data Science",
                "data-science",
                vec![make_playlist("Pandas Tutorial", "Corey Schafer", "Dataframes in Python")],
            ),
        ]
    }

    #[test]
    fn test_react_query_keeps_only_matching_playlist() {
        let result = filter_topics(&[web_dev()], "react");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Web Dev");
        assert_eq!(result[0].playlists.len(), 1);
        assert_eq!(result[0].playlists[0].title, "React Crash Course");
    }

    #[test]
    fn test_unmatched_query_yields_empty_view() {
        let result = filter_topics(&[web_dev()], "xyz123");
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_query_is_identity() {
        let topics = catalog();
        assert_eq!(filter_topics(&topics, ""), topics);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let topics = catalog();
        for query in ["", "react", "LEARN", "o", "systems", "nothing-here", "rust for"] {
            let once = filter_topics(&topics, query);
            let twice = filter_topics(&once, query);
            assert_eq!(once, twice, "query {:?} is not idempotent", query);
        }
    }

    #[test]
    fn test_case_insensitive() {
        let topics = catalog();
        assert_eq!(filter_topics(&topics, "REACT"), filter_topics(&topics, "react"));
        assert_eq!(filter_topics(&topics, "Net NINJA"), filter_topics(&topics, "net ninja"));
    }

    #[test]
    fn test_matches_creator_and_description() {
        let topics = catalog();

        let by_creator = filter_topics(&topics, "schafer");
        assert_eq!(by_creator.len(), 1);
        assert_eq!(by_creator[0].slug, "data-science");

        let by_description = filter_topics(&topics, "borrowing");
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].playlists[0].title, "Rust for Beginners");
    }

    #[test]
    fn test_topic_name_match_keeps_all_playlists() {
        let topics = catalog();
        let result = filter_topics(&topics, "systems");

        // "Systems" topic name matches, so both of its playlists survive
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].slug, "systems");
        assert_eq!(result[0].playlists.len(), 2);
    }

    #[test]
    fn test_substring_is_unanchored() {
        let topics = catalog();
        let result = filter_topics(&topics, "ash cour");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].playlists[0].title, "React Crash Course");
    }

    #[test]
    fn test_multi_word_query_is_a_single_phrase() {
        let topics = catalog();
        // Both words appear in the catalog, but never as this exact phrase
        assert!(filter_topics(&topics, "react pandas").is_empty());
        assert_eq!(playlist_count(&filter_topics(&topics, "rust for")), 1);
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let topics = catalog();
        // Leading space still has to be part of the match
        assert!(filter_topics(&topics, " pandas").is_empty());
        assert_eq!(playlist_count(&filter_topics(&topics, "pandas ")), 1);
    }

    #[test]
    fn test_membership_rule_holds_for_every_playlist() {
        let topics = catalog();
        for query in ["learn", "rust", "web", "a", "tutorial"] {
            let result = filter_topics(&topics, query);
            for topic in &topics {
                for playlist in &topic.playlists {
                    let expected = [&playlist.title, &playlist.creator, &playlist.description, &topic.name]
                        .iter()
                        .any(|field| field.to_lowercase().contains(query));
                    let present = result
                        .iter()
                        .find(|t| t.slug == topic.slug)
                        .map(|t| t.playlists.contains(playlist))
                        .unwrap_or(false);
                    assert_eq!(expected, present, "query {:?}, playlist {:?}", query, playlist.title);
                }
            }
        }
    }

    #[test]
    fn test_never_returns_empty_topics() {
        let mut topics = catalog();
        topics.push(make_topic("Empty", "empty", Vec::new()));

        for query in ["", "e", "react", "zzz"] {
            assert!(filter_topics(&topics, query).iter().all(|t| !t.playlists.is_empty()));
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let topics = catalog();
        let snapshot = topics.clone();
        let _ = filter_topics(&topics, "react");
        assert_eq!(topics, snapshot);
    }

    #[test]
    fn test_order_is_preserved() {
        let topics = catalog();
        let result = filter_topics(&topics, "o");
        let slugs: Vec<&str> = result.iter().map(|t| t.slug.as_str()).collect();
        assert_eq!(slugs, vec!["web-dev", "systems", "data-science"]);
    }
}
