use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::Instrument;

use crate::domain::models::Topic;
use crate::domain::services::{filter_topics, playlist_count};
use crate::infrastructure::{catalog, find_topic};
use crate::shared::errors::AppError;
use crate::shared::logging::{self, LogOperation};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

fn internal_error(e: AppError) -> StatusCode {
    tracing::error!("Failed to load tutorial catalog: {}", e);
    StatusCode::INTERNAL_SERVER_ERROR
}

/// GET /api/topics
/// List the full catalog
pub async fn list_topics_handler() -> Result<Json<Vec<Topic>>, StatusCode> {
    let topics = catalog().map_err(internal_error)?;
    Ok(Json(topics.to_vec()))
}

/// GET /api/topics/search?q=...
/// Catalog filtered with the view's search rules
pub async fn search_topics_handler(
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Topic>>, StatusCode> {
    let span = crate::log_context!(LogOperation::TopicSearch);

    async move {
        let topics = catalog().map_err(internal_error)?;
        let results = filter_topics(topics, &params.q);
        logging::log_topic_search(&params.q, results.len(), playlist_count(&results));
        Ok::<_, StatusCode>(Json(results))
    }
    .instrument(span)
    .await
}

/// GET /api/topics/{slug}
pub async fn get_topic_handler(Path(slug): Path<String>) -> Result<Json<Topic>, StatusCode> {
    crate::log_context!(LogOperation::TopicLookup, slug.as_str()).in_scope(|| {
        match find_topic(&slug) {
            Ok(topic) => Ok(Json(topic)),
            Err(AppError::TopicNotFound(_)) => Err(StatusCode::NOT_FOUND),
            Err(e) => Err(internal_error(e)),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::catalog::EMBEDDED_CATALOG;
    use crate::infrastructure::parse_catalog;

    // No TUTORIALS_CATALOG is set under test, so the handlers serve the embedded catalog

    #[tokio::test]
    async fn test_list_topics_returns_catalog() {
        let Json(topics) = list_topics_handler().await.unwrap();
        assert_eq!(topics, parse_catalog(EMBEDDED_CATALOG).unwrap());
    }

    #[tokio::test]
    async fn test_search_without_query_returns_everything() {
        let Json(all) = list_topics_handler().await.unwrap();
        let Json(results) = search_topics_handler(Query(SearchParams { q: String::new() }))
            .await
            .unwrap();
        assert_eq!(results, all);
    }

    #[tokio::test]
    async fn test_search_filters_playlists() {
        let Json(results) = search_topics_handler(Query(SearchParams { q: "REACT".to_string() }))
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].slug, "web-development");
        assert!(results[0]
            .playlists
            .iter()
            .all(|p| p.title.to_lowercase().contains("react")
                || p.description.to_lowercase().contains("react")));
    }

    #[tokio::test]
    async fn test_get_topic() {
        let Json(topic) = get_topic_handler(Path("rust".to_string())).await.unwrap();
        assert_eq!(topic.name, "Rust");

        let missing = get_topic_handler(Path("cobol".to_string())).await;
        assert_eq!(missing.unwrap_err(), StatusCode::NOT_FOUND);
    }
}
