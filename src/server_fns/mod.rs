//! Server functions for Dioxus Fullstack
//! These functions run on the server and are callable from the client

use dioxus::prelude::*;

use crate::domain::models::Topic;

/// List every topic of the tutorial catalog
#[server]
pub async fn get_topics() -> Result<Vec<Topic>, ServerFnError> {
    use crate::infrastructure::catalog;

    let topics = catalog().map_err(|e| ServerFnError::new(e))?;
    tracing::debug!("get_topics returning {} topics", topics.len());

    Ok(topics.to_vec())
}
