use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Catalog file not found: {0}")]
    CatalogNotFound(String),

    #[error("Topic not found: {0}")]
    TopicNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
