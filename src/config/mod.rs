//! Runtime configuration read from the environment
//!
//! - `PORT`: API server port (default 3001)
//! - `TUTORIALS_CATALOG`: path to a catalog JSON file (default: embedded catalog)

use std::path::PathBuf;

use crate::shared::errors::{AppError, Result};

pub const DEFAULT_PORT: u16 = 3001;
pub const PORT_ENV: &str = "PORT";
pub const CATALOG_ENV: &str = "TUTORIALS_CATALOG";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            catalog_path: None,
        }
    }
}

impl AppConfig {
    /// Build config from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(PORT_ENV) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::InvalidConfig(format!("{} must be a port number, got {:?}", PORT_ENV, raw))
            })?,
            None => DEFAULT_PORT,
        };

        let catalog_path = catalog_path_from_lookup(&lookup);

        Ok(Self { port, catalog_path })
    }
}

/// Catalog file from the process environment. Ignores `PORT`.
pub fn catalog_path_from_env() -> Option<PathBuf> {
    catalog_path_from_lookup(&|key: &str| std::env::var(key).ok())
}

/// Catalog file from a key lookup; blank values count as unset
pub fn catalog_path_from_lookup<F>(lookup: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(CATALOG_ENV)
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}
