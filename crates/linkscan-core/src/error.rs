use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkscanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Root path does not exist: {0}")]
    RootNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LinkscanError>;
