//! Error types for everything around the engine.
//!
//! The engine itself is total; only input validation and history storage
//! can fail.

use std::path::PathBuf;

/// Errors raised by sessions and history stores.
#[derive(Debug, thiserror::Error)]
pub enum FlamesError {
    #[error("Please enter both names!")]
    MissingName,

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("History serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl FlamesError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FlamesError>;
