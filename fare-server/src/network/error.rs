//! Network snapshot error types.

use std::path::PathBuf;

/// Errors that can occur when loading a network snapshot.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Failed to read the snapshot file
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Snapshot file is not valid JSON for the expected shape
    #[error("failed to parse {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The same station id appears twice
    #[error("duplicate station id {0}")]
    DuplicateStation(u64),

    /// The same line id appears twice
    #[error("duplicate line id {0}")]
    DuplicateLine(u64),
}
