//! Error types for the crate's I/O boundaries.
//!
//! Camera and binding operations never fail; they degrade to no-ops. Only
//! reading and writing files can produce these errors.

use std::path::PathBuf;

/// Errors that can occur when loading or saving the INI configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read or parsed.
    #[error("failed to load config file: {0}")]
    Load(String),

    /// The file could not be written.
    #[error("failed to save config file: {0}")]
    Save(#[source] std::io::Error),
}

/// Errors that can occur when reading or writing project and script files.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON content is malformed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
