//! Error types for scenario loading
//!
//! The projection engine itself is total over its numeric domain and has no
//! error taxonomy; only the loaders can fail.

use std::path::PathBuf;

/// Errors raised while loading scenarios from disk
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scenario JSON in {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid scenario CSV in {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("scenario '{name}' has no usable fields: {reason}")]
    InvalidScenario { name: String, reason: String },
}
