//! Error types for the persistence layer.
//!
//! Reads are fail-soft (missing or malformed state is treated as absent), so
//! `StoreError` only surfaces when a write to durable storage goes wrong.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("cannot write state file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}
