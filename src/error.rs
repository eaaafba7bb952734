//! Crate-level error type

use crate::config::ConfigError;
use crate::hash::HashTableError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the driver layer.
///
/// The engines themselves never fail except for hash table refusals; absent
/// ids are no-ops, not errors.
#[derive(Debug, Error)]
pub enum DsvizError {
    #[error("Hash table error: {0}")]
    HashTable(#[from] HashTableError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Script error: {0}")]
    Script(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for driver operations
pub type DsvizResult<T> = Result<T, DsvizError>;
