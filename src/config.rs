//! Engine configuration loaded from YAML

use crate::hash::DEFAULT_CAPACITY;
use crate::heap::HeapMode;
use crate::list::ListLayout;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Initial state of each engine. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Slot count of the hash table
    pub hash_capacity: usize,
    /// Ordering the heap starts in
    pub heap_mode: HeapMode,
    /// Whether the tree starts in AVL mode
    pub avl: bool,
    /// Placement of linked list nodes
    pub list: ListLayout,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hash_capacity: DEFAULT_CAPACITY,
            heap_mode: HeapMode::default(),
            avl: false,
            list: ListLayout::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "config: loaded");
        Self::from_yaml_str(&text)
    }

    /// `<config_dir>/dsviz/config.yaml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dsviz").join("config.yaml"))
    }

    /// Load `explicit` if given, else the default path if it exists, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}
