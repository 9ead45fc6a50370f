//! Byte-level asset loading.
//!
//! Logos are referenced by name in a record; a `ResourceProvider` turns that
//! name into raw file bytes without the layout or render crates touching the
//! filesystem.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to load asset '{name}': {message}")]
    LoadFailed { name: String, message: String },

    #[error("Could not decode image '{name}': {message}")]
    Decode { name: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Reference-counted asset bytes.
pub type SharedResourceData = Arc<Vec<u8>>;

/// Loads named assets as raw bytes.
pub trait ResourceProvider: Send + Sync + Debug {
    fn load(&self, name: &str) -> Result<SharedResourceData, ResourceError>;

    fn exists(&self, name: &str) -> bool;

    /// Human-readable provider name for log lines.
    fn name(&self) -> &'static str;
}

/// Assets held in memory, keyed by name.
#[derive(Debug, Default)]
pub struct AssetStore {
    assets: RwLock<HashMap<String, SharedResourceData>>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `data` under `name`, replacing any previous asset.
    pub fn insert(&self, name: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        let name = name.into();
        let mut assets = self.assets.write().map_err(|_| ResourceError::LoadFailed {
            name: name.clone(),
            message: "asset store lock poisoned".to_string(),
        })?;
        assets.insert(name, Arc::new(data));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.assets.read().map(|a| a.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceProvider for AssetStore {
    fn load(&self, name: &str) -> Result<SharedResourceData, ResourceError> {
        let assets = self.assets.read().map_err(|_| ResourceError::LoadFailed {
            name: name.to_string(),
            message: "asset store lock poisoned".to_string(),
        })?;
        assets
            .get(name)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(name.to_string()))
    }

    fn exists(&self, name: &str) -> bool {
        self.assets
            .read()
            .map(|a| a.contains_key(name))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "AssetStore"
    }
}
