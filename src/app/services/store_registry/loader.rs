//! Loading and saving store collections as JSON
//!
//! The storefront ships a compiled-in store list. It lives in
//! `data/stores.json` and is embedded at build time; other collections can
//! be loaded from and saved to JSON files with the same schema.

use super::StoreRegistry;
use crate::app::models::Store;
use crate::{Error, Result};
use std::path::Path;
use tracing::{debug, info};

/// Compiled-in store list
pub const BUILTIN_STORES_JSON: &str = include_str!("../../../../data/stores.json");

impl StoreRegistry {
    /// Registry seeded with the compiled-in store list
    pub fn builtin() -> Result<Self> {
        let registry = Self::from_json(BUILTIN_STORES_JSON)
            .map_err(|e| Error::configuration(format!("Built-in store list is invalid: {}", e)))?;
        debug!("Loaded {} built-in stores", registry.store_count());
        Ok(registry)
    }

    /// Parse a JSON array of stores
    pub fn from_json(json: &str) -> Result<Self> {
        let stores: Vec<Store> = serde_json::from_str(json)
            .map_err(|e| Error::json("Failed to parse store list", e))?;
        Self::from_stores(stores)
    }

    /// Load a JSON store list from disk
    pub fn load_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path));
        }

        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
        let registry = Self::from_json(&json)?;

        info!(
            "Loaded {} stores from {}",
            registry.store_count(),
            path.display()
        );
        Ok(registry)
    }

    /// Load from `path` when given, otherwise use the compiled-in list
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_json_file(path),
            None => Self::builtin(),
        }
    }

    /// Serialize the collection as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.stores)
            .map_err(|e| Error::json("Failed to serialize store list", e))
    }

    /// Write the collection to disk as pretty JSON
    pub fn save_json_file(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)
            .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;
        info!("Saved {} stores to {}", self.store_count(), path.display());
        Ok(())
    }
}
