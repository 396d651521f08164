//! Store registry: the in-memory store collection
//!
//! The registry is the explicit state container shared by the public views
//! and the admin workflow. It keeps stores in insertion order and guarantees
//! that ids are unique; nothing is written back to storage unless a caller
//! exports the collection.

use crate::app::models::Store;
use crate::{Error, Result};
use std::collections::HashSet;
use tracing::warn;

pub mod admin;
pub mod loader;
pub mod query;

#[cfg(test)]
pub mod tests;

/// Ordered collection of stores with unique ids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreRegistry {
    pub(crate) stores: Vec<Store>,
}

impl StoreRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry, rejecting duplicate ids
    pub fn from_stores(stores: Vec<Store>) -> Result<Self> {
        let mut registry = Self::new();
        for store in stores {
            registry.insert(store)?;
        }
        Ok(registry)
    }

    /// Get a store by id
    pub fn get_store(&self, id: i64) -> Option<&Store> {
        self.stores.iter().find(|store| store.id == id)
    }

    /// Check if a store id exists in the registry
    pub fn contains_store(&self, id: i64) -> bool {
        self.get_store(id).is_some()
    }

    /// Total number of stores
    pub fn store_count(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// All stores in insertion order
    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    /// Id for the next new store: one past the current maximum
    ///
    /// Fails when the maximum id is already `i64::MAX`.
    pub fn next_id(&self) -> Result<i64> {
        let max_id = self.stores.iter().map(|store| store.id).max().unwrap_or(0);
        max_id
            .checked_add(1)
            .ok_or_else(|| Error::store_validation(format!("No store id left after {}", max_id)))
    }

    /// Append a store, failing if its id is taken
    pub fn insert(&mut self, store: Store) -> Result<()> {
        if self.contains_store(store.id) {
            return Err(Error::store_validation(format!(
                "Store id {} already exists",
                store.id
            )));
        }
        self.stores.push(store);
        Ok(())
    }

    /// Replace the whole collection, as a CSV import does
    ///
    /// Later stores reusing an id already seen are dropped; the number
    /// dropped is returned.
    pub fn replace_all(&mut self, stores: Vec<Store>) -> usize {
        let mut seen = HashSet::with_capacity(stores.len());
        let mut kept = Vec::with_capacity(stores.len());
        let mut dropped = 0;

        for store in stores {
            if seen.insert(store.id) {
                kept.push(store);
            } else {
                warn!(
                    "Store id {} ({}) appears more than once - keeping first occurrence",
                    store.id, store.name
                );
                dropped += 1;
            }
        }

        self.stores = kept;
        dropped
    }
}
