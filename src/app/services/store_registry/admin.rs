//! Admin operations: create, edit and delete stores
//!
//! Changes apply to the in-memory registry only. Persisting them is up to
//! the caller, typically through a CSV export.

use super::StoreRegistry;
use crate::app::models::{Store, StoreDraft};
use crate::{Error, Result};
use tracing::info;

impl StoreRegistry {
    /// Add a store built from a draft, assigning the next free id
    pub fn create_store(&mut self, draft: StoreDraft) -> Result<&Store> {
        let store = draft.into_store(self.next_id()?);
        store.validate()?;

        info!("Adding store {} ({})", store.id, store.name);
        self.insert(store)?;

        // insert() appended the store
        self.stores
            .last()
            .ok_or_else(|| Error::store_validation("Store was not added"))
    }

    /// Overlay a draft onto an existing store
    pub fn update_store(&mut self, id: i64, draft: StoreDraft) -> Result<&Store> {
        let index = self
            .stores
            .iter()
            .position(|store| store.id == id)
            .ok_or_else(|| Error::store_not_found(id.to_string()))?;

        let updated = draft.apply_to(&self.stores[index]);
        updated.validate()?;

        info!("Updating store {} ({})", id, updated.name);
        self.stores[index] = updated;
        Ok(&self.stores[index])
    }

    /// Remove a store and return it
    pub fn delete_store(&mut self, id: i64) -> Result<Store> {
        let index = self
            .stores
            .iter()
            .position(|store| store.id == id)
            .ok_or_else(|| Error::store_not_found(id.to_string()))?;

        let removed = self.stores.remove(index);
        info!("Deleted store {} ({})", removed.id, removed.name);
        Ok(removed)
    }
}
