//! Store Locator Library
//!
//! Tooling behind a retail store locator: the store registry and its search,
//! admin edits, CSV import and export, and read-only use of the places API.
//!
//! This library provides tools for:
//! - Searching and browsing the store registry
//! - Creating, editing and deleting stores from admin drafts
//! - Exporting the registry to CSV and importing it back
//! - Pulling store records out of TypeScript source files
//! - Fetching store photos and ratings from the places API
//! - Building photo and map embed URLs

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod places;
        pub mod store_csv;
        pub mod store_extractor;
        pub mod store_registry;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Store, StoreDraft};
pub use app::services::store_registry::StoreRegistry;
pub use config::Config;
pub use error::{Error, Result};
