//! CSV export and import for store records
//!
//! The CSV file is the admin panel's only serialization round-trip. Export
//! always quotes the free-text columns; import is tolerant and never fails on
//! a bad row: short rows get trailing defaults, unreadable rows are counted
//! and skipped.
//!
//! ## Architecture
//!
//! - [`writer`] - Store list to CSV text
//! - [`reader`] - CSV text back to store records
//! - [`tokenizer`] - Row and field splitting for the reader
//! - [`stats`] - Import statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use store_locator::app::models::Store;
//! use store_locator::app::services::store_csv::{export_csv, import_csv};
//!
//! let mut store = Store::new(1, "ZECODE Yelahanka", "yelahanka-bengaluru");
//! store.tags = vec!["Yelahanka".into(), "North".into()];
//!
//! let text = export_csv(&[store.clone()]);
//! let imported = import_csv(&text).unwrap();
//!
//! assert_eq!(imported.stores.len(), 1);
//! assert_eq!(imported.stores[0].tags, store.tags);
//! ```

pub mod reader;
pub mod stats;
pub mod tokenizer;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use reader::{import_csv, read_csv_file};
pub use stats::{ImportResult, ImportStats};
pub use writer::{default_export_file_name, export_csv, write_csv_file};
