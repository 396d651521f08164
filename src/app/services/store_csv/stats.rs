//! Import statistics and result structures for store CSV files

use crate::app::models::Store;

/// Import result with stores and basic statistics
#[derive(Debug, Clone)]
pub struct ImportResult {
    /// Stores built from the data rows, in file order
    pub stores: Vec<Store>,

    /// Basic import statistics
    pub stats: ImportStats,
}

/// Simple import statistics
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ImportStats {
    /// Number of non-blank data rows encountered
    pub rows_read: usize,

    /// Number of stores built
    pub stores_imported: usize,

    /// Number of rows the tokenizer could not read
    pub rows_skipped: usize,

    /// Number of rows with fewer columns than the header
    pub short_rows: usize,

    /// Row-level errors for debugging
    pub errors: Vec<String>,
}

impl ImportStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a skipped row with its reason
    pub fn add_skipped(&mut self, message: impl Into<String>) {
        self.rows_skipped += 1;
        self.errors.push(message.into());
    }

    /// Share of rows that became stores, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.rows_read == 0 {
            0.0
        } else {
            (self.stores_imported as f64 / self.rows_read as f64) * 100.0
        }
    }
}
