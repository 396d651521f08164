//! Store list to CSV text
//!
//! Free-text columns (name, address, tags, working hours, opened date and
//! place id) are always quoted. The remaining columns are written bare unless
//! their content would break the row or lose surrounding whitespace on import.
//! Embedded quotes are doubled.

use crate::Result;
use crate::app::models::Store;
use crate::constants::{CSV_HEADERS, EXPORT_FILE_PREFIX, TAG_SEPARATOR};
use chrono::NaiveDate;
use std::path::Path;
use tracing::{debug, info};

/// Serialize stores to CSV: header row, then one row per store, `\n` separated
pub fn export_csv(stores: &[Store]) -> String {
    let mut lines = Vec::with_capacity(stores.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    lines.extend(stores.iter().map(store_row));

    debug!("Exported {} stores to CSV", stores.len());
    lines.join("\n")
}

/// Export stores and write the CSV to `path`
pub fn write_csv_file(path: &Path, stores: &[Store]) -> Result<()> {
    let content = export_csv(stores);
    std::fs::write(path, content).map_err(|e| {
        crate::Error::io(format!("Failed to write CSV file {}", path.display()), e)
    })?;

    info!("Wrote {} stores to {}", stores.len(), path.display());
    Ok(())
}

/// Dated file name for an export (e.g. `stores-2024-06-01.csv`)
pub fn default_export_file_name(date: NaiveDate) -> String {
    format!("{}-{}.csv", EXPORT_FILE_PREFIX, date.format("%Y-%m-%d"))
}

fn store_row(store: &Store) -> String {
    let tags = store.tags.join(&TAG_SEPARATOR.to_string());

    let fields = [
        store.id.to_string(),
        quoted(&store.name),
        bare(&store.slug),
        quoted(&store.address),
        bare(&store.city),
        bare(&store.state),
        bare(&store.pincode),
        bare(&store.phone),
        bare(&store.email),
        store.lat.to_string(),
        store.lng.to_string(),
        quoted(&tags),
        quoted(store.working_hours.as_deref().unwrap_or_default()),
        quoted(store.opened_date.as_deref().unwrap_or_default()),
        quoted(store.place_id.as_deref().unwrap_or_default()),
    ];

    fields.join(",")
}

/// Wrap in double quotes, doubling any embedded quote
pub(crate) fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Write as-is unless the value contains a delimiter, quote or line break,
/// or has whitespace at either end that an unquoted read would trim
pub(crate) fn bare(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) || value.trim() != value {
        quoted(value)
    } else {
        value.to_string()
    }
}
