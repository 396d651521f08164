//! CSV text back to store records
//!
//! The first row is a header and is discarded without validation. Each
//! remaining non-blank row becomes one store, whatever its column count:
//! missing numbers default to zero and missing text to empty. Quoted fields
//! may be padded with whitespace and may contain commas, line breaks and
//! doubled quotes.

use super::stats::{ImportResult, ImportStats};
use super::tokenizer::{Row, RowTokenizer};
use crate::app::models::Store;
use crate::constants::{CSV_HEADERS, TAG_SEPARATOR, columns};
use crate::{Error, Result};
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info, warn};

/// Parse CSV text into stores
pub fn import_csv(text: &str) -> Result<ImportResult> {
    let tokenizer = RowTokenizer::new()?;
    Ok(import_rows(tokenizer.rows(text), false))
}

/// Parse raw CSV bytes into stores
///
/// Rows that are not valid UTF-8 are skipped and counted.
pub fn import_csv_bytes(data: &[u8]) -> Result<ImportResult> {
    let (text, lossy) = match String::from_utf8_lossy(data) {
        Cow::Borrowed(text) => (Cow::Borrowed(text), false),
        owned => (owned, true),
    };

    let tokenizer = RowTokenizer::new()?;
    Ok(import_rows(tokenizer.rows(&text), lossy))
}

/// Read and parse a CSV file
pub fn read_csv_file(path: &Path) -> Result<ImportResult> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    let data = std::fs::read(path)
        .map_err(|e| Error::io(format!("Failed to read CSV file {}", path.display()), e))?;
    let result = import_csv_bytes(&data)?;

    info!(
        "Imported {} stores from {} ({} rows skipped)",
        result.stats.stores_imported,
        path.display(),
        result.stats.rows_skipped
    );

    Ok(result)
}

fn import_rows(rows: Vec<Row>, lossy: bool) -> ImportResult {
    let mut stores = Vec::new();
    let mut stats = ImportStats::new();

    for row in rows.into_iter().skip(1) {
        if row.is_blank() {
            continue;
        }

        stats.rows_read += 1;
        if lossy && row.fields.iter().any(|f| f.contains(char::REPLACEMENT_CHARACTER)) {
            stats.add_skipped(format!("Skipped row at line {}: invalid UTF-8", row.line));
            continue;
        }

        if row.fields.len() < CSV_HEADERS.len() {
            stats.short_rows += 1;
            debug!(
                "Row at line {} has {} of {} columns, defaulting the rest",
                row.line,
                row.fields.len(),
                CSV_HEADERS.len()
            );
        }

        stores.push(store_from_fields(&row.fields));
    }

    stats.stores_imported = stores.len();

    if stats.rows_skipped > 0 {
        warn!(
            "CSV import skipped {} of {} rows",
            stats.rows_skipped, stats.rows_read
        );
    }

    ImportResult { stores, stats }
}

fn store_from_fields(fields: &[String]) -> Store {
    let field = |index: usize| fields.get(index).map_or("", String::as_str);

    Store {
        id: parse_id(field(columns::ID)),
        name: field(columns::NAME).to_string(),
        slug: field(columns::SLUG).to_string(),
        address: field(columns::ADDRESS).to_string(),
        city: field(columns::CITY).to_string(),
        state: field(columns::STATE).to_string(),
        pincode: field(columns::PINCODE).to_string(),
        phone: field(columns::PHONE).to_string(),
        email: field(columns::EMAIL).to_string(),
        lat: parse_coordinate(field(columns::LAT)),
        lng: parse_coordinate(field(columns::LNG)),
        tags: split_tags(field(columns::TAGS)),
        working_hours: optional(field(columns::WORKING_HOURS)),
        opened_date: optional(field(columns::OPENED_DATE)),
        place_id: optional(field(columns::PLACE_ID)),
        photos: None,
        featured_products: None,
        description: None,
    }
}

fn parse_id(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}

fn parse_coordinate(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
        .unwrap_or(0.0)
}

/// Split a joined tag field, dropping empty entries
pub(crate) fn split_tags(value: &str) -> Vec<String> {
    value
        .split(TAG_SEPARATOR)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
