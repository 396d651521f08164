//! Store record extraction from TypeScript source text
//!
//! Migration aid for pulling `name`, `address` and `city` out of a typed
//! array literal such as `export const STORES: Store[] = [ ... ];`. The body
//! is split into `{...},` chunks with a non-greedy pattern, so objects that
//! nest braces are not supported. Chunks missing any of the three fields are
//! skipped and counted; nothing else is recovered.

use crate::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

#[cfg(test)]
pub mod tests;

/// Fields pulled from one store object literal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedStore {
    pub name: String,
    pub address: String,
    pub city: String,
}

impl ExtractedStore {
    /// Free-text query used to look the store up in the places API
    pub fn search_query(&self) -> String {
        format!("{}, {}, {}", self.name, self.address, self.city)
    }
}

/// Extraction result with chunk statistics
#[derive(Debug, Clone, Default)]
pub struct ExtractionResult {
    pub stores: Vec<ExtractedStore>,

    /// Object chunks found in the array body
    pub chunks_found: usize,

    /// Chunks missing one of the required fields
    pub chunks_skipped: usize,
}

/// Regex-based extractor for a named store array
#[derive(Debug, Clone)]
pub struct StoreExtractor {
    array_pattern: Regex,
    chunk_pattern: Regex,
    name_pattern: Regex,
    address_pattern: Regex,
    city_pattern: Regex,
}

impl StoreExtractor {
    /// Build an extractor for `export const <array_name>: <Type>[] = [...];`
    pub fn new(array_name: &str) -> Result<Self> {
        let array_source = format!(
            r"export\s+const\s+{}\s*:\s*\w+\[\]\s*=\s*\[([\s\S]*?)\];",
            regex::escape(array_name)
        );

        Ok(Self {
            array_pattern: compile(&array_source)?,
            chunk_pattern: compile(r"\{[\s\S]*?\}(?:,|\s*$)")?,
            name_pattern: compile(&string_field("name"))?,
            address_pattern: compile(&string_field("address"))?,
            city_pattern: compile(&string_field("city"))?,
        })
    }

    /// Extract stores from source text
    ///
    /// `origin` is only used to label the error when no array is found.
    pub fn extract(&self, source: &str, origin: &Path) -> Result<ExtractionResult> {
        let body = self
            .array_pattern
            .captures(source)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| Error::extraction(origin, "could not locate the store array literal"))?
            .as_str();

        let mut result = ExtractionResult::default();

        for chunk in self.chunk_pattern.find_iter(body) {
            result.chunks_found += 1;

            match self.extract_chunk(chunk.as_str()) {
                Some(store) => result.stores.push(store),
                None => {
                    result.chunks_skipped += 1;
                    debug!(
                        "Skipping store chunk {} without name/address/city",
                        result.chunks_found
                    );
                }
            }
        }

        info!(
            "Extracted {} stores from {} chunks in {} ({} skipped)",
            result.stores.len(),
            result.chunks_found,
            origin.display(),
            result.chunks_skipped
        );

        Ok(result)
    }

    /// Read a source file and extract its stores
    pub fn extract_file(&self, path: &Path) -> Result<ExtractionResult> {
        if !path.exists() {
            return Err(Error::file_not_found(path));
        }

        let source = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
        self.extract(&source, path)
    }

    fn extract_chunk(&self, chunk: &str) -> Option<ExtractedStore> {
        let capture = |pattern: &Regex| {
            pattern
                .captures(chunk)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        };

        Some(ExtractedStore {
            name: capture(&self.name_pattern)?,
            address: capture(&self.address_pattern)?,
            city: capture(&self.city_pattern)?,
        })
    }
}

fn string_field(field: &str) -> String {
    format!(r#"\b{}:\s*"([^"]+)""#, field)
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| Error::configuration(format!("Invalid extraction pattern '{}': {}", pattern, e)))
}
