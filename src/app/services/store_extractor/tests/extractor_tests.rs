//! Tests for source-text store extraction

use super::{source_file, store_literal};
use crate::Error;
use crate::app::services::store_extractor::*;
use std::path::Path;

fn extractor() -> StoreExtractor {
    StoreExtractor::new("STORES").unwrap()
}

#[test]
fn test_extracts_all_well_formed_stores() {
    let literals: Vec<String> = (1..=3)
        .map(|i| store_literal(i, &format!("ZECODE {i}"), &format!("{i} Main Road"), "Bengaluru"))
        .collect();
    let source = source_file("STORES", &literals);

    let result = extractor().extract(&source, Path::new("stores.ts")).unwrap();

    assert_eq!(result.chunks_found, 3);
    assert_eq!(result.chunks_skipped, 0);
    assert_eq!(
        result.stores[1],
        ExtractedStore {
            name: "ZECODE 2".to_string(),
            address: "2 Main Road".to_string(),
            city: "Bengaluru".to_string(),
        }
    );
}

#[test]
fn test_skips_chunk_missing_required_field() {
    let mut literals: Vec<String> = (1..=5)
        .map(|i| store_literal(i, &format!("Store {i}"), "Some Road", "Bengaluru"))
        .collect();
    literals.insert(
        2,
        "    {\n        id: 99,\n        name: \"No Address\",\n        city: \"Mysuru\",\n    },".to_string(),
    );
    let source = source_file("STORES", &literals);

    let result = extractor().extract(&source, Path::new("stores.ts")).unwrap();

    assert_eq!(result.chunks_found, 6);
    assert_eq!(result.chunks_skipped, 1);
    assert_eq!(result.stores.len(), 5);
    assert!(result.stores.iter().all(|s| s.name != "No Address"));
}

#[test]
fn test_last_element_without_trailing_comma() {
    let source = r#"export const STORES: Store[] = [
    { name: "First", address: "A Road", city: "Bengaluru" },
    { name: "Last", address: "B Road", city: "Mysuru" }
];"#;

    let result = extractor().extract(source, Path::new("stores.ts")).unwrap();
    assert_eq!(result.stores.len(), 2);
    assert_eq!(result.stores[1].city, "Mysuru");
}

#[test]
fn test_empty_string_field_is_treated_as_missing() {
    let source = r#"export const STORES: Store[] = [
    { name: "", address: "A Road", city: "Bengaluru" },
];"#;

    let result = extractor().extract(source, Path::new("stores.ts")).unwrap();
    assert!(result.stores.is_empty());
    assert_eq!(result.chunks_skipped, 1);
}

#[test]
fn test_field_names_match_whole_words_only() {
    let source = r#"export const STORES: Store[] = [
    { displayname: "Wrong", name: "Right", emailaddress: "x", address: "A Road", city: "Bengaluru" },
];"#;

    let result = extractor().extract(source, Path::new("stores.ts")).unwrap();
    assert_eq!(result.stores[0].name, "Right");
    assert_eq!(result.stores[0].address, "A Road");
}

#[test]
fn test_missing_array_is_an_error() {
    let source = "export const OTHER: Store[] = [];";
    let error = extractor().extract(source, Path::new("other.ts")).unwrap_err();
    assert!(matches!(error, Error::Extraction { .. }));
}

#[test]
fn test_custom_array_name() {
    let literals = vec![store_literal(1, "Kiosk", "Mall Road", "Mysuru")];
    let source = source_file("POPUP_STORES", &literals);

    let result = StoreExtractor::new("POPUP_STORES")
        .unwrap()
        .extract(&source, Path::new("popups.ts"))
        .unwrap();
    assert_eq!(result.stores.len(), 1);
}

#[test]
fn test_search_query_format() {
    let store = ExtractedStore {
        name: "ZECODE Hesaraghatta".to_string(),
        address: "Hesaraghatta Main Road".to_string(),
        city: "Bengaluru".to_string(),
    };
    assert_eq!(
        store.search_query(),
        "ZECODE Hesaraghatta, Hesaraghatta Main Road, Bengaluru"
    );
}

#[test]
fn test_extract_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stores.ts");
    let literals = vec![store_literal(1, "File Store", "File Road", "Bengaluru")];
    std::fs::write(&path, source_file("STORES", &literals)).unwrap();

    let result = extractor().extract_file(&path).unwrap();
    assert_eq!(result.stores[0].name, "File Store");

    let missing = extractor().extract_file(&dir.path().join("missing.ts"));
    assert!(matches!(missing, Err(Error::FileNotFound { .. })));
}
