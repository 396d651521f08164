//! Export-then-import behaviour

use super::{create_test_store, create_test_stores};
use crate::app::services::store_csv::{export_csv, import_csv};

#[test]
fn test_round_trip_preserves_scalar_fields() {
    let stores = create_test_stores();
    let imported = import_csv(&export_csv(&stores)).unwrap();

    assert_eq!(imported.stores.len(), stores.len());
    assert_eq!(imported.stats.rows_skipped, 0);
    assert_eq!(imported.stores, stores);
}

#[test]
fn test_round_trip_tags() {
    let store = create_test_store(1, "Tagged", "Bengaluru", &["A", "B"]);
    let imported = import_csv(&export_csv(&[store])).unwrap();
    assert_eq!(imported.stores[0].tags, vec!["A", "B"]);
}

#[test]
fn test_round_trip_text_with_quotes() {
    let mut store = create_test_store(2, "Joe's \"Corner\" Shop", "Bengaluru", &["Say \"hi\""]);
    store.working_hours = Some("9 \"ish\" to late".to_string());
    let imported = import_csv(&export_csv(&[store.clone()])).unwrap();
    assert_eq!(imported.stores[0], store);
}

#[test]
fn test_round_trip_drops_fields_outside_csv() {
    let mut store = create_test_store(3, "Photo Store", "Bengaluru", &[]);
    store.photos = Some(vec!["https://example.com/1.jpg".to_string()]);
    store.description = Some("Flagship".to_string());

    let imported = &import_csv(&export_csv(&[store])).unwrap().stores[0];
    assert_eq!(imported.photos, None);
    assert_eq!(imported.description, None);
}

#[test]
fn test_round_trip_surrounding_whitespace() {
    let mut store = create_test_store(5, " ZECODE ", "Bengaluru", &["North"]);
    store.slug = " z ".to_string();
    store.address = "12 Road ".to_string();
    store.city = "  Bengaluru".to_string();

    let imported = import_csv(&export_csv(&[store.clone()])).unwrap();
    assert_eq!(imported.stores[0], store);
}
