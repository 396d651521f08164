//! Tests for CSV import

use crate::app::services::store_csv::reader::*;

const HEADER: &str =
    "id,name,slug,address,city,state,pincode,phone,email,lat,lng,tags,workingHours,openedDate,placeId";

#[test]
fn test_import_full_row() {
    let text = format!(
        "{}\n1,\"ZECODE Yelahanka\",yelahanka-bengaluru,\"12, MG Road\",Bengaluru,Karnataka,560064,\
         080-12345,yel@example.com,13.1007,77.5963,\"Yelahanka;North\",\"10 AM to 10 PM\",\"Jan 2024\",\"ChIJyel\"",
        HEADER
    );

    let result = import_csv(&text).unwrap();
    assert_eq!(result.stores.len(), 1);
    assert_eq!(result.stats.rows_read, 1);
    assert_eq!(result.stats.rows_skipped, 0);

    let store = &result.stores[0];
    assert_eq!(store.id, 1);
    assert_eq!(store.name, "ZECODE Yelahanka");
    assert_eq!(store.address, "12, MG Road");
    assert_eq!(store.pincode, "560064");
    assert_eq!(store.lat, 13.1007);
    assert_eq!(store.lng, 77.5963);
    assert_eq!(store.tags, vec!["Yelahanka", "North"]);
    assert_eq!(store.working_hours.as_deref(), Some("10 AM to 10 PM"));
    assert_eq!(store.opened_date.as_deref(), Some("Jan 2024"));
    assert_eq!(store.place_id.as_deref(), Some("ChIJyel"));
}

#[test]
fn test_import_short_row_defaults_trailing_fields() {
    let text = format!("{}\n5,\"Short Store\",short-store,\"Somewhere\"", HEADER);

    let result = import_csv(&text).unwrap();
    assert_eq!(result.stores.len(), 1);
    assert_eq!(result.stats.short_rows, 1);

    let store = &result.stores[0];
    assert_eq!(store.id, 5);
    assert_eq!(store.address, "Somewhere");
    assert_eq!(store.city, "");
    assert_eq!(store.lat, 0.0);
    assert_eq!(store.lng, 0.0);
    assert!(store.tags.is_empty());
    assert_eq!(store.place_id, None);
}

#[test]
fn test_import_header_is_not_validated() {
    let text = "completely,different,header\n7,\"Named\",named";
    let result = import_csv(text).unwrap();

    assert_eq!(result.stores.len(), 1);
    assert_eq!(result.stores[0].id, 7);
    assert_eq!(result.stores[0].slug, "named");
}

#[test]
fn test_import_skips_blank_lines() {
    let text = format!("{}\n\n1,\"A\",a\n   \n2,\"B\",b\n", HEADER);
    let result = import_csv(&text).unwrap();

    assert_eq!(result.stores.len(), 2);
    assert_eq!(result.stats.rows_read, 2);
    assert_eq!(result.stores[1].name, "B");
}

#[test]
fn test_import_unparseable_numbers_default_to_zero() {
    let text = format!("{}\nabc,\"X\",x,\"\",City,,,,,north,NaN", HEADER);
    let store = &import_csv(&text).unwrap().stores[0];

    assert_eq!(store.id, 0);
    assert_eq!(store.lat, 0.0);
    assert_eq!(store.lng, 0.0);
}

#[test]
fn test_import_tags_drop_empty_entries() {
    let text = format!("{}\n1,\"T\",t,\"\",,,,,,0,0,\";A;;B;\"", HEADER);
    let store = &import_csv(&text).unwrap().stores[0];
    assert_eq!(store.tags, vec!["A", "B"]);
}

#[test]
fn test_import_handles_crlf_and_spaces_in_bare_fields() {
    let text = format!("{}\r\n1,\"A\",a,\"Addr\",New Delhi,Delhi\r\n", HEADER);
    let store = &import_csv(&text).unwrap().stores[0];
    assert_eq!(store.city, "New Delhi");
    assert_eq!(store.state, "Delhi");
}

#[test]
fn test_import_unescapes_doubled_quotes() {
    let text = format!("{}\n1,\"The \"\"Big\"\" Store\",big", HEADER);
    let store = &import_csv(&text).unwrap().stores[0];
    assert_eq!(store.name, "The \"Big\" Store");
}

#[test]
fn test_import_counts_invalid_utf8_rows_as_skipped() {
    let mut data = format!("{}\n1,\"Good\",good\n", HEADER).into_bytes();
    data.extend_from_slice(b"2,\"Bad \xff\xfe\",bad\n");
    data.extend_from_slice(b"3,\"Also Good\",also-good\n");

    let result = import_csv_bytes(&data).unwrap();
    assert_eq!(result.stores.len(), 2);
    assert_eq!(result.stats.rows_read, 3);
    assert_eq!(result.stats.rows_skipped, 1);
    assert_eq!(result.stats.errors.len(), 1);
    assert_eq!(result.stores[1].id, 3);
}

#[test]
fn test_import_header_only_yields_no_stores() {
    let result = import_csv(HEADER).unwrap();
    assert!(result.stores.is_empty());
    assert_eq!(result.stats.rows_read, 0);
}

#[test]
fn test_read_csv_file_missing() {
    let result = read_csv_file(std::path::Path::new("/nonexistent/stores.csv"));
    assert!(matches!(result, Err(crate::Error::FileNotFound { .. })));
}

#[test]
fn test_split_tags() {
    assert_eq!(split_tags("A;B"), vec!["A", "B"]);
    assert!(split_tags("").is_empty());
}

#[test]
fn test_import_quoted_fields_after_whitespace() {
    let text = "id,name,slug,address\n1, \"ZECODE Orion, Rajajinagar\", orion, \"12 Main Road\"";
    let result = import_csv(text).unwrap();

    let store = &result.stores[0];
    assert_eq!(store.id, 1);
    assert_eq!(store.name, "ZECODE Orion, Rajajinagar");
    assert_eq!(store.slug, "orion");
    assert_eq!(store.address, "12 Main Road");
}

#[test]
fn test_import_keeps_whitespace_inside_quotes() {
    let text = format!("{}\n1,  \" ZECODE \" ,z,\"12 Road \"", HEADER);
    let store = &import_csv(&text).unwrap().stores[0];

    assert_eq!(store.name, " ZECODE ");
    assert_eq!(store.slug, "z");
    assert_eq!(store.address, "12 Road ");
}

#[test]
fn test_import_delimiter_only_row_yields_defaulted_store() {
    let result = import_csv("id,name\n,,,\n2,\"B\"").unwrap();

    assert_eq!(result.stores.len(), 2);
    assert_eq!(result.stats.rows_read, 2);
    assert_eq!(result.stores[0].id, 0);
    assert_eq!(result.stores[0].name, "");
    assert_eq!(result.stores[1].name, "B");
}

#[test]
fn test_import_quoted_field_spanning_lines() {
    let text = format!("{}\n1,\"A\",a,\"Line one\nLine two\",City\n2,\"B\",b", HEADER);
    let result = import_csv(&text).unwrap();

    assert_eq!(result.stores.len(), 2);
    assert_eq!(result.stores[0].address, "Line one\nLine two");
    assert_eq!(result.stores[0].city, "City");
    assert_eq!(result.stores[1].id, 2);
}
