//! Shared fixtures for store CSV tests

use crate::app::models::Store;

mod reader_tests;
mod roundtrip_tests;

/// Create a fully populated test store
pub fn create_test_store(id: i64, name: &str, city: &str, tags: &[&str]) -> Store {
    let mut store = Store::new(id, name, crate::app::models::generate_slug(name));
    store.address = format!("{} Main Road, {}", id, city);
    store.city = city.to_string();
    store.state = "Karnataka".to_string();
    store.pincode = "560090".to_string();
    store.phone = "+91 80 4000 0000".to_string();
    store.email = format!("store{}@example.com", id);
    store.lat = 13.0826;
    store.lng = 77.5362;
    store.tags = tags.iter().map(|t| t.to_string()).collect();
    store.working_hours = Some("10 AM to 10 PM".to_string());
    store.opened_date = Some("March 2023".to_string());
    store.place_id = Some(format!("ChIJplace{}", id));
    store
}

/// A small collection covering the awkward cases
pub fn create_test_stores() -> Vec<Store> {
    let mut bare = Store::new(3, "Pop-up Kiosk", "pop-up-kiosk");
    bare.city = "Mysuru".to_string();

    vec![
        create_test_store(1, "ZECODE Hesaraghatta", "Bengaluru", &["Hesaraghatta", "North"]),
        create_test_store(2, "ZECODE Orion Mall, Rajajinagar", "Bengaluru", &[]),
        bare,
    ]
}
