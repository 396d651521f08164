//! Shared test utilities and fixtures for store registry tests

use crate::app::models::Store;
use crate::app::services::store_registry::StoreRegistry;


/// Create a test store with standard parameters
pub fn create_test_store(id: i64, name: &str, city: &str, lat: f64, lng: f64, tags: &[&str]) -> Store {
    let mut store = Store::new(id, name, crate::app::models::generate_slug(name));
    store.address = format!("{} High Street", id);
    store.city = city.to_string();
    store.state = "Karnataka".to_string();
    store.lat = lat;
    store.lng = lng;
    store.tags = tags.iter().map(|t| t.to_string()).collect();
    store
}

/// Registry with three stores across two cities
pub fn create_test_registry() -> StoreRegistry {
    StoreRegistry::from_stores(vec![
        create_test_store(1, "ZECODE Hesaraghatta", "Bengaluru", 13.0826, 77.5362, &["North"]),
        create_test_store(4, "ZECODE Kengeri", "Bengaluru", 12.9081, 77.4829, &["West", "Mysore Road"]),
        create_test_store(2, "ZECODE Mysuru", "Mysuru", 12.3295, 76.6156, &[]),
    ])
    .unwrap()
}
