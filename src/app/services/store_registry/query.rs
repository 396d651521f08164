//! Store lookup and search functionality
//!
//! Query methods behind the public locator views: free-text search, slug
//! lookup for the detail page, and city / region filters.

use super::StoreRegistry;
use crate::app::models::Store;

impl StoreRegistry {
    /// Search stores by name, city, address or tag (case-insensitive)
    ///
    /// A blank query returns every store, in registry order.
    ///
    /// # Examples
    /// ```
    /// # use store_locator::app::services::store_registry::StoreRegistry;
    /// let registry = StoreRegistry::builtin().unwrap();
    /// let north = registry.search("north bengaluru");
    /// assert!(north.iter().all(|s| s.city == "Bengaluru"));
    /// ```
    pub fn search(&self, query: &str) -> Vec<&Store> {
        let query = query.trim();
        if query.is_empty() {
            return self.stores.iter().collect();
        }

        self.stores
            .iter()
            .filter(|store| store.matches_query(query))
            .collect()
    }

    /// Find the store served at `/store/<slug>`
    pub fn find_by_slug(&self, slug: &str) -> Option<&Store> {
        self.stores.iter().find(|store| store.slug == slug)
    }

    /// Find a store by exact name, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&Store> {
        self.stores
            .iter()
            .find(|store| store.name.eq_ignore_ascii_case(name))
    }

    /// Stores in a city, ignoring case
    pub fn stores_in_city(&self, city: &str) -> Vec<&Store> {
        self.stores
            .iter()
            .filter(|store| store.city.eq_ignore_ascii_case(city))
            .collect()
    }

    /// Stores inside a latitude/longitude bounding box (inclusive)
    pub fn stores_in_region(
        &self,
        min_lat: f64,
        max_lat: f64,
        min_lng: f64,
        max_lng: f64,
    ) -> Vec<&Store> {
        self.stores
            .iter()
            .filter(|store| {
                store.lat >= min_lat
                    && store.lat <= max_lat
                    && store.lng >= min_lng
                    && store.lng <= max_lng
            })
            .collect()
    }

    /// Distinct cities in first-seen order
    pub fn cities(&self) -> Vec<&str> {
        let mut cities: Vec<&str> = Vec::new();
        for store in &self.stores {
            if !cities.contains(&store.city.as_str()) {
                cities.push(&store.city);
            }
        }
        cities
    }
}
