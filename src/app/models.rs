//! Data models for the store locator
//!
//! This module contains the store record shared by every component and the
//! partial draft used by the admin workflow to create and edit stores.

use crate::constants::{DEFAULT_STATE, DEFAULT_WORKING_HOURS};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

pub mod places;

// =============================================================================
// Store Record
// =============================================================================

/// A single physical retail location
///
/// Field names serialize in camelCase so that JSON seed data and reports
/// line up with the storefront's own `Store` type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Identifier, unique within a registry
    pub id: i64,

    /// Display name (e.g., "ZECODE Hesaraghatta")
    pub name: String,

    /// URL slug used by the detail page
    pub slug: String,

    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub phone: String,
    pub email: String,

    /// Latitude in WGS84 decimal degrees
    pub lat: f64,

    /// Longitude in WGS84 decimal degrees
    pub lng: f64,

    /// Free-text area tags, order preserving
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opened_date: Option<String>,

    /// Vendor place identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,

    /// Photo URLs in display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,

    /// Identifiers of featured products
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_products: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Store {
    /// Create a store with the required fields and empty optionals
    pub fn new(id: i64, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            pincode: String::new(),
            phone: String::new(),
            email: String::new(),
            lat: 0.0,
            lng: 0.0,
            tags: Vec::new(),
            working_hours: None,
            opened_date: None,
            place_id: None,
            photos: None,
            featured_products: None,
            description: None,
        }
    }

    /// Validate the fields an admin is expected to fill in
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::store_validation("Store name cannot be empty"));
        }

        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(Error::store_validation(format!(
                "Invalid latitude {}: must be between -90 and 90 degrees",
                self.lat
            )));
        }

        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(Error::store_validation(format!(
                "Invalid longitude {}: must be between -180 and 180 degrees",
                self.lng
            )));
        }

        Ok(())
    }

    /// Store location as (latitude, longitude)
    pub fn location(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    /// Place id if one is set and non-blank
    pub fn place_id(&self) -> Option<&str> {
        self.place_id.as_deref().filter(|id| !id.trim().is_empty())
    }

    /// Photo URLs, empty when none were fetched
    pub fn photo_urls(&self) -> &[String] {
        self.photos.as_deref().unwrap_or_default()
    }

    /// Case-insensitive match over name, city, address and tags
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.city.to_lowercase().contains(&query)
            || self.address.to_lowercase().contains(&query)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
    }
}

// =============================================================================
// Admin Draft
// =============================================================================

/// Partially filled store form used by the admin workflow
///
/// Every field is optional; missing values fall back to the defaults applied
/// in [`StoreDraft::into_store`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDraft {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub tags: Option<Vec<String>>,
    pub working_hours: Option<String>,
    pub opened_date: Option<String>,
    pub place_id: Option<String>,
    pub photos: Option<Vec<String>>,
    pub featured_products: Option<Vec<String>>,
    pub description: Option<String>,
}

impl Default for StoreDraft {
    fn default() -> Self {
        Self {
            name: None,
            slug: None,
            address: None,
            city: None,
            state: Some(DEFAULT_STATE.to_string()),
            pincode: None,
            phone: None,
            email: None,
            lat: None,
            lng: None,
            tags: None,
            working_hours: Some(DEFAULT_WORKING_HOURS.to_string()),
            opened_date: None,
            place_id: None,
            photos: None,
            featured_products: None,
            description: None,
        }
    }
}

impl From<&Store> for StoreDraft {
    fn from(store: &Store) -> Self {
        Self {
            name: Some(store.name.clone()),
            slug: Some(store.slug.clone()),
            address: Some(store.address.clone()),
            city: Some(store.city.clone()),
            state: Some(store.state.clone()),
            pincode: Some(store.pincode.clone()),
            phone: Some(store.phone.clone()),
            email: Some(store.email.clone()),
            lat: Some(store.lat),
            lng: Some(store.lng),
            tags: Some(store.tags.clone()),
            working_hours: store.working_hours.clone(),
            opened_date: store.opened_date.clone(),
            place_id: store.place_id.clone(),
            photos: store.photos.clone(),
            featured_products: store.featured_products.clone(),
            description: store.description.clone(),
        }
    }
}

impl StoreDraft {
    /// Set tags from a comma-separated form input, dropping blanks
    pub fn set_tags_from_input(&mut self, input: &str) {
        self.tags = Some(parse_tag_input(input));
    }

    /// Build a new store with the given id, applying form defaults
    ///
    /// A blank slug is generated from the name.
    pub fn into_store(self, id: i64) -> Store {
        let name = non_blank(self.name).unwrap_or_default();
        let slug = non_blank(self.slug).unwrap_or_else(|| generate_slug(&name));

        Store {
            id,
            slug,
            address: self.address.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            state: non_blank(self.state).unwrap_or_else(|| DEFAULT_STATE.to_string()),
            pincode: self.pincode.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            lat: self.lat.unwrap_or(0.0),
            lng: self.lng.unwrap_or(0.0),
            tags: self.tags.unwrap_or_default(),
            working_hours: Some(
                non_blank(self.working_hours).unwrap_or_else(|| DEFAULT_WORKING_HOURS.to_string()),
            ),
            opened_date: non_blank(self.opened_date),
            place_id: non_blank(self.place_id),
            photos: self.photos,
            featured_products: self.featured_products,
            description: non_blank(self.description),
            name,
        }
    }

    /// Overlay the draft onto an existing store, keeping its id
    pub fn apply_to(self, store: &Store) -> Store {
        let mut updated = store.clone();

        if let Some(name) = self.name {
            updated.name = name;
        }
        if let Some(slug) = self.slug {
            updated.slug = slug;
        }
        if let Some(address) = self.address {
            updated.address = address;
        }
        if let Some(city) = self.city {
            updated.city = city;
        }
        if let Some(state) = self.state {
            updated.state = state;
        }
        if let Some(pincode) = self.pincode {
            updated.pincode = pincode;
        }
        if let Some(phone) = self.phone {
            updated.phone = phone;
        }
        if let Some(email) = self.email {
            updated.email = email;
        }
        if let Some(lat) = self.lat {
            updated.lat = lat;
        }
        if let Some(lng) = self.lng {
            updated.lng = lng;
        }
        if let Some(tags) = self.tags {
            updated.tags = tags;
        }
        if self.working_hours.is_some() {
            updated.working_hours = self.working_hours;
        }
        if self.opened_date.is_some() {
            updated.opened_date = self.opened_date;
        }
        if self.place_id.is_some() {
            updated.place_id = self.place_id;
        }
        if self.photos.is_some() {
            updated.photos = self.photos;
        }
        if self.featured_products.is_some() {
            updated.featured_products = self.featured_products;
        }
        if self.description.is_some() {
            updated.description = self.description;
        }

        updated
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Derive a URL slug from a store name
///
/// Lowercases, drops anything other than ASCII letters, digits, whitespace
/// and hyphens, then collapses whitespace and hyphen runs into single hyphens.
pub fn generate_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
        }
    }

    slug
}

/// Split a comma-separated tag input into trimmed, non-empty tags
pub fn parse_tag_input(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
