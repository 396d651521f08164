//! Application constants for the store locator
//!
//! This module contains the CSV layout, places API endpoints, default values
//! and environment variable names used throughout the crate.

// =============================================================================
// CSV Layout
// =============================================================================

/// Column order of the store CSV export
pub const CSV_HEADERS: &[&str] = &[
    "id",
    "name",
    "slug",
    "address",
    "city",
    "state",
    "pincode",
    "phone",
    "email",
    "lat",
    "lng",
    "tags",
    "workingHours",
    "openedDate",
    "placeId",
];

/// Separator used when joining tags into a single CSV field
pub const TAG_SEPARATOR: char = ';';

/// Column indices within a store CSV row
pub mod columns {
    pub const ID: usize = 0;
    pub const NAME: usize = 1;
    pub const SLUG: usize = 2;
    pub const ADDRESS: usize = 3;
    pub const CITY: usize = 4;
    pub const STATE: usize = 5;
    pub const PINCODE: usize = 6;
    pub const PHONE: usize = 7;
    pub const EMAIL: usize = 8;
    pub const LAT: usize = 9;
    pub const LNG: usize = 10;
    pub const TAGS: usize = 11;
    pub const WORKING_HOURS: usize = 12;
    pub const OPENED_DATE: usize = 13;
    pub const PLACE_ID: usize = 14;
}

/// Prefix of exported CSV file names (`stores-YYYY-MM-DD.csv`)
pub const EXPORT_FILE_PREFIX: &str = "stores";

// =============================================================================
// Places API
// =============================================================================

/// Base URL of the places web service
pub const PLACES_API_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Base URL of the maps embed service
pub const MAPS_EMBED_BASE_URL: &str = "https://www.google.com/maps/embed/v1";

/// Fields requested from "find place from text"
pub const FIND_PLACE_FIELDS: &str = "place_id,formatted_address,geometry";

/// Fields requested from "place details" when enriching stores
pub const ENRICHMENT_DETAIL_FIELDS: &str = "name,formatted_address,formatted_phone_number,website,opening_hours,rating,user_ratings_total,reviews,geometry,url";

/// Fields requested from "place details" when fetching photos
pub const PHOTO_DETAIL_FIELDS: &str = "name,photos";

/// Width requested from the photo endpoint
pub const PHOTO_MAX_WIDTH: u32 = 1200;

/// Maximum photos kept per store
pub const MAX_PHOTOS_PER_STORE: usize = 10;

/// Places API status values
pub mod places_status {
    pub const OK: &str = "OK";
    pub const ZERO_RESULTS: &str = "ZERO_RESULTS";
}

// =============================================================================
// Defaults
// =============================================================================

/// Delay between stores during bulk enrichment, in milliseconds
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 200;

/// HTTP request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Name of the exported store array in source files
pub const DEFAULT_STORE_ARRAY_NAME: &str = "STORES";

/// Default state for new stores
pub const DEFAULT_STATE: &str = "Karnataka";

/// Default working hours for new stores
pub const DEFAULT_WORKING_HOURS: &str = "10 AM to 10 PM";

/// Centre of the locator map when no store is selected (lat, lng)
pub const DEFAULT_MAP_CENTER: (f64, f64) = (12.9716, 77.5946);

/// Zoom of the locator map when no store is selected
pub const DEFAULT_MAP_ZOOM: u8 = 10;

/// Zoom of a single-store map
pub const STORE_MAP_ZOOM: u8 = 15;

/// Default output file for bulk enrichment results
pub const DEFAULT_ENRICHMENT_OUTPUT: &str = "store-places-results.json";

// =============================================================================
// Environment
// =============================================================================

/// Server-side places API credential
pub const ENV_PLACES_API_KEY: &str = "GOOGLE_PLACES_API_KEY";

/// Client-exposed maps credential
pub const ENV_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";

/// Override for the enrichment delay
pub const ENV_REQUEST_DELAY_MS: &str = "STORE_LOCATOR_REQUEST_DELAY_MS";
