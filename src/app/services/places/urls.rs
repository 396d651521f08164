//! Photo and map embed URL builders

use crate::app::models::Store;
use crate::app::models::places::PlacePhoto;
use crate::constants::{
    DEFAULT_MAP_CENTER, DEFAULT_MAP_ZOOM, MAPS_EMBED_BASE_URL, MAX_PHOTOS_PER_STORE,
    PHOTO_MAX_WIDTH, PLACES_API_BASE_URL, STORE_MAP_ZOOM,
};
use crate::{Error, Result};
use reqwest::Url;

/// Photo endpoint URL for a photo reference
///
/// Reference and key are substituted verbatim; both are opaque vendor tokens.
pub fn photo_url(photo_reference: &str, api_key: &str) -> String {
    format!(
        "{}/photo?maxwidth={}&photo_reference={}&key={}",
        PLACES_API_BASE_URL, PHOTO_MAX_WIDTH, photo_reference, api_key
    )
}

/// Photo URLs for the first ten photos, in vendor order
pub fn photo_urls(photos: &[PlacePhoto], api_key: &str) -> Vec<String> {
    photos
        .iter()
        .take(MAX_PHOTOS_PER_STORE)
        .map(|photo| photo_url(&photo.photo_reference, api_key))
        .collect()
}

/// Map embed for a store's detail page
///
/// Uses the place id when one is set, otherwise the street address.
pub fn store_embed_url(store: &Store, api_key: &str) -> Result<String> {
    let query = match store.place_id() {
        Some(place_id) => format!("place_id:{}", place_id),
        None => store.address.clone(),
    };
    place_embed_url(&query, api_key)
}

/// Map embed for the locator page
///
/// Centres on the selected store's address, or shows the default region.
pub fn locator_embed_url(selected: Option<&Store>, api_key: &str) -> Result<String> {
    match selected {
        Some(store) => place_embed_url(&store.address, api_key),
        None => {
            let (lat, lng) = DEFAULT_MAP_CENTER;
            embed_url(
                "view",
                &[
                    ("key", api_key),
                    ("center", &format!("{},{}", lat, lng)),
                    ("zoom", &DEFAULT_MAP_ZOOM.to_string()),
                ],
            )
        }
    }
}

fn place_embed_url(query: &str, api_key: &str) -> Result<String> {
    embed_url(
        "place",
        &[
            ("key", api_key),
            ("q", query),
            ("zoom", &STORE_MAP_ZOOM.to_string()),
        ],
    )
}

fn embed_url(mode: &str, params: &[(&str, &str)]) -> Result<String> {
    let base = format!("{}/{}", MAPS_EMBED_BASE_URL, mode);
    Url::parse_with_params(&base, params)
        .map(String::from)
        .map_err(|e| Error::configuration(format!("Invalid embed URL '{}': {}", base, e)))
}
