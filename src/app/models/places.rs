//! Data models for the places API and the reports built from it
//!
//! Response types mirror the vendor's documented JSON shape and tolerate
//! missing fields. Report types are what the places commands write to disk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Vendor Responses
// =============================================================================

/// A latitude/longitude pair as returned by the vendor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub location: Option<LatLng>,
}

/// Response of the "find place from text" endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct FindPlaceResponse {
    pub status: String,
    #[serde(default)]
    pub candidates: Vec<PlaceCandidate>,
    pub error_message: Option<String>,
}

/// One candidate returned by "find place from text"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    pub place_id: String,
    pub formatted_address: Option<String>,
    pub geometry: Option<Geometry>,
}

impl PlaceCandidate {
    /// Candidate coordinates when the vendor supplied them
    pub fn location(&self) -> Option<LatLng> {
        self.geometry.as_ref().and_then(|g| g.location)
    }
}

/// Response of the "place details" endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDetailsResponse {
    pub status: String,
    pub result: Option<PlaceDetails>,
    pub error_message: Option<String>,
}

/// Place details; only the requested fields are populated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub website: Option<String>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
    /// Canonical maps URL of the place
    pub url: Option<String>,
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub photos: Vec<PlacePhoto>,
    #[serde(default)]
    pub reviews: Vec<PlaceReview>,
    pub opening_hours: Option<OpeningHours>,
}

impl PlaceDetails {
    pub fn location(&self) -> Option<LatLng> {
        self.geometry.as_ref().and_then(|g| g.location)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacePhoto {
    pub photo_reference: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub html_attributions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceReview {
    #[serde(default)]
    pub author_name: String,
    pub rating: Option<f64>,
    #[serde(default)]
    pub text: String,
    pub relative_time_description: Option<String>,
    /// Seconds since the Unix epoch
    pub time: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub open_now: Option<bool>,
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

// =============================================================================
// Reports
// =============================================================================

/// Photo reference entry of a [`PhotoReport`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoReferenceEntry {
    pub reference: String,
    pub width: u32,
    pub height: u32,
    pub attributions: Vec<String>,
}

impl From<&PlacePhoto> for PhotoReferenceEntry {
    fn from(photo: &PlacePhoto) -> Self {
        Self {
            reference: photo.photo_reference.clone(),
            width: photo.width,
            height: photo.height,
            attributions: photo.html_attributions.clone(),
        }
    }
}

/// Photos fetched for one store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<i64>,
    pub store_name: String,
    pub slug: String,
    pub place_id: String,
    pub photo_count: usize,
    /// Ready-to-use photo URLs
    pub photos: Vec<String>,
    pub photo_references: Vec<PhotoReferenceEntry>,
    pub fetched_at: DateTime<Utc>,
}

/// Vendor data gathered for one store during bulk enrichment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceEnrichment {
    pub name: String,
    pub place_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_reviews: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    /// Canonical maps URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_url: Option<String>,
}
