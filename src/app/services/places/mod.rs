//! Places API integration
//!
//! Read-only access to the vendor's "find place from text", "place details"
//! and "place photo" endpoints, plus the two batch jobs built on them:
//! fetching photos for one store and enriching every store in a source file.
//!
//! ## Architecture
//!
//! - [`client`] - HTTP implementation of [`PlacesApi`]
//! - [`urls`] - Photo and map embed URL builders
//! - [`rate_gate`] - Fixed-interval gate between sequential requests
//! - [`photos`] - Photo report and admin draft photo fetch
//! - [`enrichment`] - Sequential bulk enrichment of extracted stores
//!
//! Requests are issued one at a time; nothing here runs concurrently.

use crate::Result;
use crate::app::models::places::{PlaceCandidate, PlaceDetails};

pub mod client;
pub mod enrichment;
pub mod photos;
pub mod rate_gate;
pub mod urls;

#[cfg(test)]
pub mod tests;

pub use client::HttpPlacesClient;
pub use enrichment::{EnrichmentResult, EnrichmentStats, enrich_stores};
pub use photos::{
    DraftPhotoOutcome, PhotoTarget, draft_photos_from_report, fetch_draft_photos, fetch_store_photos,
};
pub use rate_gate::FixedIntervalGate;

/// Operations the batch jobs need from the places service
#[allow(async_fn_in_trait)]
pub trait PlacesApi {
    /// First candidate for a free-text query
    ///
    /// `Ok(None)` when the vendor finds nothing; `Err` for any other non-OK
    /// status or transport failure.
    async fn find_place(&self, query: &str) -> Result<Option<PlaceCandidate>>;

    /// Details for a place, limited to a comma-separated field list
    async fn place_details(&self, place_id: &str, fields: &str) -> Result<Option<PlaceDetails>>;
}
