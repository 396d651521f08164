//! Shared test utilities and fixtures for places service tests

use crate::app::models::places::{Geometry, LatLng, PlaceCandidate, PlaceDetails, PlacePhoto};
use crate::app::services::places::PlacesApi;
use crate::{Error, Result};
use std::collections::HashMap;
use std::sync::Mutex;

mod rate_gate_tests;

/// In-memory [`PlacesApi`] that records every call
#[derive(Debug, Default)]
pub struct FakePlacesApi {
    pub candidates: HashMap<String, PlaceCandidate>,
    pub details: HashMap<String, PlaceDetails>,
    pub failing_queries: Vec<String>,
    pub calls: Mutex<Vec<String>>,
}

impl FakePlacesApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_candidate(mut self, query: &str, candidate: PlaceCandidate) -> Self {
        self.candidates.insert(query.to_string(), candidate);
        self
    }

    pub fn with_details(mut self, place_id: &str, details: PlaceDetails) -> Self {
        self.details.insert(place_id.to_string(), details);
        self
    }

    pub fn failing_on(mut self, query: &str) -> Self {
        self.failing_queries.push(query.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl PlacesApi for FakePlacesApi {
    async fn find_place(&self, query: &str) -> Result<Option<PlaceCandidate>> {
        self.calls.lock().unwrap().push(format!("find:{}", query));
        if self.failing_queries.iter().any(|q| q == query) {
            return Err(Error::places_status("REQUEST_DENIED", Some("quota".to_string())));
        }
        Ok(self.candidates.get(query).cloned())
    }

    async fn place_details(&self, place_id: &str, fields: &str) -> Result<Option<PlaceDetails>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("details:{}:{}", place_id, fields));
        Ok(self.details.get(place_id).cloned())
    }
}

/// Candidate with an optional location
pub fn create_test_candidate(place_id: &str, location: Option<(f64, f64)>) -> PlaceCandidate {
    PlaceCandidate {
        place_id: place_id.to_string(),
        formatted_address: None,
        geometry: location.map(|(lat, lng)| Geometry {
            location: Some(LatLng { lat, lng }),
        }),
    }
}

/// Photo with a predictable reference
pub fn create_test_photo(index: usize) -> PlacePhoto {
    PlacePhoto {
        photo_reference: format!("ref-{}", index),
        width: 4000,
        height: 3000,
        html_attributions: vec![format!("<a href=\"https://example.com/{}\">Author</a>", index)],
    }
}

/// Details carrying `photo_count` photos
pub fn create_details_with_photos(name: &str, photo_count: usize) -> PlaceDetails {
    PlaceDetails {
        name: Some(name.to_string()),
        photos: (0..photo_count).map(create_test_photo).collect(),
        ..PlaceDetails::default()
    }
}
