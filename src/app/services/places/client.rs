//! HTTP client for the places web service

use super::PlacesApi;
use crate::app::models::places::{
    FindPlaceResponse, PlaceCandidate, PlaceDetails, PlaceDetailsResponse,
};
use crate::config::Config;
use crate::constants::{FIND_PLACE_FIELDS, places_status};
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

/// [`PlacesApi`] backed by the vendor's JSON endpoints
#[derive(Debug, Clone)]
pub struct HttpPlacesClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpPlacesClient {
    /// Build a client from configuration
    ///
    /// Fails when the server-side credential is not configured.
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.require_places_api_key()?.to_string();

        let client = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .user_agent(concat!("store-locator/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::http("Failed to build HTTP client", e))?;

        Ok(Self {
            client,
            base_url: config.places_base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {} {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| Error::http(format!("Request to {} failed", path), e))?
            .error_for_status()
            .map_err(|e| Error::http(format!("{} returned an error status", path), e))?;

        response
            .json::<T>()
            .await
            .map_err(|e| Error::http(format!("Failed to decode {} response", path), e))
    }
}

impl PlacesApi for HttpPlacesClient {
    async fn find_place(&self, query: &str) -> Result<Option<PlaceCandidate>> {
        let response: FindPlaceResponse = self
            .get_json(
                "findplacefromtext/json",
                &[
                    ("input", query),
                    ("inputtype", "textquery"),
                    ("fields", FIND_PLACE_FIELDS),
                ],
            )
            .await?;

        first_candidate(response)
    }

    async fn place_details(&self, place_id: &str, fields: &str) -> Result<Option<PlaceDetails>> {
        let response: PlaceDetailsResponse = self
            .get_json("details/json", &[("place_id", place_id), ("fields", fields)])
            .await?;

        details_result(response)
    }
}

/// Interpret a "find place" response: first candidate, nothing, or an error
pub(crate) fn first_candidate(response: FindPlaceResponse) -> Result<Option<PlaceCandidate>> {
    match response.status.as_str() {
        places_status::OK => Ok(response.candidates.into_iter().next()),
        places_status::ZERO_RESULTS => Ok(None),
        _ => Err(Error::places_status(response.status, response.error_message)),
    }
}

/// Interpret a "place details" response
pub(crate) fn details_result(response: PlaceDetailsResponse) -> Result<Option<PlaceDetails>> {
    match response.status.as_str() {
        places_status::OK => Ok(response.result),
        places_status::ZERO_RESULTS => Ok(None),
        _ => Err(Error::places_status(response.status, response.error_message)),
    }
}
