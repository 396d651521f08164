//! Configuration management and validation.
//!
//! Layered configuration for the store locator: built-in defaults, then
//! environment variables, then command-line overrides. Credentials are held
//! as optional values so that each operation can decide whether a missing key
//! is fatal (the places scripts) or merely disables a feature (map embeds and
//! draft photo fetches).

use crate::constants::{
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_REQUEST_DELAY_MS, DEFAULT_STORE_ARRAY_NAME,
    ENV_MAPS_API_KEY, ENV_PLACES_API_KEY, ENV_REQUEST_DELAY_MS, PLACES_API_BASE_URL,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Runtime configuration for the store locator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server-side places API credential (required by the places scripts)
    #[serde(skip_serializing)]
    pub places_api_key: Option<String>,

    /// Client-exposed maps credential (enables embeds and draft photo URLs)
    #[serde(skip_serializing)]
    pub maps_api_key: Option<String>,

    /// Base URL of the places web service
    pub places_base_url: String,

    /// Minimum interval between stores during bulk enrichment, in milliseconds
    pub request_delay_ms: u64,

    /// HTTP request timeout in seconds
    pub http_timeout_secs: u64,

    /// Name of the exported store array in TypeScript sources
    pub store_array_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            places_api_key: None,
            maps_api_key: None,
            places_base_url: PLACES_API_BASE_URL.to_string(),
            request_delay_ms: DEFAULT_REQUEST_DELAY_MS,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            store_array_name: DEFAULT_STORE_ARRAY_NAME.to_string(),
        }
    }
}

impl Config {
    /// Load defaults overlaid with environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load defaults overlaid with values from an arbitrary lookup
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        config.places_api_key = get(ENV_PLACES_API_KEY);
        config.maps_api_key = get(ENV_MAPS_API_KEY);

        if let Some(delay) = get(ENV_REQUEST_DELAY_MS) {
            config.request_delay_ms = delay.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a whole number of milliseconds, got '{}'",
                    ENV_REQUEST_DELAY_MS, delay
                ))
            })?;
        }

        debug!(
            "Configuration loaded: places key {}, maps key {}, delay {}ms",
            if config.places_api_key.is_some() { "set" } else { "missing" },
            if config.maps_api_key.is_some() { "set" } else { "missing" },
            config.request_delay_ms
        );

        Ok(config)
    }

    /// Set the server-side places credential
    pub fn with_places_api_key(mut self, key: impl Into<String>) -> Self {
        self.places_api_key = Some(key.into());
        self
    }

    /// Set the client maps credential
    pub fn with_maps_api_key(mut self, key: impl Into<String>) -> Self {
        self.maps_api_key = Some(key.into());
        self
    }

    /// Set the delay between enrichment requests
    pub fn with_request_delay_ms(mut self, delay_ms: u64) -> Self {
        self.request_delay_ms = delay_ms;
        self
    }

    /// Point the places client at a different base URL
    pub fn with_places_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.places_base_url = base_url.into();
        self
    }

    /// Set the name of the exported array to extract
    pub fn with_store_array_name(mut self, name: impl Into<String>) -> Self {
        self.store_array_name = name.into();
        self
    }

    /// Server credential, or a fatal error when it is absent
    pub fn require_places_api_key(&self) -> Result<&str> {
        self.places_api_key
            .as_deref()
            .ok_or_else(|| Error::missing_credential(ENV_PLACES_API_KEY))
    }

    /// Client credential if configured
    pub fn maps_api_key(&self) -> Option<&str> {
        self.maps_api_key.as_deref()
    }

    /// Delay between enrichment requests
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// HTTP request timeout
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !self.places_base_url.starts_with("http://") && !self.places_base_url.starts_with("https://") {
            return Err(Error::configuration(format!(
                "Places base URL must be http(s), got '{}'",
                self.places_base_url
            )));
        }

        if self.http_timeout_secs == 0 {
            return Err(Error::configuration("HTTP timeout must be greater than zero"));
        }

        if self.store_array_name.trim().is_empty() {
            return Err(Error::configuration("Store array name cannot be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.request_delay_ms, 200);
        assert_eq!(config.store_array_name, "STORES");
        assert!(config.places_api_key.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_layer_reads_credentials_and_delay() {
        let config = Config::from_lookup(lookup_from(&[
            ("GOOGLE_PLACES_API_KEY", "server-key"),
            ("GOOGLE_MAPS_API_KEY", "client-key"),
            ("STORE_LOCATOR_REQUEST_DELAY_MS", "50"),
        ]))
        .unwrap();

        assert_eq!(config.require_places_api_key().unwrap(), "server-key");
        assert_eq!(config.maps_api_key(), Some("client-key"));
        assert_eq!(config.request_delay(), Duration::from_millis(50));
    }

    #[test]
    fn test_blank_credential_is_missing() {
        let config = Config::from_lookup(lookup_from(&[("GOOGLE_PLACES_API_KEY", "  ")])).unwrap();
        let error = config.require_places_api_key().unwrap_err();
        assert!(matches!(error, Error::MissingCredential { .. }));
        assert!(error.is_fatal());
    }

    #[test]
    fn test_invalid_delay_rejected() {
        let result = Config::from_lookup(lookup_from(&[("STORE_LOCATOR_REQUEST_DELAY_MS", "fast")]));
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let config = Config::default().with_places_base_url("ftp://example.com");
        assert!(config.validate().is_err());
    }
}
