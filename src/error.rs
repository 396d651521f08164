//! Error handling for store locator operations.
//!
//! Provides error types with context for CSV import/export, source
//! extraction, places API calls and configuration failures.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for the store locator
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// HTTP transport failure talking to the places API
    #[error("HTTP request failed: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// Places API answered with a non-OK status
    #[error("Places API returned status {status}{}", status_detail(.message))]
    PlacesStatus {
        status: String,
        message: Option<String>,
    },

    /// A required credential is not configured
    #[error("{variable} environment variable is not set")]
    MissingCredential { variable: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Source text could not be parsed into store records
    #[error("Extraction failed for {path}: {reason}")]
    Extraction { path: PathBuf, reason: String },

    /// Store record failed a registry invariant
    #[error("Store validation error: {message}")]
    StoreValidation { message: String },

    /// Store not found
    #[error("Store not found: {key}")]
    StoreNotFound { key: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

fn status_detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a JSON error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create an HTTP error with context
    pub fn http(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            message: message.into(),
            source,
        }
    }

    /// Create a places status error
    pub fn places_status(status: impl Into<String>, message: Option<String>) -> Self {
        Self::PlacesStatus {
            status: status.into(),
            message,
        }
    }

    /// Create a missing credential error
    pub fn missing_credential(variable: impl Into<String>) -> Self {
        Self::MissingCredential {
            variable: variable.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an extraction error
    pub fn extraction(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Extraction {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a store validation error
    pub fn store_validation(message: impl Into<String>) -> Self {
        Self::StoreValidation {
            message: message.into(),
        }
    }

    /// Create a store not found error
    pub fn store_not_found(key: impl Into<String>) -> Self {
        Self::StoreNotFound { key: key.into() }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// Whether this error should abort a whole batch rather than one item
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::MissingCredential { .. }
                | Self::Configuration { .. }
                | Self::ProcessingInterrupted { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Http {
            message: "Request to places API failed".to_string(),
            source: error,
        }
    }
}
