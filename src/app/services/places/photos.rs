//! Store photo fetching
//!
//! Two flows share the same details lookup: the photo report job writes a
//! JSON report for one store, and the admin form fills a draft's photo list.
//! A report already in hand can fill a draft without another lookup.

use super::PlacesApi;
use super::urls::{photo_url, photo_urls};
use crate::app::models::places::{PhotoReferenceEntry, PhotoReport};
use crate::app::models::{Store, StoreDraft};
use crate::constants::{MAX_PHOTOS_PER_STORE, PHOTO_DETAIL_FIELDS};
use crate::{Error, Result};
use chrono::Utc;
use std::fmt;
use std::path::Path;
use tracing::{error, info, warn};

/// Store identity carried into a photo report
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoTarget {
    pub store_id: Option<i64>,
    pub store_name: String,
    pub slug: String,
    pub place_id: String,
}

impl PhotoTarget {
    /// Target for a registry store; the store must carry a place id
    pub fn from_store(store: &Store) -> Result<Self> {
        let place_id = store.place_id().ok_or_else(|| {
            Error::store_validation(format!("Store '{}' has no place id", store.slug))
        })?;

        Ok(Self {
            store_id: Some(store.id),
            store_name: store.name.clone(),
            slug: store.slug.clone(),
            place_id: place_id.to_string(),
        })
    }

    /// Target for a bare place id, named after the vendor's place name
    pub fn from_place_id(place_id: impl Into<String>) -> Self {
        Self {
            store_id: None,
            store_name: String::new(),
            slug: String::new(),
            place_id: place_id.into(),
        }
    }
}

/// Fetch up to ten photos for one store and build a report
///
/// Vendor failures are logged and yield `Ok(None)`; only fatal errors are
/// returned.
pub async fn fetch_store_photos<A: PlacesApi>(
    api: &A,
    target: &PhotoTarget,
    photo_key: &str,
) -> Result<Option<PhotoReport>> {
    info!("Fetching photos for place {}", target.place_id);

    let details = match api.place_details(&target.place_id, PHOTO_DETAIL_FIELDS).await {
        Ok(Some(details)) => details,
        Ok(None) => {
            warn!("No details returned for place {}", target.place_id);
            return Ok(None);
        }
        Err(e) if e.is_fatal() => return Err(e),
        Err(e) => {
            error!("Failed to fetch details for place {}: {}", target.place_id, e);
            return Ok(None);
        }
    };

    if details.photos.is_empty() {
        warn!("No photos available for place {}", target.place_id);
        return Ok(None);
    }

    let photos = photo_urls(&details.photos, photo_key);
    let photo_references: Vec<PhotoReferenceEntry> = details
        .photos
        .iter()
        .take(MAX_PHOTOS_PER_STORE)
        .map(PhotoReferenceEntry::from)
        .collect();

    let store_name = if target.store_name.is_empty() {
        details.name.clone().unwrap_or_default()
    } else {
        target.store_name.clone()
    };

    info!("Found {} photos for {}", photos.len(), store_name);

    Ok(Some(PhotoReport {
        store_id: target.store_id,
        store_name,
        slug: target.slug.clone(),
        place_id: target.place_id.clone(),
        photo_count: photos.len(),
        photos,
        photo_references,
        fetched_at: Utc::now(),
    }))
}

/// Write a photo report as pretty-printed JSON
pub fn write_photo_report(path: &Path, report: &PhotoReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| Error::json("Failed to encode photo report", e))?;
    std::fs::write(path, json)
        .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;

    info!("Photo report written to {}", path.display());
    Ok(())
}

/// What happened when filling a draft's photos
#[derive(Debug, Clone, PartialEq)]
pub enum DraftPhotoOutcome {
    Fetched(usize),
    NoPhotos,
    MissingPlaceId,
    FeatureDisabled,
    Failed(String),
}

impl fmt::Display for DraftPhotoOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetched(count) => write!(f, "Fetched {} photos", count),
            Self::NoPhotos => write!(f, "No photos found for this place"),
            Self::MissingPlaceId => write!(f, "Enter a place id first"),
            Self::FeatureDisabled => write!(f, "Photo fetch is disabled: maps key not configured"),
            Self::Failed(reason) => write!(f, "Photo fetch failed: {}", reason),
        }
    }
}

/// Fill a draft's photo list from its place id
///
/// The draft is modified only on [`DraftPhotoOutcome::Fetched`].
pub async fn fetch_draft_photos<A: PlacesApi>(
    api: &A,
    draft: &mut StoreDraft,
    maps_key: Option<&str>,
) -> DraftPhotoOutcome {
    let Some(place_id) = draft
        .place_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
    else {
        return DraftPhotoOutcome::MissingPlaceId;
    };

    let Some(maps_key) = maps_key else {
        return DraftPhotoOutcome::FeatureDisabled;
    };

    match api.place_details(place_id, PHOTO_DETAIL_FIELDS).await {
        Ok(Some(details)) if !details.photos.is_empty() => {
            let urls = photo_urls(&details.photos, maps_key);
            let count = urls.len();
            draft.photos = Some(urls);
            DraftPhotoOutcome::Fetched(count)
        }
        Ok(_) => DraftPhotoOutcome::NoPhotos,
        Err(e) => {
            warn!("Photo fetch for place {} failed: {}", place_id, e);
            DraftPhotoOutcome::Failed(e.to_string())
        }
    }
}

/// Fill a draft's photo list from a report that was already fetched
///
/// Photo URLs are rebuilt from the report's references with the maps key.
/// The draft is modified only on [`DraftPhotoOutcome::Fetched`].
pub fn draft_photos_from_report(
    report: &PhotoReport,
    draft: &mut StoreDraft,
    maps_key: Option<&str>,
) -> DraftPhotoOutcome {
    let Some(maps_key) = maps_key else {
        return DraftPhotoOutcome::FeatureDisabled;
    };

    if report.photo_references.is_empty() {
        return DraftPhotoOutcome::NoPhotos;
    }

    let urls: Vec<String> = report
        .photo_references
        .iter()
        .take(MAX_PHOTOS_PER_STORE)
        .map(|entry| photo_url(&entry.reference, maps_key))
        .collect();
    let count = urls.len();
    draft.photos = Some(urls);
    DraftPhotoOutcome::Fetched(count)
}
