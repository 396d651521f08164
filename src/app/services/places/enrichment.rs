//! Bulk enrichment of extracted stores
//!
//! For each store, in order: find the place from a free-text query, fetch
//! its details, and record rating, review count, coordinates and canonical
//! URL. Stores the vendor cannot find are skipped. A fixed interval separates
//! successive stores, and results are only written once the whole batch has
//! finished.

use super::rate_gate::FixedIntervalGate;
use super::PlacesApi;
use crate::app::models::places::PlaceEnrichment;
use crate::app::services::store_extractor::ExtractedStore;
use crate::constants::ENRICHMENT_DETAIL_FIELDS;
use crate::{Error, Result};
use indicatif::ProgressBar;
use std::path::Path;
use tracing::{debug, info, warn};

/// Counts for one enrichment run
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct EnrichmentStats {
    pub stores_total: usize,
    pub enriched: usize,

    /// Stores with no matching place
    pub not_found: usize,

    /// Stores whose lookup failed
    pub failed: usize,

    pub errors: Vec<String>,
}

impl EnrichmentStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success_rate(&self) -> f64 {
        if self.stores_total == 0 {
            0.0
        } else {
            (self.enriched as f64 / self.stores_total as f64) * 100.0
        }
    }
}

/// Enrichment output in input order, with run statistics
#[derive(Debug, Clone, Default)]
pub struct EnrichmentResult {
    pub results: Vec<PlaceEnrichment>,
    pub stats: EnrichmentStats,
}

/// Enrich stores one at a time, pausing between them at the gate interval
///
/// Per-store vendor failures are logged and counted; a fatal error aborts
/// the run.
pub async fn enrich_stores<A: PlacesApi>(
    api: &A,
    stores: &[ExtractedStore],
    gate: &mut FixedIntervalGate,
    progress: Option<&ProgressBar>,
) -> Result<EnrichmentResult> {
    let mut result = EnrichmentResult::default();
    result.stats.stores_total = stores.len();

    info!(
        "Enriching {} stores ({}ms between requests)",
        stores.len(),
        gate.interval().as_millis()
    );

    for store in stores {
        gate.wait().await;
        if let Some(pb) = progress {
            pb.set_message(store.name.clone());
        }

        match enrich_store(api, store).await {
            Ok(Some(enrichment)) => {
                debug!("Enriched {} -> {}", store.name, enrichment.place_id);
                result.results.push(enrichment);
                result.stats.enriched += 1;
            }
            Ok(None) => {
                info!("No place found for {}", store.name);
                result.stats.not_found += 1;
            }
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                warn!("Failed to enrich {}: {}", store.name, e);
                result.stats.failed += 1;
                result.stats.errors.push(format!("{}: {}", store.name, e));
            }
        }

        if let Some(pb) = progress {
            pb.inc(1);
        }
    }

    info!(
        "Enrichment complete: {} enriched, {} not found, {} failed",
        result.stats.enriched, result.stats.not_found, result.stats.failed
    );

    Ok(result)
}

/// Look up a single store; `Ok(None)` when no place matches
pub async fn enrich_store<A: PlacesApi>(
    api: &A,
    store: &ExtractedStore,
) -> Result<Option<PlaceEnrichment>> {
    let Some(candidate) = api.find_place(&store.search_query()).await? else {
        return Ok(None);
    };

    let details = api
        .place_details(&candidate.place_id, ENRICHMENT_DETAIL_FIELDS)
        .await?
        .ok_or_else(|| {
            Error::places_status(
                "NOT_FOUND",
                Some(format!("no details for place {}", candidate.place_id)),
            )
        })?;

    let location = candidate.location().or_else(|| details.location());

    Ok(Some(PlaceEnrichment {
        name: store.name.clone(),
        place_id: candidate.place_id,
        rating: details.rating,
        total_reviews: details.user_ratings_total,
        lat: location.map(|l| l.lat),
        lng: location.map(|l| l.lng),
        google_url: details.url,
    }))
}

/// Write enrichment results as a pretty-printed JSON array
pub fn write_enrichment_results(path: &Path, results: &[PlaceEnrichment]) -> Result<()> {
    let json = serde_json::to_string_pretty(results)
        .map_err(|e| Error::json("Failed to encode enrichment results", e))?;
    std::fs::write(path, json)
        .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;

    info!("Wrote {} results to {}", results.len(), path.display());
    Ok(())
}
