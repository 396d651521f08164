//! Photos command: fetch photos for one store and write a report

use super::shared::{CommandStats, load_config, load_registry, setup_logging};
use crate::app::models::StoreDraft;
use crate::app::services::places::photos::write_photo_report;
use crate::app::services::places::{
    DraftPhotoOutcome, HttpPlacesClient, PhotoTarget, draft_photos_from_report, fetch_store_photos,
};
use crate::cli::args::PhotosArgs;
use crate::{Error, Result};
use colored::*;
use std::time::Instant;
use tracing::info;

pub async fn run_photos(args: PhotosArgs) -> Result<CommandStats> {
    let start_time = Instant::now();
    setup_logging(&args.log);
    args.validate()?;

    let config = load_config(None)?;
    let client = HttpPlacesClient::new(&config)?;
    let places_key = config.require_places_api_key()?;

    let mut registry = None;
    let target = match (&args.slug, &args.place_id) {
        (Some(slug), _) => {
            let loaded = load_registry(args.data_path.as_deref())?;
            let store = loaded
                .find_by_slug(slug)
                .ok_or_else(|| Error::store_not_found(slug.clone()))?;
            let target = PhotoTarget::from_store(store)?;
            registry = Some(loaded);
            target
        }
        (None, Some(place_id)) => PhotoTarget::from_place_id(place_id.trim()),
        (None, None) => {
            return Err(Error::configuration("Either --slug or --place-id is required"));
        }
    };

    let mut stats = CommandStats::default();

    let Some(report) = fetch_store_photos(&client, &target, places_key).await? else {
        println!("{}", "No photos found".yellow());
        stats.stores_skipped = 1;
        stats.processing_time = start_time.elapsed();
        return Ok(stats);
    };

    let report_path = args.report_path();
    write_photo_report(&report_path, &report)?;
    stats.stores_processed = 1;
    stats.output_files.push(report_path);

    if let (Some(save_to), Some(mut registry), Some(store_id)) =
        (&args.save_to, registry, target.store_id)
    {
        let store = registry
            .get_store(store_id)
            .ok_or_else(|| Error::store_not_found(store_id.to_string()))?;
        let mut draft = StoreDraft::from(store);

        let outcome = draft_photos_from_report(&report, &mut draft, config.maps_api_key());
        println!("{}", outcome);

        if let DraftPhotoOutcome::Fetched(count) = outcome {
            registry.update_store(store_id, draft)?;
            registry.save_json_file(save_to)?;
            info!("Saved {} photo URLs for store {}", count, store_id);
            stats.output_files.push(save_to.clone());
        }
    }

    stats.processing_time = start_time.elapsed();
    if !args.log.quiet {
        stats.print_summary(&format!(
            "Fetched {} photos for {}",
            report.photo_count, report.store_name
        ));
    }
    Ok(stats)
}
