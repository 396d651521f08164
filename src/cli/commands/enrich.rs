//! Enrich command: look up every store of a source file in the places API

use super::shared::{CommandStats, create_progress_bar, load_config, setup_logging};
use crate::Result;
use crate::app::services::places::enrichment::write_enrichment_results;
use crate::app::services::places::{FixedIntervalGate, HttpPlacesClient, enrich_stores};
use crate::app::services::store_extractor::StoreExtractor;
use crate::cli::args::EnrichArgs;
use std::time::Instant;
use tracing::info;

pub async fn run_enrich(args: EnrichArgs) -> Result<CommandStats> {
    let start_time = Instant::now();
    setup_logging(&args.log);
    args.validate()?;

    let mut config = load_config(args.array_name.as_deref())?;
    if let Some(delay_ms) = args.delay_ms {
        config = config.with_request_delay_ms(delay_ms);
    }
    let client = HttpPlacesClient::new(&config)?;

    let extractor = StoreExtractor::new(&config.store_array_name)?;
    let extraction = extractor.extract_file(&args.source_path)?;
    info!(
        "Found {} stores in {}",
        extraction.stores.len(),
        args.source_path.display()
    );

    let pb = create_progress_bar(
        extraction.stores.len() as u64,
        "Enriching stores",
        args.log.show_progress(),
    );
    let mut gate = FixedIntervalGate::new(config.request_delay());
    let result = enrich_stores(&client, &extraction.stores, &mut gate, Some(&pb)).await?;
    pb.finish_and_clear();

    write_enrichment_results(&args.output_path, &result.results)?;

    let stats = CommandStats {
        stores_processed: result.stats.enriched,
        stores_skipped: result.stats.not_found + result.stats.failed + extraction.chunks_skipped,
        errors_encountered: result.stats.failed,
        processing_time: start_time.elapsed(),
        output_files: vec![args.output_path.clone()],
    };

    if !args.log.quiet {
        stats.print_summary(&format!(
            "Enriched {} of {} stores",
            result.stats.enriched, result.stats.stores_total
        ));
    }
    Ok(stats)
}
