//! Extract command: pull store records out of a TypeScript source file

use super::shared::{CommandStats, load_config, setup_logging};
use crate::app::services::store_extractor::StoreExtractor;
use crate::cli::args::ExtractArgs;
use crate::{Error, Result};
use colored::*;
use std::time::Instant;

pub async fn run_extract(args: ExtractArgs) -> Result<CommandStats> {
    let start_time = Instant::now();
    setup_logging(&args.log);
    args.validate()?;

    let config = load_config(args.array_name.as_deref())?;
    let extractor = StoreExtractor::new(&config.store_array_name)?;
    let extraction = extractor.extract_file(&args.source_path)?;

    let mut stats = CommandStats {
        stores_processed: extraction.stores.len(),
        stores_skipped: extraction.chunks_skipped,
        ..CommandStats::default()
    };

    match &args.output_path {
        Some(path) => {
            let json = serde_json::to_string_pretty(&extraction.stores)
                .map_err(|e| Error::json("Failed to encode extracted stores", e))?;
            std::fs::write(path, json)
                .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;
            stats.output_files.push(path.clone());
        }
        None if !args.log.quiet => {
            for store in &extraction.stores {
                println!(
                    "{}  {}  {}",
                    store.name.bright_white().bold(),
                    store.address,
                    store.city.cyan()
                );
            }
        }
        None => {}
    }

    stats.processing_time = start_time.elapsed();
    if !args.log.quiet {
        stats.print_summary(&format!(
            "Extracted {} of {} store objects",
            extraction.stores.len(),
            extraction.chunks_found
        ));
    }
    Ok(stats)
}
