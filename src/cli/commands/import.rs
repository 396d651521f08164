//! Import command: replace the registry with the stores of a CSV file

use super::shared::{CommandStats, setup_logging};
use crate::Result;
use crate::app::services::store_csv::read_csv_file;
use crate::app::services::store_registry::StoreRegistry;
use crate::cli::args::ImportArgs;
use std::time::Instant;
use tracing::{info, warn};

pub async fn run_import(args: ImportArgs) -> Result<CommandStats> {
    let start_time = Instant::now();
    setup_logging(&args.log);
    args.validate()?;

    let imported = read_csv_file(&args.input_path)?;
    for error in &imported.stats.errors {
        warn!("{}", error);
    }
    if imported.stats.short_rows > 0 {
        warn!(
            "{} rows had fewer columns than the header; missing fields left empty",
            imported.stats.short_rows
        );
    }

    let mut registry = StoreRegistry::new();
    let duplicates = registry.replace_all(imported.stores);

    info!(
        "Imported {} stores ({:.1}% of {} rows)",
        registry.store_count(),
        imported.stats.success_rate(),
        imported.stats.rows_read
    );

    let mut stats = CommandStats {
        stores_processed: registry.store_count(),
        stores_skipped: imported.stats.rows_skipped + duplicates,
        errors_encountered: imported.stats.errors.len(),
        ..CommandStats::default()
    };

    match &args.save_path {
        Some(path) => {
            registry.save_json_file(path)?;
            stats.output_files.push(path.clone());
        }
        None => info!("No --save path given; registry not written"),
    }

    stats.processing_time = start_time.elapsed();
    if !args.log.quiet {
        stats.print_summary("Import complete");
    }
    Ok(stats)
}
