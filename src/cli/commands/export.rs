//! Export command: write the registry as CSV

use super::shared::{CommandStats, load_registry, setup_logging};
use crate::Result;
use crate::app::services::store_csv::{default_export_file_name, write_csv_file};
use crate::cli::args::ExportArgs;
use chrono::Local;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

pub async fn run_export(args: ExportArgs) -> Result<CommandStats> {
    let start_time = Instant::now();
    setup_logging(&args.log);

    let registry = load_registry(args.data_path.as_deref())?;
    let output_path = args
        .output_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(default_export_file_name(Local::now().date_naive())));

    write_csv_file(&output_path, registry.stores())?;
    info!(
        "Exported {} stores to {}",
        registry.store_count(),
        output_path.display()
    );

    let stats = CommandStats {
        stores_processed: registry.store_count(),
        processing_time: start_time.elapsed(),
        output_files: vec![output_path],
        ..CommandStats::default()
    };

    if !args.log.quiet {
        stats.print_summary("Export complete");
    }
    Ok(stats)
}
