//! Command implementations for the store locator CLI
//!
//! Each subcommand lives in its own module and returns [`CommandStats`].

pub mod enrich;
pub mod export;
pub mod extract;
pub mod import;
pub mod photos;
pub mod shared;
pub mod stores;

pub use shared::CommandStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Dispatch to the subcommand handler
pub async fn run(args: Args) -> Result<CommandStats> {
    match args.get_command()? {
        Commands::Stores(stores_args) => stores::run_stores(stores_args).await,
        Commands::Export(export_args) => export::run_export(export_args).await,
        Commands::Import(import_args) => import::run_import(import_args).await,
        Commands::Extract(extract_args) => extract::run_extract(extract_args).await,
        Commands::Photos(photos_args) => photos::run_photos(photos_args).await,
        Commands::Enrich(enrich_args) => enrich::run_enrich(enrich_args).await,
    }
}
