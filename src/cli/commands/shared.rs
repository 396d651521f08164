//! Shared components for CLI commands
//!
//! Logging setup, configuration and registry loading, progress bars and the
//! statistics every command reports.

use crate::app::services::store_registry::StoreRegistry;
use crate::cli::args::LogArgs;
use crate::config::Config;
use crate::Result;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Statistics reported by every command
#[derive(Debug, Clone, Default)]
pub struct CommandStats {
    /// Stores listed, written, imported, extracted or enriched
    pub stores_processed: usize,
    /// Rows, chunks or stores that were skipped
    pub stores_skipped: usize,
    /// Number of errors encountered
    pub errors_encountered: usize,
    /// Total processing time
    pub processing_time: Duration,
    /// Files written by the command
    pub output_files: Vec<PathBuf>,
}

impl CommandStats {
    /// Share of handled stores that were not skipped, as a percentage
    pub fn success_rate(&self) -> f64 {
        let total = self.stores_processed + self.stores_skipped;
        if total == 0 {
            0.0
        } else {
            (self.stores_processed as f64 / total as f64) * 100.0
        }
    }

    /// Print a short coloured summary to stdout
    pub fn print_summary(&self, title: &str) {
        println!("\n{}", title.bright_green().bold());
        println!(
            "  Stores:   {}",
            self.stores_processed.to_string().bright_white().bold()
        );
        if self.stores_skipped > 0 {
            println!(
                "  Skipped:  {}",
                self.stores_skipped.to_string().yellow().bold()
            );
            println!("  Success:  {:.1}%", self.success_rate());
        }
        if self.errors_encountered > 0 {
            println!(
                "  Errors:   {}",
                self.errors_encountered.to_string().bright_red().bold()
            );
        }
        for path in &self.output_files {
            println!("  Output:   {}", path.display());
        }
        println!("  Time:     {:.2}s", self.processing_time.as_secs_f64());
    }
}

/// Set up structured logging on stderr
///
/// Repeated calls keep the first subscriber.
pub fn setup_logging(args: &LogArgs) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("store_locator={}", log_level)));

    let initialized = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if initialized.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Load configuration from the environment, apply the array name override,
/// and validate it
pub fn load_config(array_name: Option<&str>) -> Result<Config> {
    let mut config = Config::from_env()?;
    if let Some(name) = array_name {
        config = config.with_store_array_name(name.trim());
    }
    config.validate()?;
    Ok(config)
}

/// Registry from a JSON file, or the bundled registry
pub fn load_registry(path: Option<&Path>) -> Result<StoreRegistry> {
    let registry = StoreRegistry::load_or_builtin(path)?;
    debug!("Registry loaded with {} stores", registry.store_count());
    Ok(registry)
}

/// Progress bar for sequential store processing, hidden when `visible` is false
pub fn create_progress_bar(total: u64, message: &str, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
