//! Command-line argument definitions for the store locator
//!
//! Defines the CLI interface using the clap derive API. Every subcommand
//! carries the same logging flags through [`LogArgs`].

use crate::constants::DEFAULT_ENRICHMENT_OUTPUT;
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the store locator toolkit
#[derive(Debug, Clone, Parser)]
#[command(
    name = "store-locator",
    version,
    about = "Manage a retail store registry and enrich it from the places API",
    long_about = "Browse and search the store registry, move it in and out of CSV, \
                  pull store records out of TypeScript source files, and look stores up \
                  in the places API for photos, ratings and coordinates."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Browse and search the store registry
    Stores(StoresArgs),
    /// Export the registry as CSV
    Export(ExportArgs),
    /// Import stores from a CSV file
    Import(ImportArgs),
    /// Extract store records from a TypeScript source file
    Extract(ExtractArgs),
    /// Fetch photos for one store from the places API
    Photos(PhotosArgs),
    /// Look up every store of a source file in the places API
    Enrich(EnrichArgs),
}

/// Logging flags shared by every subcommand
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct LogArgs {
    /// Increase logging verbosity
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl LogArgs {
    /// Log level derived from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Progress bars are hidden in quiet mode
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Output format for listings and reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON format for scripting
    Json,
}

/// Arguments for the stores command
#[derive(Debug, Clone, Parser)]
pub struct StoresArgs {
    #[command(subcommand)]
    pub action: StoresAction,

    /// Registry JSON file; the bundled registry is used when omitted
    #[arg(long = "data", value_name = "PATH", global = true, help = "Registry JSON file")]
    pub data_path: Option<PathBuf>,

    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        global = true,
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Registry browsing actions
#[derive(Debug, Clone, Subcommand)]
pub enum StoresAction {
    /// List stores, optionally filtered by a search query or city
    List {
        /// Case-insensitive match on name, city, address or tags
        #[arg(long = "query", value_name = "TEXT", help = "Search query")]
        query: Option<String>,

        #[arg(long = "city", value_name = "CITY", help = "Only stores in this city")]
        city: Option<String>,
    },
    /// Show one store by slug, with its map embed URL
    Show {
        #[arg(value_name = "SLUG", help = "Store slug")]
        slug: String,
    },
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    #[arg(long = "data", value_name = "PATH", help = "Registry JSON file")]
    pub data_path: Option<PathBuf>,

    /// Defaults to `stores-YYYY-MM-DD.csv` in the current directory
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "CSV file to write"
    )]
    pub output_path: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Arguments for the import command
#[derive(Debug, Clone, Parser)]
pub struct ImportArgs {
    #[arg(value_name = "CSV", help = "CSV file to import")]
    pub input_path: PathBuf,

    /// Write the imported registry as JSON; without it the import is a dry run
    #[arg(long = "save", value_name = "PATH", help = "Write the imported registry to this JSON file")]
    pub save_path: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Arguments for the extract command
#[derive(Debug, Clone, Parser)]
pub struct ExtractArgs {
    #[arg(value_name = "SOURCE", help = "TypeScript source file")]
    pub source_path: PathBuf,

    /// Defaults to `STORES`
    #[arg(
        long = "array-name",
        value_name = "NAME",
        help = "Name of the exported store array"
    )]
    pub array_name: Option<String>,

    #[arg(short = 'o', long = "output", value_name = "PATH", help = "Write extracted stores as JSON")]
    pub output_path: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Arguments for the photos command
#[derive(Debug, Clone, Parser)]
pub struct PhotosArgs {
    /// Registry store to fetch photos for
    #[arg(long = "slug", value_name = "SLUG", conflicts_with = "place_id", help = "Store slug")]
    pub slug: Option<String>,

    /// Fetch photos for a bare place id instead of a registry store
    #[arg(long = "place-id", value_name = "ID", help = "Place id")]
    pub place_id: Option<String>,

    #[arg(long = "data", value_name = "PATH", help = "Registry JSON file")]
    pub data_path: Option<PathBuf>,

    /// Defaults to `<slug>-photos.json`
    #[arg(short = 'o', long = "output", value_name = "PATH", help = "Photo report file")]
    pub output_path: Option<PathBuf>,

    /// Store the photo URLs on the registry store and write the registry here
    #[arg(
        long = "save-to",
        value_name = "PATH",
        requires = "slug",
        help = "Update the store's photos and write the registry to this JSON file"
    )]
    pub save_to: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Arguments for the enrich command
#[derive(Debug, Clone, Parser)]
pub struct EnrichArgs {
    #[arg(value_name = "SOURCE", help = "TypeScript source file")]
    pub source_path: PathBuf,

    /// Defaults to `STORES`
    #[arg(
        long = "array-name",
        value_name = "NAME",
        help = "Name of the exported store array"
    )]
    pub array_name: Option<String>,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = DEFAULT_ENRICHMENT_OUTPUT,
        help = "Results file"
    )]
    pub output_path: PathBuf,

    /// Overrides the configured delay between stores
    #[arg(long = "delay-ms", value_name = "MS", help = "Delay between stores in milliseconds")]
    pub delay_ms: Option<u64>,

    #[command(flatten)]
    pub log: LogArgs,
}

impl Args {
    /// Subcommand, or a configuration error when none was given
    pub fn get_command(&self) -> Result<Commands> {
        self.command
            .clone()
            .ok_or_else(|| Error::configuration("No command given"))
    }
}

impl Commands {
    pub fn log_args(&self) -> &LogArgs {
        match self {
            Commands::Stores(args) => &args.log,
            Commands::Export(args) => &args.log,
            Commands::Import(args) => &args.log,
            Commands::Extract(args) => &args.log,
            Commands::Photos(args) => &args.log,
            Commands::Enrich(args) => &args.log,
        }
    }
}

impl ImportArgs {
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.is_file() {
            return Err(Error::file_not_found(&self.input_path));
        }
        Ok(())
    }
}

impl ExtractArgs {
    pub fn validate(&self) -> Result<()> {
        validate_source(&self.source_path, self.array_name.as_deref())
    }
}

impl EnrichArgs {
    pub fn validate(&self) -> Result<()> {
        validate_source(&self.source_path, self.array_name.as_deref())
    }
}

impl PhotosArgs {
    /// Exactly one of `--slug` and `--place-id` must be given
    pub fn validate(&self) -> Result<()> {
        match (&self.slug, &self.place_id) {
            (None, None) => Err(Error::configuration(
                "Either --slug or --place-id is required",
            )),
            (Some(slug), _) if slug.trim().is_empty() => {
                Err(Error::configuration("--slug must not be empty"))
            }
            (_, Some(place_id)) if place_id.trim().is_empty() => {
                Err(Error::configuration("--place-id must not be empty"))
            }
            _ => Ok(()),
        }
    }

    /// Report path, defaulting to `<slug or place id>-photos.json`
    pub fn report_path(&self) -> PathBuf {
        if let Some(path) = &self.output_path {
            return path.clone();
        }
        let stem = self
            .slug
            .as_deref()
            .or(self.place_id.as_deref())
            .unwrap_or("store");
        PathBuf::from(format!("{}-photos.json", stem))
    }
}

fn validate_source(path: &std::path::Path, array_name: Option<&str>) -> Result<()> {
    if !path.is_file() {
        return Err(Error::file_not_found(path));
    }
    if array_name.is_some_and(|name| name.trim().is_empty()) {
        return Err(Error::configuration("--array-name must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_stores_list() {
        let args = Args::try_parse_from([
            "store-locator",
            "stores",
            "list",
            "--query",
            "north",
            "--output-format",
            "json",
        ])
        .unwrap();

        match args.get_command().unwrap() {
            Commands::Stores(stores) => {
                assert_eq!(stores.output_format, OutputFormat::Json);
                assert!(matches!(
                    stores.action,
                    StoresAction::List { query: Some(ref q), city: None } if q == "north"
                ));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_enrich_defaults() {
        let args = Args::try_parse_from(["store-locator", "enrich", "stores.ts"]).unwrap();

        match args.get_command().unwrap() {
            Commands::Enrich(enrich) => {
                assert_eq!(enrich.array_name, None);
                assert_eq!(enrich.output_path, PathBuf::from("store-places-results.json"));
                assert_eq!(enrich.delay_ms, None);
                assert_eq!(enrich.log.get_log_level(), "warn");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_log_levels() {
        let args = Args::try_parse_from(["store-locator", "export", "-vv"]).unwrap();
        let command = args.get_command().unwrap();
        assert_eq!(command.log_args().get_log_level(), "debug");

        let quiet = LogArgs {
            verbose: 0,
            quiet: true,
        };
        assert_eq!(quiet.get_log_level(), "error");
        assert!(!quiet.show_progress());
    }

    #[test]
    fn test_no_command_is_error() {
        let args = Args::try_parse_from(["store-locator"]).unwrap();
        assert!(args.get_command().is_err());
    }

    #[test]
    fn test_photos_requires_target() {
        let args = Args::try_parse_from(["store-locator", "photos"]).unwrap();
        let Commands::Photos(photos) = args.get_command().unwrap() else {
            panic!("expected photos command");
        };
        assert!(photos.validate().is_err());
    }

    #[test]
    fn test_photos_slug_and_place_id_conflict() {
        let result = Args::try_parse_from([
            "store-locator",
            "photos",
            "--slug",
            "a",
            "--place-id",
            "b",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_photos_report_path() {
        let args =
            Args::try_parse_from(["store-locator", "photos", "--slug", "hesaraghatta"]).unwrap();
        let Commands::Photos(photos) = args.get_command().unwrap() else {
            panic!("expected photos command");
        };
        assert_eq!(photos.report_path(), PathBuf::from("hesaraghatta-photos.json"));
    }

    #[test]
    fn test_extract_validates_source() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("stores.ts");

        let args = ExtractArgs {
            source_path: source.clone(),
            array_name: Some("STORES".to_string()),
            output_path: None,
            log: LogArgs::default(),
        };
        assert!(matches!(args.validate(), Err(Error::FileNotFound { .. })));

        std::fs::write(&source, "export const STORES: Store[] = [];").unwrap();
        assert!(args.validate().is_ok());
    }
}
