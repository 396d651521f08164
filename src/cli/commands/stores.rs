//! Stores command: list, search and show registry stores

use super::shared::{CommandStats, load_config, load_registry, setup_logging};
use crate::app::models::Store;
use crate::app::services::places::urls::store_embed_url;
use crate::app::services::store_registry::StoreRegistry;
use crate::cli::args::{OutputFormat, StoresAction, StoresArgs};
use crate::constants::ENV_MAPS_API_KEY;
use crate::{Error, Result};
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

pub async fn run_stores(args: StoresArgs) -> Result<CommandStats> {
    let start_time = Instant::now();
    setup_logging(&args.log);
    debug!("Stores arguments: {:?}", args);

    let config = load_config(None)?;
    let registry = load_registry(args.data_path.as_deref())?;

    let stores_shown = match &args.action {
        StoresAction::List { query, city } => {
            let stores = select_stores(&registry, query.as_deref(), city.as_deref());
            info!("{} of {} stores match", stores.len(), registry.store_count());
            print_store_list(&stores, args.output_format)?;
            stores.len()
        }
        StoresAction::Show { slug } => {
            let store = registry
                .find_by_slug(slug)
                .ok_or_else(|| Error::store_not_found(slug.clone()))?;
            let embed_url = match config.maps_api_key() {
                Some(key) => Some(store_embed_url(store, key)?),
                None => None,
            };
            print_store_detail(store, embed_url.as_deref(), args.output_format)?;
            1
        }
    };

    Ok(CommandStats {
        stores_processed: stores_shown,
        processing_time: start_time.elapsed(),
        ..CommandStats::default()
    })
}

/// Stores matching an optional query and an optional city, in registry order
pub fn select_stores<'a>(
    registry: &'a StoreRegistry,
    query: Option<&str>,
    city: Option<&str>,
) -> Vec<&'a Store> {
    let mut stores = registry.search(query.unwrap_or(""));
    if let Some(city) = city.map(str::trim).filter(|c| !c.is_empty()) {
        stores.retain(|store| store.city.eq_ignore_ascii_case(city));
    }
    stores
}

fn print_store_list(stores: &[&Store], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(stores)
                .map_err(|e| Error::json("Failed to encode store list", e))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            if stores.is_empty() {
                println!("{}", "No stores match".yellow());
                return Ok(());
            }
            for store in stores {
                println!(
                    "{:>4}  {}  {}  {}",
                    store.id,
                    store.name.bright_white().bold(),
                    store.city.cyan(),
                    store.slug.dimmed()
                );
            }
        }
    }
    Ok(())
}

fn print_store_detail(store: &Store, embed_url: Option<&str>, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&serde_json::json!({
            "store": store,
            "embedUrl": embed_url,
        }))
        .map_err(|e| Error::json("Failed to encode store", e))?;
        println!("{}", json);
        return Ok(());
    }

    println!("{}", store.name.bright_green().bold());
    println!("  {}", store.address);
    println!("  {}, {} {}", store.city, store.state, store.pincode);
    println!("  Phone:    {}", store.phone);
    println!("  Email:    {}", store.email);
    if let Some(hours) = &store.working_hours {
        println!("  Hours:    {}", hours);
    }
    if let Some(opened) = &store.opened_date {
        println!("  Opened:   {}", opened);
    }
    if !store.tags.is_empty() {
        println!("  Tags:     {}", store.tags.join(", "));
    }
    println!("  Location: {}, {}", store.lat, store.lng);
    if let Some(place_id) = store.place_id() {
        println!("  Place id: {}", place_id);
    }
    println!("  Photos:   {}", store.photo_urls().len());
    match embed_url {
        Some(url) => println!("  Map:      {}", url),
        None => println!(
            "  Map:      {}",
            format!("disabled ({} not set)", ENV_MAPS_API_KEY).yellow()
        ),
    }
    Ok(())
}
