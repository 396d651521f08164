use clap::Parser;
use std::process;
use store_locator::cli::{args::Args, commands};

fn main() {
    let args = Args::parse();

    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // Dropping the command future on CTRL+C discards any unwritten results
        let shutdown_signal = async {
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            result = commands::run(args) => result,
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(store_locator::Error::processing_interrupted(
                    "Interrupted by user",
                ))
            }
        }
    });

    match result {
        Ok(_stats) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Store Locator - registry, CSV and places API toolkit");
    println!("====================================================");
    println!();
    println!("USAGE:");
    println!("    store-locator <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    stores      Browse and search the store registry");
    println!("    export      Export the registry as CSV");
    println!("    import      Import stores from a CSV file");
    println!("    extract     Extract store records from a TypeScript source file");
    println!("    photos      Fetch photos for one store from the places API");
    println!("    enrich      Look up every store of a source file in the places API");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("ENVIRONMENT:");
    println!("    GOOGLE_PLACES_API_KEY            Server key, required by photos and enrich");
    println!("    GOOGLE_MAPS_API_KEY              Client key, enables map embeds and photo URLs");
    println!("    STORE_LOCATOR_REQUEST_DELAY_MS   Delay between stores during enrich (default 200)");
    println!();
    println!("EXAMPLES:");
    println!("    store-locator stores list --query \"north bengaluru\"");
    println!("    store-locator stores show hesaraghatta-road-bengaluru");
    println!("    store-locator export --output stores.csv");
    println!("    store-locator import stores.csv --save stores.json");
    println!("    store-locator enrich src/data/stores.ts --output results.json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    store-locator <COMMAND> --help");
}
