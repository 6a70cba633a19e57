//! Scribemarket - Application entry point
//!
//! CLI-based entry point that dispatches to various commands.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scribemarket::{
    cli::{Cli, Commands},
    commands,
    config::Config,
    services::Services,
    store::InMemoryCatalog,
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration; a --seed flag overrides the environment
    let mut config = Config::from_env();
    if cli.seed.is_some() {
        config.seed_path = cli.seed;
    }
    tracing::debug!("Configuration loaded");

    // Seed the catalog and wire services
    let catalog = match InMemoryCatalog::load(&config) {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            tracing::error!("Failed to load seed data: {}", e.user_message());
            std::process::exit(1);
        }
    };
    let services = Services::from_catalog(catalog.clone());

    // Execute command
    let result = match cli.command {
        Commands::Login(args) => commands::session::execute_login(args, &services).await,
        Commands::Signup(args) => commands::session::execute_signup(args, &services).await,
        Commands::Applications(args) => commands::applications::execute(args, &services).await,
        Commands::Projects(args) => commands::projects::execute(args, catalog).await,
        Commands::Stats(args) => commands::stats::execute(args, &services, &config).await,
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!(code = e.code(), "Command failed: {}", e.user_message());
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
