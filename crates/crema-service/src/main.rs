//! Crema Service - Synthetic espresso telemetry over HTTP.
//!
//! Run with: `cargo run -p crema-service`

use std::path::PathBuf;

use axum::Router;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crema_core::ShotGenerator;
use crema_service::{AppState, Config, api};
use crema_store::ShotStore;

/// Crema Service - Synthetic espresso telemetry and HTTP REST API.
#[derive(Parser, Debug)]
#[command(name = "crema-service")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address (overrides config).
    #[arg(short, long)]
    bind: Option<String>,

    /// Number of shots to generate at startup (overrides config).
    #[arg(long)]
    shots: Option<usize>,

    /// Generator seed (overrides config).
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug-level logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("crema_service={}", level).parse()?)
                .add_directive(format!("crema_store={}", level).parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    // Load configuration
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            Config::load(path)?
        }
        None => Config::load_default().unwrap_or_default(),
    };

    // Override config with CLI args
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if let Some(shots) = args.shots {
        config.dataset.shots = shots;
    }
    if let Some(seed) = args.seed {
        config.dataset.seed = seed;
    }

    config.validate()?;

    // Generate the startup dataset
    info!(
        "Generating {} shots with seed {}",
        config.dataset.shots, config.dataset.seed
    );
    let shots = ShotGenerator::new(config.dataset.seed).generate(config.dataset.shots);
    let store = ShotStore::with_shots(shots);

    // Create application state
    let state = AppState::new(store);

    // Build the router
    let app = Router::new()
        .merge(api::router())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    info!("Starting server on {}", config.server.bind);

    // Run the server. Binding the raw string resolves hostname:port forms
    // that pass config validation, not just IP literals.
    let listener = tokio::net::TcpListener::bind(config.server.bind.as_str()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
