//! hostecho: report the host network name over HTTP.
//!
//! This is the application entry point. It initializes tracing, loads the
//! optional TOML configuration, applies CLI overrides, builds the Axum router
//! and runs the HTTP server until a shutdown signal arrives.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hostecho::config::{AppConfig, DEFAULT_LOG_FILTER};
use hostecho::http::start_server;
use hostecho::{create_router, AppState};

/// hostecho: answers with the network name of the machine it runs on
#[derive(Parser, Debug)]
#[command(name = "hostecho", version, about)]
struct Args {
    /// Path to an optional configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Address to bind (overrides http.host)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides http.port)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "hostecho=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Config first so logging.format can pick the formatter
    let config =
        AppConfig::load_or_default(args.config.as_deref())?.with_overrides(args.host, args.port);

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        config_file = args.config.as_deref().unwrap_or("<defaults>"),
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    let state = AppState::new();
    let app = create_router(state);

    start_server(app, &config).await?;

    tracing::info!("Server stopped");
    Ok(())
}
