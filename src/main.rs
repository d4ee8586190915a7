//! Greeter: a minimal HTTP greeting service.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from a TOML file, builds the Axum router, and starts the
//! HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greeter::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER, LOG_FORMAT_JSON};
use greeter::http::start_server;
use greeter::routes::create_router;

/// Greeter: a minimal HTTP greeting service
#[derive(Parser, Debug)]
#[command(name = "greeter", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "greeter=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration first so the log format setting is honored
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.format == LOG_FORMAT_JSON {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        config = %args.config,
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    // Create router
    let app = create_router();

    // Start server; blocks until shutdown
    start_server(app, &config).await?;

    Ok(())
}
