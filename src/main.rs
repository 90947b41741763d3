//! Sahayak: a multilingual assistant for an internship database
//!
//! This is the main entry point for the application.

use anyhow::Result;
use clap::Parser;
use sahayak::{
    config,
    network::HttpClient,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter};

/// Ask questions about internships in any language
#[derive(Debug, Parser)]
#[command(name = "sahayak", version, about)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Server port, overrides the configuration
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over the debug setting
    let env_filter = EnvFilter::try_from_default_env().ok();
    let explicit_filter = env_filter.is_some();
    let (filter, filter_handle) =
        reload::Layer::new(env_filter.unwrap_or_else(|| EnvFilter::new("info")));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();

    // Load configuration
    let mut settings = config::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        settings.server.port = port;
    }
    if settings.general.debug && !explicit_filter {
        filter_handle.modify(|f| *f = EnvFilter::new("debug"))?;
    }

    info!("Starting Sahayak v{}", sahayak::VERSION);
    info!("Loaded configuration for instance: {}", settings.general.instance_name);
    if settings.llm.api_key.is_none() {
        info!("No language model API key configured, requests are sent unauthenticated");
    }

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;
    info!("HTTP client initialized");

    // Create application state
    let state = AppState::new(settings.clone(), client)?;
    info!("Application state initialized");

    // Create router
    let app = create_router(state);

    // Bind address
    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    info!("Starting server on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
