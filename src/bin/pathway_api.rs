//! Athleto Pathway API Server
//!
//! Local REST API over the Supabase athlete and sponsorship tables.
//!
//! Usage:
//!   cargo run --bin pathway_api
//!
//! Environment:
//!   SUPABASE_URL   - Supabase project URL
//!   SUPABASE_KEY   - Supabase API key
//!   RUST_LOG       - Log level (default: info)
//!
//! Listens on 127.0.0.1:8080 only.

use athleto_pathway::api::{create_router, AppState};
use athleto_pathway::utils::constants::{APP_NAME, PATHWAY_HOST};
use athleto_pathway::{PathwayConfig, SupabaseClient};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let config = PathwayConfig::from_env();
    let client = SupabaseClient::new(&config)?;
    let state = Arc::new(AppState::new(client));

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", PATHWAY_HOST, config.port).parse()?;

    info!("🚀 {} API starting on http://{}", APP_NAME, addr);
    info!("");
    info!("Endpoints:");
    info!("  GET /v1/athletes      - Athlete records");
    info!("  GET /v1/sponsorships  - Sponsorship listings");
    info!("  GET /v1/health        - Health check");
    info!("");
    info!("Press Ctrl+C for graceful shutdown");

    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("👋 {} API shutdown complete", APP_NAME);

    Ok(())
}
