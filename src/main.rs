//! Athleto Pathway - Supabase data loader
//!
//! Fetches the athlete and sponsorship tables and prints each as one line of
//! JSON on stdout. Logs go to stderr.
//!
//! Environment:
//!   SUPABASE_URL   - Supabase project URL
//!   SUPABASE_KEY   - Supabase API key
//!   RUST_LOG       - Log level (default: info)

use athleto_pathway::{PathwayConfig, SupabaseClient};

use eyre::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let config = PathwayConfig::from_env();
    info!("🚀 Loading Pathway data from {}", config.supabase_url);

    let client = SupabaseClient::new(&config)?;

    let athletes = client.fetch_athlete_data().await?;
    println!("{}", athletes);

    let sponsorships = client.fetch_sponsorships().await?;
    println!("{}", sponsorships);

    Ok(())
}
