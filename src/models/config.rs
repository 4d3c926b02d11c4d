//! Configuration module for the Pathway data loader
//!
//! Values are read once from the environment (after an optional `.env`
//! override file) into an owned `PathwayConfig`. Nothing re-reads the
//! environment afterwards.

use std::fmt;
use tracing::{debug, info};

use crate::utils::constants::{
    mask_secret, ENV_OPENAI_API_KEY, ENV_SUPABASE_KEY, ENV_SUPABASE_URL, PATHWAY_PORT,
};

/// Settings shared by the CLI and the local API server
#[derive(Clone, PartialEq, Eq)]
pub struct PathwayConfig {
    /// Supabase project base URL
    pub supabase_url: String,
    /// Supabase API key
    pub supabase_key: String,
    /// Reserved for the AI integration; no fetch path reads it
    pub openai_api_key: String,
    /// Port of the local API server (always `PATHWAY_PORT`)
    pub port: u16,
}

impl PathwayConfig {
    /// Load from the process environment.
    ///
    /// A `.env` file in the working directory is loaded into the process
    /// environment first when present. Variables already set are kept.
    /// Unset variables become empty strings; nothing is validated.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment overrides from {}", path.display()),
            Err(e) if e.not_found() => debug!("No .env file found"),
            Err(e) => debug!("Ignoring unreadable .env file: {}", e),
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            supabase_url: lookup(ENV_SUPABASE_URL).unwrap_or_default(),
            supabase_key: lookup(ENV_SUPABASE_KEY).unwrap_or_default(),
            openai_api_key: lookup(ENV_OPENAI_API_KEY).unwrap_or_default(),
            port: PATHWAY_PORT,
        };

        if !config.supabase_key.is_empty() {
            info!("🔑 SUPABASE_KEY configured (key hidden for security)");
        }

        config
    }
}

impl fmt::Debug for PathwayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathwayConfig")
            .field("supabase_url", &self.supabase_url)
            .field("supabase_key", &mask_secret(&self.supabase_key))
            .field("openai_api_key", &mask_secret(&self.openai_api_key))
            .field("port", &self.port)
            .finish()
    }
}
