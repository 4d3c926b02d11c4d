//! Constants Module - Single Source of Truth
//!
//! Environment variable names, REST paths and the fixed API port.
//! Other modules must not hardcode these values.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "athleto-pathway";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent for outgoing HTTP requests
pub const USER_AGENT: &str = concat!("athleto-pathway/", env!("CARGO_PKG_VERSION"));

// ============================================
// ENVIRONMENT VARIABLES
// ============================================

/// Supabase project base URL
pub const ENV_SUPABASE_URL: &str = "SUPABASE_URL";

/// Supabase API key (sent as `apikey` and as a bearer token)
pub const ENV_SUPABASE_KEY: &str = "SUPABASE_KEY";

/// OpenAI/Gemini key, reserved for the AI integration
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

// ============================================
// SUPABASE REST
// ============================================

/// Path prefix of the PostgREST endpoint
pub const REST_PREFIX: &str = "/rest/v1";

/// Header carrying the raw API key
pub const APIKEY_HEADER: &str = "apikey";

/// Athlete profiles table
pub const ATHLETES_TABLE: &str = "athletes";

/// Sponsorship listings table
pub const SPONSORSHIPS_TABLE: &str = "sponsorships";

// ============================================
// PATHWAY API
// ============================================

/// Port of the local Pathway API server. Not read from the environment.
pub const PATHWAY_PORT: u16 = 8080;

/// Bind address of the local Pathway API server (loopback only)
pub const PATHWAY_HOST: &str = "127.0.0.1";

/// Mask a secret for logging: keeps the first 4 chars of long values only
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "<unset>".to_string();
    }
    if secret.chars().count() <= 8 {
        return "***HIDDEN***".to_string();
    }
    let prefix: String = secret.chars().take(4).collect();
    format!("{}***HIDDEN***", prefix)
}
