//! Athleto Pathway Library
//!
//! Loads Supabase credentials from the environment and reads the
//! `athletes` and `sponsorships` tables over the PostgREST API:
//! - `PathwayConfig`: one-shot environment/`.env` configuration
//! - `SupabaseClient`: table reads (200 → JSON body, anything else → `[]`)
//! - `api`: local HTTP server re-exposing the reads on port 8080

pub mod api;
pub mod models;
pub mod providers;
pub mod utils;

pub use models::{AppError, AppResult, ErrorCode, PathwayConfig, Table, TableResponse};
pub use providers::SupabaseClient;
