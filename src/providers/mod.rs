//! Providers Module - External Data Sources

pub mod supabase;

pub use supabase::*;
