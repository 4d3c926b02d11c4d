//! Core data types for the Supabase fetcher

use serde_json::Value;
use std::fmt;

use crate::utils::constants::{ATHLETES_TABLE, SPONSORSHIPS_TABLE};

/// Supabase tables the fetcher reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Athletes,
    Sponsorships,
}

impl Table {
    /// Resource path segment under `/rest/v1`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Athletes => ATHLETES_TABLE,
            Self::Sponsorships => SPONSORSHIPS_TABLE,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a table fetch that reached Supabase.
///
/// Records are opaque JSON and passed through verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum TableResponse {
    /// HTTP 200 with the parsed body
    Records(Value),
    /// Any other status; the body is discarded
    Rejected { status: u16 },
}

impl TableResponse {
    /// Collapse into the body, or an empty JSON array when rejected
    pub fn into_records(self) -> Value {
        match self {
            Self::Records(body) => body,
            Self::Rejected { .. } => Value::Array(Vec::new()),
        }
    }
}
