//! Supabase REST Client
//!
//! Reads the `athletes` and `sponsorships` tables through the PostgREST
//! endpoint at `{SUPABASE_URL}/rest/v1/{table}`.
//!
//! Every request authenticates twice with the same key: once as the raw
//! `apikey` header and once as `Authorization: Bearer <key>`.
//!
//! Status 200 is the only success. `fetch_table` reports any other status as
//! `TableResponse::Rejected`; the two named fetchers collapse that into an
//! empty list. Transport failures are always returned as errors.
//! No retries, no pagination, reqwest's default timeout.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::models::config::PathwayConfig;
use crate::models::errors::{AppError, AppResult, ErrorCode};
use crate::models::types::{Table, TableResponse};
use crate::utils::constants::{APIKEY_HEADER, REST_PREFIX, USER_AGENT as USER_AGENT_CONST};

/// Supabase table reader
#[derive(Clone)]
pub struct SupabaseClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SupabaseClient {
    /// Create a client from loaded configuration
    pub fn new(config: &PathwayConfig) -> AppResult<Self> {
        let client = Self::build_client()?;

        Ok(Self {
            client,
            base_url: config
                .supabase_url
                .strip_suffix('/')
                .unwrap_or(&config.supabase_url)
                .to_string(),
            api_key: config.supabase_key.clone(),
        })
    }

    /// Build HTTP client with default headers (gzip enabled, HTTP/1.1 only)
    fn build_client() -> AppResult<reqwest::Client> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_CONST));

        reqwest::Client::builder()
            .default_headers(headers)
            .gzip(true)
            .http1_only()
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorCode::ClientBuildFailed, "Failed to build HTTP client", e)
            })
    }

    /// Full REST URL of a table
    pub fn resource_url(&self, table: Table) -> String {
        format!("{}{}/{}", self.base_url, REST_PREFIX, table.as_str())
    }

    /// GET a table, keeping the status code of rejected requests
    pub async fn fetch_table(&self, table: Table) -> AppResult<TableResponse> {
        let url = self.resource_url(table);
        debug!("🔍 Supabase: GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(APIKEY_HEADER, self.api_key.as_str())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            warn!("⚠️ Supabase returned HTTP {} for '{}'", status, table);
            return Ok(TableResponse::Rejected { status });
        }

        let body: Value = response.json().await?;
        match &body {
            Value::Array(rows) => info!("📊 Supabase: {} rows from '{}'", rows.len(), table),
            _ => info!("📊 Supabase: non-array body from '{}'", table),
        }

        Ok(TableResponse::Records(body))
    }

    /// Athlete records, or `[]` when Supabase does not answer 200
    pub async fn fetch_athlete_data(&self) -> AppResult<Value> {
        Ok(self.fetch_table(Table::Athletes).await?.into_records())
    }

    /// Sponsorship listings, or `[]` when Supabase does not answer 200
    pub async fn fetch_sponsorships(&self) -> AppResult<Value> {
        Ok(self.fetch_table(Table::Sponsorships).await?.into_records())
    }

    /// Base URL with the key never included
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
