//! API Request Handlers

use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use super::types::*;
use crate::models::errors::AppError;
use crate::models::types::{Table, TableResponse};
use crate::providers::supabase::SupabaseClient;
use crate::utils::constants::APP_VERSION;

type ApiResult = Result<Json<ApiResponse<Value>>, (StatusCode, Json<ApiResponse<()>>)>;

/// Shared application state
pub struct AppState {
    pub supabase: SupabaseClient,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(supabase: SupabaseClient) -> Self {
        Self {
            supabase,
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

// ============================================
// Health Check
// ============================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthData>> {
    let start = Instant::now();

    let data = HealthData {
        status: "healthy".to_string(),
        version: APP_VERSION.to_string(),
        uptime_seconds: state.uptime_seconds(),
    };

    Json(ApiResponse::success(
        data,
        start.elapsed().as_secs_f64() * 1000.0,
    ))
}

// ============================================
// Table Reads
// ============================================

pub async fn get_athletes(State(state): State<Arc<AppState>>) -> ApiResult {
    serve_table(&state, Table::Athletes).await
}

pub async fn get_sponsorships(State(state): State<Arc<AppState>>) -> ApiResult {
    serve_table(&state, Table::Sponsorships).await
}

async fn serve_table(state: &AppState, table: Table) -> ApiResult {
    let start = Instant::now();

    let err = match state.supabase.fetch_table(table).await {
        Ok(TableResponse::Records(body)) => {
            let latency = start.elapsed().as_secs_f64() * 1000.0;
            info!("✅ Served '{}' in {:.1}ms", table, latency);
            return Ok(Json(ApiResponse::success(body, latency)));
        }
        Ok(TableResponse::Rejected { status }) => AppError::upstream_rejected(table.as_str(), status),
        Err(e) => e,
    };

    warn!("❌ Failed to serve '{}': {}", table, err);
    let status = StatusCode::from_u16(err.code.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    Err((
        status,
        Json(ApiResponse::error(
            ApiError::from(&err),
            start.elapsed().as_secs_f64() * 1000.0,
        )),
    ))
}
