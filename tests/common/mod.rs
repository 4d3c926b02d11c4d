//! In-process mock of the Supabase PostgREST endpoint.
//!
//! Answers every `GET /rest/v1/:table` with a fixed status and body and
//! records the path and auth headers of each request.

#![allow(dead_code)]

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri, Version},
    routing::get,
    Router,
};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use athleto_pathway::{PathwayConfig, SupabaseClient};

pub const TEST_KEY: &str = "abc123";

/// One request as seen by the mock backend
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub apikey: Option<String>,
    pub authorization: Option<String>,
    pub version: Version,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockBackend {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    /// Start a backend answering every table read with `status` and `body`
    pub async fn start(status: u16, body: &str) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/rest/v1/:table", get(mock_table))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn config(&self) -> PathwayConfig {
        config_for(&self.base_url)
    }

    pub fn client(&self) -> SupabaseClient {
        SupabaseClient::new(&self.config()).unwrap()
    }
}

pub fn config_for(base_url: &str) -> PathwayConfig {
    let base_url = base_url.to_string();
    PathwayConfig::from_lookup(move |name| match name {
        "SUPABASE_URL" => Some(base_url.clone()),
        "SUPABASE_KEY" => Some(TEST_KEY.to_string()),
        _ => None,
    })
}

async fn mock_table(
    State(state): State<MockState>,
    uri: Uri,
    version: Version,
    headers: HeaderMap,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let header_str = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        apikey: header_str("apikey"),
        authorization: header_str("authorization"),
        version,
    });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}
