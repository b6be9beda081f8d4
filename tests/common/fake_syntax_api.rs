//! Fake syntax-analysis API server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves `POST /v1/documents:analyzeSyntax`, records every
//! request (API key and JSON body) and answers with a configurable status,
//! body and delay.
//!
//! # Example
//!
//! ```rust,no_run
//! let api = FakeSyntaxApi::start().await.unwrap();
//! api.respond(200, SYNTAX_BLUE_WIDGETS).await;
//! let tagger = RemoteTagger::new(api.endpoint(), "test-key", Duration::from_secs(2))?;
//! ```

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

pub const ANALYZE_PATH: &str = "/v1/documents:analyzeSyntax";

/// One request as seen by the server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub key: Option<String>,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

struct ApiState {
    status: u16,
    body: String,
    delay: Duration,
    requests: Vec<RecordedRequest>,
}

impl Default for ApiState {
    fn default() -> Self {
        Self {
            status: 200,
            body: r#"{"tokens": []}"#.to_string(),
            delay: Duration::ZERO,
            requests: Vec::new(),
        }
    }
}

/// Handle to the running fake server.
pub struct FakeSyntaxApi {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeSyntaxApi {
    /// Start the server on a random port. Returns once it is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState::default()));

        let app = Router::new()
            .route(ANALYZE_PATH, post(analyze))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Full endpoint URL, ready for `RemoteTagger::new`.
    pub fn endpoint(&self) -> String {
        format!("http://{}{}", self.addr, ANALYZE_PATH)
    }

    /// Answer every later request with `status` and `body`.
    pub async fn respond(&self, status: u16, body: &str) {
        let mut state = self.state.lock().await;
        state.status = status;
        state.body = body.to_string();
    }

    /// Hold every later response for `delay`.
    pub async fn delay(&self, delay: Duration) {
        self.state.lock().await.delay = delay;
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().await.requests.clone()
    }
}

async fn analyze(
    State(state): State<Arc<Mutex<ApiState>>>,
    Query(query): Query<HashMap<String, String>>,
    headers: axum::http::HeaderMap,
    body: String,
) -> impl IntoResponse {
    let (status, response, delay) = {
        let mut state = state.lock().await;
        state.requests.push(RecordedRequest {
            key: query.get("key").cloned(),
            content_type: headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body: serde_json::from_str(&body).unwrap_or(serde_json::Value::Null),
        });
        (state.status, state.body.clone(), state.delay)
    };

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], response)
}
