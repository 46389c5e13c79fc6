//! Stub NEIS directory server.
//!
//! Serves canned JSON per endpoint (`/schoolInfo`, `/mealServiceDietInfo`, ..)
//! on a loopback port and records every query it receives.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tokio::task::JoinHandle;

/// What the stub answers for one endpoint.
#[derive(Debug, Clone)]
pub enum StubResponse {
    Json(Value),
    Status(u16),
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub endpoint: String,
    pub query: HashMap<String, String>,
}

#[derive(Default)]
struct StubState {
    responses: HashMap<String, StubResponse>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Running stub. The listener is aborted on drop.
pub struct StubDirectory {
    pub base_url: String,
    state: Arc<StubState>,
    handle: JoinHandle<()>,
}

impl StubDirectory {
    /// Unconfigured endpoints answer with the NEIS "no data" result.
    pub async fn spawn<I, K>(responses: I) -> Self
    where
        I: IntoIterator<Item = (K, StubResponse)>,
        K: Into<String>,
    {
        let state = Arc::new(StubState {
            responses: responses
                .into_iter()
                .map(|(endpoint, response)| (endpoint.into(), response))
                .collect(),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/{endpoint}", get(serve))
            .with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind stub directory");
        let addr = listener.local_addr().expect("stub directory has no address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub directory crashed");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
            handle,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Queries received for `endpoint`, oldest first.
    pub fn requests_to(&self, endpoint: &str) -> Vec<HashMap<String, String>> {
        self.requests()
            .into_iter()
            .filter(|request| request.endpoint == endpoint)
            .map(|request| request.query)
            .collect()
    }
}

impl Drop for StubDirectory {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// The body NEIS returns when a query matches nothing.
pub fn no_data() -> Value {
    json!({"RESULT": {"CODE": "INFO-200", "MESSAGE": "해당하는 데이터가 없습니다."}})
}

async fn serve(
    State(state): State<Arc<StubState>>,
    Path(endpoint): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state.requests.lock().unwrap().push(RecordedRequest {
        endpoint: endpoint.clone(),
        query,
    });
    match state.responses.get(&endpoint) {
        Some(StubResponse::Json(body)) => Json(body.clone()).into_response(),
        Some(StubResponse::Status(code)) => StatusCode::from_u16(*code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        None => Json(no_data()).into_response(),
    }
}
