use axum::extract::State;
use axum::http::StatusCode;

use campusmap_core::health::database_ready;

use crate::state::AppState;

// ── GET /readyz ──────────────────────────────────────────────────────────────

pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    database_ready(&state.db).await
}
