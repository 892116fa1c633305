use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"OK"` when the database responds, `"degraded"` otherwise.
    pub status: &'static str,
    /// Human-readable detail for operators.
    pub message: &'static str,
}

/// GET /api/health -- returns service and database health.
///
/// Always 200; a broken database shows up in the body, not the status
/// code, so load balancers keep routing while operators investigate.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = tribunal_db::health_check(&state.pool).await.is_ok();

    let (status, message) = if db_healthy {
        ("OK", "Server running and database reachable")
    } else {
        ("degraded", "Server running but database unreachable")
    };

    Json(HealthResponse { status, message })
}

/// Mount health check routes (under `/api` with the rest of the surface).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
