//! Route definitions for the `/evaluations` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::evaluation;
use crate::state::AppState;

/// Routes mounted at `/evaluations`.
///
/// Evaluations are addressed by the project they score, not by their own
/// id: the POST upserts against the project's unique constraint and the
/// GET looks up by project id.
///
/// ```text
/// POST /               -> upsert
/// GET  /{project_id}   -> get_by_project_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(evaluation::upsert))
        .route("/{project_id}", get(evaluation::get_by_project_id))
}
