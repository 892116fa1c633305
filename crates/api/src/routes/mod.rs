pub mod auth;
pub mod evaluation;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /login                       authenticate (public, no session issued)
///
/// /projects                    list, create (multipart)
/// /projects/{id}               get, delete
///
/// /evaluations                 upsert (POST)
/// /evaluations/{project_id}    get the project's evaluation
///
/// /health                      service + database health
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/projects", project::router())
        .nest("/evaluations", evaluation::router())
        .merge(health::router())
}
