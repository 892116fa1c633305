//! Handlers for the `/evaluations` resource.

use axum::extract::{Path, State};
use axum::Json;
use tribunal_core::error::CoreError;
use tribunal_core::types::DbId;
use tribunal_db::models::evaluation::{Evaluation, UpsertEvaluation};
use tribunal_db::repositories::{EvaluationRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/evaluations
///
/// Insert or replace the evaluation for a project. The rubric is validated
/// first (no negative sub-score, no section over its ceiling) and the total
/// is recomputed server-side; a client-supplied `total_score` that disagrees
/// with the recomputed sum is rejected. The stored total is always the
/// recomputed one.
pub async fn upsert(
    State(state): State<AppState>,
    Json(input): Json<UpsertEvaluation>,
) -> AppResult<Json<Evaluation>> {
    input.scores.validate()?;

    if let Some(claimed) = input.total_score {
        input.scores.verify_claimed_total(claimed)?;
    }
    let total_score = input.scores.total();

    // Verify the target project up front so a dangling project_id surfaces
    // as a 404 rather than a foreign-key violation.
    ProjectRepo::find_by_id(&state.pool, input.project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: input.project_id,
        }))?;

    let evaluation = EvaluationRepo::upsert(&state.pool, &input, total_score).await?;
    tracing::debug!(
        project_id = evaluation.project_id,
        evaluator_id = evaluation.evaluator_id,
        total_score = %evaluation.total_score,
        "Evaluation saved"
    );

    Ok(Json(evaluation))
}

/// GET /api/evaluations/{project_id}
///
/// A project with no saved evaluation yet returns 404 -- absence is a
/// first-class state, distinct from an all-zero score, so the client knows
/// to render a blank form.
pub async fn get_by_project_id(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Evaluation>> {
    let evaluation = EvaluationRepo::find_by_project_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Evaluation for project",
            id: project_id,
        }))?;
    Ok(Json(evaluation))
}
