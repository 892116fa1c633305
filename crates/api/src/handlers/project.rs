//! Handlers for the `/projects` resource.

use axum::extract::multipart::Field;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tribunal_core::error::CoreError;
use tribunal_core::types::DbId;
use tribunal_db::models::project::{CreateProject, ProjectWithEvaluation};
use tribunal_db::repositories::{ProjectRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::upload;

/// Response body for `DELETE /api/projects/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: &'static str,
}

/// GET /api/projects
///
/// Every row carries `has_evaluation` and the evaluation's `total_score`
/// (null until one is saved), newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectWithEvaluation>>> {
    let projects = ProjectRepo::list_with_evaluation(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectWithEvaluation>> {
    let project = ProjectRepo::find_by_id_with_evaluation(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// POST /api/projects
///
/// Multipart form: the project's text fields plus an optional `file` part
/// holding a PDF. The attachment is validated before anything is written,
/// and written to disk before the row insert, so a rejected upload leaves
/// no project behind.
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<ProjectWithEvaluation>)> {
    let mut category = None;
    let mut name = None;
    let mut project_type = None;
    let mut researchers = None;
    let mut study_program = None;
    let mut research_line = None;
    let mut contact_email = None;
    let mut general_info = None;
    let mut problem_description = None;
    let mut theoretical_framework = None;
    let mut project_summary = None;
    let mut user_id = None;
    let mut file: Option<(Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "category" => category = Some(text_value(field).await?),
            "name" => name = Some(text_value(field).await?),
            "type" => project_type = Some(text_value(field).await?),
            "researchers" => researchers = Some(text_value(field).await?),
            "study_program" => study_program = Some(text_value(field).await?),
            "research_line" => research_line = Some(text_value(field).await?),
            "contact_email" => contact_email = Some(text_value(field).await?),
            "general_info" => general_info = Some(text_value(field).await?),
            "problem_description" => problem_description = Some(text_value(field).await?),
            "theoretical_framework" => theoretical_framework = Some(text_value(field).await?),
            "project_summary" => project_summary = Some(text_value(field).await?),
            "user_id" => user_id = Some(text_value(field).await?),
            "file" => {
                let content_type = field.content_type().map(|s| s.to_string());
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                // A file input submitted with no selection arrives as an
                // empty part; treat it as "no attachment".
                if filename.is_empty() && data.is_empty() {
                    continue;
                }
                file = Some((content_type, data.to_vec()));
            }
            _ => {} // ignore unknown fields
        }
    }

    // Reject a bad attachment before touching disk or the database.
    if let Some((content_type, _)) = &file {
        if content_type.as_deref() != Some(upload::PDF_CONTENT_TYPE) {
            return Err(AppError::UploadRejected(
                "Only PDF attachments are accepted".into(),
            ));
        }
    }

    let user_id: DbId = require(user_id, "user_id")?
        .parse()
        .map_err(|_| AppError::Core(CoreError::Validation("user_id must be an integer".into())))?;

    let mut input = CreateProject {
        category: require(category, "category")?,
        name: require(name, "name")?,
        project_type: require(project_type, "type")?,
        researchers: require(researchers, "researchers")?,
        study_program: require(study_program, "study_program")?,
        research_line: require(research_line, "research_line")?,
        contact_email: require(contact_email, "contact_email")?,
        general_info,
        problem_description,
        theoretical_framework,
        project_summary,
        file_url: None,
        user_id,
    };

    // The owner must exist; checked up front so a bad id cannot strand a
    // freshly written attachment.
    UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    if let Some((_, data)) = &file {
        let file_url = upload::store_pdf(&state.config.upload_dir, data)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;
        input.file_url = Some(file_url);
    }

    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(project.into())))
}

/// DELETE /api/projects/{id}
///
/// Deleting twice is not idempotent: the second call reports not-found.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteResponse>> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(DeleteResponse {
            success: true,
            message: "Project deleted",
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

/// Read a text field, mapping stream errors to 400.
async fn text_value(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

/// Unwrap a required form field or fail validation with its name.
fn require(value: Option<String>, field: &'static str) -> Result<String, AppError> {
    value.ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "Missing required field: {field}"
        )))
    })
}
