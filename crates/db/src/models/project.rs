//! Project entity model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tribunal_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub category: String,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub project_type: String,
    pub researchers: String,
    pub study_program: String,
    pub research_line: String,
    pub contact_email: String,
    pub general_info: Option<String>,
    pub problem_description: Option<String>,
    pub theoretical_framework: Option<String>,
    pub project_summary: Option<String>,
    /// Public path of the attached PDF, e.g. `/uploads/1712345678901-123456789.pdf`.
    pub file_url: Option<String>,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project row joined with its evaluation state.
///
/// `total_score` is `None` until an evaluation is saved; `has_evaluation`
/// makes the distinction explicit so clients need not probe for null.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectWithEvaluation {
    pub id: DbId,
    pub category: String,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub project_type: String,
    pub researchers: String,
    pub study_program: String,
    pub research_line: String,
    pub contact_email: String,
    pub general_info: Option<String>,
    pub problem_description: Option<String>,
    pub theoretical_framework: Option<String>,
    pub project_summary: Option<String>,
    pub file_url: Option<String>,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub total_score: Option<Decimal>,
    pub has_evaluation: bool,
}

impl From<Project> for ProjectWithEvaluation {
    /// A freshly inserted project cannot have an evaluation yet, so the
    /// augmented shape is derivable without the join.
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            category: p.category,
            name: p.name,
            project_type: p.project_type,
            researchers: p.researchers,
            study_program: p.study_program,
            research_line: p.research_line,
            contact_email: p.contact_email,
            general_info: p.general_info,
            problem_description: p.problem_description,
            theoretical_framework: p.theoretical_framework,
            project_summary: p.project_summary,
            file_url: p.file_url,
            user_id: p.user_id,
            created_at: p.created_at,
            updated_at: p.updated_at,
            total_score: None,
            has_evaluation: false,
        }
    }
}

/// DTO for registering a new project.
///
/// `file_url` is filled in by the upload handler, never by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub category: String,
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub researchers: String,
    pub study_program: String,
    pub research_line: String,
    pub contact_email: String,
    pub general_info: Option<String>,
    pub problem_description: Option<String>,
    pub theoretical_framework: Option<String>,
    pub project_summary: Option<String>,
    #[serde(skip)]
    pub file_url: Option<String>,
    pub user_id: DbId,
}
