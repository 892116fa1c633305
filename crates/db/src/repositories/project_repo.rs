//! Repository for the `projects` table.

use sqlx::PgPool;
use tribunal_core::types::DbId;

use crate::models::project::{CreateProject, Project, ProjectWithEvaluation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, category, name, type, researchers, study_program, research_line, \
                       contact_email, general_info, problem_description, theoretical_framework, \
                       project_summary, file_url, user_id, created_at, updated_at";

/// Same list prefixed with the `p` alias, plus the evaluation-state columns
/// produced by the outer join in the augmented queries.
const AUGMENTED_COLUMNS: &str =
    "p.id, p.category, p.name, p.type, p.researchers, p.study_program, p.research_line, \
     p.contact_email, p.general_info, p.problem_description, p.theoretical_framework, \
     p.project_summary, p.file_url, p.user_id, p.created_at, p.updated_at, \
     e.total_score, (e.id IS NOT NULL) AS has_evaluation";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (category, name, type, researchers, study_program,
                                   research_line, contact_email, general_info,
                                   problem_description, theoretical_framework,
                                   project_summary, file_url, user_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.category)
            .bind(&input.name)
            .bind(&input.project_type)
            .bind(&input.researchers)
            .bind(&input.study_program)
            .bind(&input.research_line)
            .bind(&input.contact_email)
            .bind(&input.general_info)
            .bind(&input.problem_description)
            .bind(&input.theoretical_framework)
            .bind(&input.project_summary)
            .bind(&input.file_url)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects, newest first, each joined with its evaluation state.
    pub async fn list_with_evaluation(
        pool: &PgPool,
    ) -> Result<Vec<ProjectWithEvaluation>, sqlx::Error> {
        let query = format!(
            "SELECT {AUGMENTED_COLUMNS}
             FROM projects p
             LEFT JOIN evaluations e ON e.project_id = p.id
             ORDER BY p.created_at DESC"
        );
        sqlx::query_as::<_, ProjectWithEvaluation>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a single project by ID, joined with its evaluation state.
    pub async fn find_by_id_with_evaluation(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectWithEvaluation>, sqlx::Error> {
        let query = format!(
            "SELECT {AUGMENTED_COLUMNS}
             FROM projects p
             LEFT JOIN evaluations e ON e.project_id = p.id
             WHERE p.id = $1"
        );
        sqlx::query_as::<_, ProjectWithEvaluation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    ///
    /// Any evaluation referencing the project is removed by the cascade rule
    /// on `fk_evaluations_project`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
