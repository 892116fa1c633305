//! Repository for the `evaluations` table.

use rust_decimal::Decimal;
use sqlx::PgPool;
use tribunal_core::types::DbId;

use crate::models::evaluation::{Evaluation, UpsertEvaluation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, eval1_1, eval1_2, eval1_3, eval1_4, eval1_5, obs1, \
                       eval2_1, eval2_2, eval2_3, obs2, eval3_1, eval3_2, eval3_3, eval3_4, obs3, \
                       final_recommendations, total_score, evaluator_id, created_at, updated_at";

/// Provides upsert and lookup operations for evaluations.
pub struct EvaluationRepo;

impl EvaluationRepo {
    /// Insert an evaluation for a project, or replace the existing one.
    ///
    /// The unique constraint on `project_id` makes the replace atomic:
    /// concurrent submissions for the same project serialize at the row and
    /// the last writer wins. `total_score` is the server-computed sum, not
    /// the client's claimed value.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertEvaluation,
        total_score: Decimal,
    ) -> Result<Evaluation, sqlx::Error> {
        let query = format!(
            "INSERT INTO evaluations (
                 project_id,
                 eval1_1, eval1_2, eval1_3, eval1_4, eval1_5, obs1,
                 eval2_1, eval2_2, eval2_3, obs2,
                 eval3_1, eval3_2, eval3_3, eval3_4, obs3,
                 final_recommendations, total_score, evaluator_id
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                     $11, $12, $13, $14, $15, $16, $17, $18, $19)
             ON CONFLICT (project_id)
             DO UPDATE SET
                 eval1_1 = $2, eval1_2 = $3, eval1_3 = $4, eval1_4 = $5, eval1_5 = $6,
                 obs1 = $7,
                 eval2_1 = $8, eval2_2 = $9, eval2_3 = $10, obs2 = $11,
                 eval3_1 = $12, eval3_2 = $13, eval3_3 = $14, eval3_4 = $15, obs3 = $16,
                 final_recommendations = $17, total_score = $18, evaluator_id = $19,
                 updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Evaluation>(&query)
            .bind(input.project_id)
            .bind(input.scores.eval1_1)
            .bind(input.scores.eval1_2)
            .bind(input.scores.eval1_3)
            .bind(input.scores.eval1_4)
            .bind(input.scores.eval1_5)
            .bind(&input.obs1)
            .bind(input.scores.eval2_1)
            .bind(input.scores.eval2_2)
            .bind(input.scores.eval2_3)
            .bind(&input.obs2)
            .bind(input.scores.eval3_1)
            .bind(input.scores.eval3_2)
            .bind(input.scores.eval3_3)
            .bind(input.scores.eval3_4)
            .bind(&input.obs3)
            .bind(&input.final_recommendations)
            .bind(total_score)
            .bind(input.evaluator_id)
            .fetch_one(pool)
            .await
    }

    /// Find the evaluation for a project, if one has been saved.
    pub async fn find_by_project_id(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<Evaluation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM evaluations WHERE project_id = $1");
        sqlx::query_as::<_, Evaluation>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }
}
