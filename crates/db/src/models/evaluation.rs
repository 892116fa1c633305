//! Evaluation entity model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tribunal_core::rubric::RubricScores;
use tribunal_core::types::{DbId, Timestamp};

/// An evaluation row from the `evaluations` table.
///
/// At most one row exists per project (`uq_evaluations_project_id`), so the
/// twelve sub-scores and the stored total always describe the latest
/// submission for that project.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Evaluation {
    pub id: DbId,
    pub project_id: DbId,
    pub eval1_1: Decimal,
    pub eval1_2: Decimal,
    pub eval1_3: Decimal,
    pub eval1_4: Decimal,
    pub eval1_5: Decimal,
    pub obs1: Option<String>,
    pub eval2_1: Decimal,
    pub eval2_2: Decimal,
    pub eval2_3: Decimal,
    pub obs2: Option<String>,
    pub eval3_1: Decimal,
    pub eval3_2: Decimal,
    pub eval3_3: Decimal,
    pub eval3_4: Decimal,
    pub obs3: Option<String>,
    pub final_recommendations: Option<String>,
    pub total_score: Decimal,
    pub evaluator_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for submitting an evaluation (insert or replace).
///
/// The twelve rubric fields are flattened, so the wire shape is the flat
/// object the evaluation form produces. `total_score` is the client's own
/// sum; the server recomputes the total from the sub-scores and rejects the
/// submission when a claimed total disagrees.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertEvaluation {
    pub project_id: DbId,
    #[serde(flatten)]
    pub scores: RubricScores,
    pub obs1: Option<String>,
    pub obs2: Option<String>,
    pub obs3: Option<String>,
    pub final_recommendations: Option<String>,
    pub total_score: Option<Decimal>,
    pub evaluator_id: DbId,
}
