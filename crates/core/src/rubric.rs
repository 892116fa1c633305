//! The project evaluation rubric.
//!
//! Twelve sub-criteria in three fixed sections:
//!
//! | Section | Fields              | Max points |
//! |---------|---------------------|------------|
//! | 1       | `eval1_1..eval1_5`  | 20         |
//! | 2       | `eval2_1..eval2_3`  | 15         |
//! | 3       | `eval3_1..eval3_4`  | 20         |
//!
//! The recorded total is always the arithmetic sum of the twelve fields
//! (55 points maximum). Scores are [`Decimal`] so sums are exact and
//! serialize the way NUMERIC columns do: as strings like `"55.00"`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Maximum attainable total across all sections (20 + 15 + 20).
pub const MAX_TOTAL_POINTS: i64 = 55;

/// One rubric section: a contiguous group of sub-criteria sharing a point
/// ceiling.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub title: &'static str,
    /// Field names of this section's sub-criteria, in rubric order.
    pub fields: &'static [&'static str],
    /// Ceiling for the sum of this section's sub-scores.
    pub max_points: i64,
}

/// The fixed rubric, in presentation order.
pub const SECTIONS: [Section; 3] = [
    Section {
        title: "Relevance and pertinence",
        fields: &["eval1_1", "eval1_2", "eval1_3", "eval1_4", "eval1_5"],
        max_points: 20,
    },
    Section {
        title: "Theoretical framework",
        fields: &["eval2_1", "eval2_2", "eval2_3"],
        max_points: 15,
    },
    Section {
        title: "Methodology",
        fields: &["eval3_1", "eval3_2", "eval3_3", "eval3_4"],
        max_points: 20,
    },
];

/// The twelve numeric sub-scores of an evaluation.
///
/// Mirrors the browser form, which submits every value as a string — each
/// field deserializes from a JSON string or number, and an omitted field
/// counts as zero. Payload keys outside this set are ignored and never
/// contribute to the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RubricScores {
    #[serde(default)]
    pub eval1_1: Decimal,
    #[serde(default)]
    pub eval1_2: Decimal,
    #[serde(default)]
    pub eval1_3: Decimal,
    #[serde(default)]
    pub eval1_4: Decimal,
    #[serde(default)]
    pub eval1_5: Decimal,
    #[serde(default)]
    pub eval2_1: Decimal,
    #[serde(default)]
    pub eval2_2: Decimal,
    #[serde(default)]
    pub eval2_3: Decimal,
    #[serde(default)]
    pub eval3_1: Decimal,
    #[serde(default)]
    pub eval3_2: Decimal,
    #[serde(default)]
    pub eval3_3: Decimal,
    #[serde(default)]
    pub eval3_4: Decimal,
}

impl RubricScores {
    /// All twelve sub-scores in rubric order (section 1, then 2, then 3).
    pub fn values(&self) -> [Decimal; 12] {
        [
            self.eval1_1,
            self.eval1_2,
            self.eval1_3,
            self.eval1_4,
            self.eval1_5,
            self.eval2_1,
            self.eval2_2,
            self.eval2_3,
            self.eval3_1,
            self.eval3_2,
            self.eval3_3,
            self.eval3_4,
        ]
    }

    /// Arithmetic sum of the twelve sub-scores.
    pub fn total(&self) -> Decimal {
        self.values().into_iter().sum()
    }

    /// Check the scores against the rubric's bounds.
    ///
    /// Rejects negative sub-scores and any section whose sum exceeds its
    /// ceiling. Individual sub-criteria carry no ceiling of their own — a
    /// section's points may be distributed freely across its fields.
    pub fn validate(&self) -> Result<(), CoreError> {
        let values = self.values();
        let mut offset = 0;

        for section in &SECTIONS {
            let scores = &values[offset..offset + section.fields.len()];

            for (field, score) in section.fields.iter().zip(scores) {
                if *score < Decimal::ZERO {
                    return Err(CoreError::Validation(format!(
                        "Score {field} must not be negative"
                    )));
                }
            }

            let sum: Decimal = scores.iter().copied().sum();
            if sum > Decimal::from(section.max_points) {
                return Err(CoreError::Validation(format!(
                    "Section \"{}\" exceeds its maximum of {} points",
                    section.title, section.max_points
                )));
            }

            offset += section.fields.len();
        }

        Ok(())
    }

    /// Verify a client-computed total against the recomputed sum.
    ///
    /// The stored total is always the recomputed one; a claimed total that
    /// disagrees means the client's arithmetic went wrong and the submission
    /// is rejected rather than silently corrected.
    pub fn verify_claimed_total(&self, claimed: Decimal) -> Result<(), CoreError> {
        let total = self.total();
        if claimed != total {
            return Err(CoreError::Validation(format!(
                "total_score {claimed} does not match the sum of the rubric scores ({total})"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn sections_cover_twelve_fields() {
        let count: usize = SECTIONS.iter().map(|s| s.fields.len()).sum();
        assert_eq!(count, 12);

        let max: i64 = SECTIONS.iter().map(|s| s.max_points).sum();
        assert_eq!(max, MAX_TOTAL_POINTS);
    }

    #[test]
    fn default_scores_total_zero_and_validate() {
        let scores = RubricScores::default();
        assert_eq!(scores.total(), Decimal::ZERO);
        assert!(scores.validate().is_ok());
    }

    #[test]
    fn full_marks_on_first_criterion_of_each_section() {
        // A section's points may land entirely on one sub-criterion.
        let scores = RubricScores {
            eval1_1: dec("20"),
            eval2_1: dec("15"),
            eval3_1: dec("20"),
            ..Default::default()
        };

        assert!(scores.validate().is_ok());
        assert_eq!(scores.total(), dec("55"));
    }

    #[test]
    fn fractional_scores_sum_exactly() {
        let scores = RubricScores {
            eval1_1: dec("3.25"),
            eval1_2: dec("4.50"),
            eval2_1: dec("0.10"),
            eval3_4: dec("2.15"),
            ..Default::default()
        };

        assert_eq!(scores.total(), dec("10.00"));
        assert!(scores.validate().is_ok());
    }

    #[test]
    fn negative_score_rejected() {
        let scores = RubricScores {
            eval2_2: dec("-1"),
            ..Default::default()
        };

        let err = scores.validate();
        assert_matches!(err, Err(CoreError::Validation(msg)) if msg.contains("eval2_2"));
    }

    #[test]
    fn section_over_ceiling_rejected() {
        // Section 2 tops out at 15; 6 + 5 + 5 = 16.
        let scores = RubricScores {
            eval2_1: dec("6"),
            eval2_2: dec("5"),
            eval2_3: dec("5"),
            ..Default::default()
        };

        let err = scores.validate();
        assert_matches!(
            err,
            Err(CoreError::Validation(msg)) if msg.contains("Theoretical framework")
        );
    }

    #[test]
    fn claimed_total_must_match_recomputed_sum() {
        let scores = RubricScores {
            eval1_1: dec("10"),
            eval3_1: dec("5"),
            ..Default::default()
        };

        assert!(scores.verify_claimed_total(dec("15")).is_ok());
        // Scale differences are not mismatches: 15.00 == 15.
        assert!(scores.verify_claimed_total(dec("15.00")).is_ok());
        assert_matches!(
            scores.verify_claimed_total(dec("54")),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn deserializes_form_strings_and_numbers() {
        // The browser submits form values as strings; hand-written clients
        // may send numbers. Both decode, missing fields default to zero.
        let scores: RubricScores = serde_json::from_value(serde_json::json!({
            "eval1_1": "4.5",
            "eval1_2": 3,
            "eval2_1": "15",
        }))
        .unwrap();

        assert_eq!(scores.eval1_1, dec("4.5"));
        assert_eq!(scores.eval1_2, dec("3"));
        assert_eq!(scores.eval2_1, dec("15"));
        assert_eq!(scores.eval3_4, Decimal::ZERO);
        assert_eq!(scores.total(), dec("22.5"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let scores: RubricScores = serde_json::from_value(serde_json::json!({
            "eval1_1": "2",
            "eval9_9": "40",
            "observations": "not a score",
        }))
        .unwrap();

        assert_eq!(scores.total(), dec("2"));
    }

    #[test]
    fn serializes_scores_as_strings() {
        let scores = RubricScores {
            eval1_1: dec("4.50"),
            ..Default::default()
        };

        let value = serde_json::to_value(scores).unwrap();
        assert_eq!(value["eval1_1"], "4.50");
    }
}
