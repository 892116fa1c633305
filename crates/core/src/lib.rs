//! Domain layer for the tribunal backend.
//!
//! Holds the pieces shared by the database and HTTP crates: primitive type
//! aliases, the domain error taxonomy, and the evaluation rubric (score
//! aggregation and validation).

pub mod error;
pub mod rubric;
pub mod types;
