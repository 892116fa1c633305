//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` DTO for the write operations the API accepts

pub mod evaluation;
pub mod project;
pub mod user;
