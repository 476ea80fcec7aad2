//! Class entity model and DTOs.

use schoolhub_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `classes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Class {
    pub id: DbId,
    pub teacher_id: UserId,
    pub name: String,
    pub board: String,
    pub standard: i16,
    pub division: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A class with its current roster size.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClassSummary {
    pub id: DbId,
    pub name: String,
    pub board: String,
    pub standard: i16,
    pub division: String,
    pub student_count: i64,
}

/// DTO for creating a class. The teacher comes from the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClass {
    pub name: String,
    /// Defaults to `cbse` if omitted.
    pub board: Option<String>,
    pub standard: i16,
    pub division: String,
}

/// DTO for updating a class. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateClass {
    pub name: Option<String>,
    pub board: Option<String>,
    pub standard: Option<i16>,
    pub division: Option<String>,
}
