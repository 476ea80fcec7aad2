//! Assessment entity model and DTOs.

use schoolhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `assessments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assessment {
    pub id: DbId,
    pub child_id: DbId,
    pub answers: serde_json::Value,
    pub created_at: Timestamp,
}

/// DTO for recording an assessment. The child comes from the path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssessment {
    pub answers: serde_json::Value,
}
