//! Child (student) entity model and DTOs.

use chrono::NaiveDate;
use schoolhub_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `children` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Child {
    pub id: DbId,
    pub owner_id: UserId,
    pub class_id: Option<DbId>,
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a child. The owner comes from the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChild {
    #[serde(default)]
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
}

/// DTO for updating a child. All fields are optional.
///
/// Class membership is changed through the class roster routes, not here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateChild {
    pub name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
}
