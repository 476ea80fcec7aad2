//! Profile entity model and DTOs.

use schoolhub_core::types::{Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `profiles` table. `id` is the auth provider's user id.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: UserId,
    pub full_name: String,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing the caller's own profile.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertProfile {
    pub full_name: String,
    pub role: String,
}
