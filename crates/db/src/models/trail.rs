//! Learning trail entity model and DTOs.

use schoolhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `trails` table. `content` holds the parsed trail plan.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Trail {
    pub id: DbId,
    pub child_id: DbId,
    pub topic: String,
    pub subject: Option<String>,
    pub content: serde_json::Value,
    pub model: String,
    pub created_at: Timestamp,
}

/// Insert payload built by the server after generation succeeds.
#[derive(Debug, Clone)]
pub struct CreateTrail {
    pub child_id: DbId,
    pub topic: String,
    pub subject: Option<String>,
    pub content: serde_json::Value,
    pub model: String,
}
