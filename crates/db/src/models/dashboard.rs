//! Dashboard projections.

use schoolhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// One child on the parent dashboard.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChildOverview {
    pub id: DbId,
    pub name: String,
    pub class_id: Option<DbId>,
    pub class_name: Option<String>,
    pub assessment_count: i64,
    pub latest_trail_topic: Option<String>,
    pub latest_trail_at: Option<Timestamp>,
}
