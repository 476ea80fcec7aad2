//! Schedule item entity model and DTOs.

use chrono::NaiveTime;
use schoolhub_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `schedule_items` table. `day_of_week` is ISO (1 = Monday).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScheduleItem {
    pub id: DbId,
    pub teacher_id: UserId,
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub subject: String,
    pub class_name: String,
    pub room: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a schedule item. The teacher comes from the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateScheduleItem {
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub subject: String,
    pub class_name: String,
    pub room: Option<String>,
}

/// DTO for updating a schedule item. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateScheduleItem {
    pub day_of_week: Option<i16>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub subject: Option<String>,
    pub class_name: Option<String>,
    pub room: Option<String>,
}
