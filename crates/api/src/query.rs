//! Shared query parameter types for API handlers.

use chrono::NaiveDate;
use serde::Deserialize;

/// Week selection for syllabus plans (`?week=&per_week=`).
///
/// Both default to 1.
#[derive(Debug, Deserialize)]
pub struct WeekParams {
    pub week: Option<u32>,
    pub per_week: Option<u32>,
}

/// Class planner parameters (`?subject=&week=&per_week=`).
///
/// When `per_week` is omitted it is derived from the teacher's timetable.
#[derive(Debug, Deserialize)]
pub struct PlannerParams {
    pub subject: String,
    pub week: Option<u32>,
    pub per_week: Option<u32>,
}

/// Optional reference date (`?date=YYYY-MM-DD`), defaulting to today (UTC).
#[derive(Debug, Deserialize)]
pub struct DateParams {
    pub date: Option<NaiveDate>,
}

impl DateParams {
    pub fn resolve(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| chrono::Utc::now().date_naive())
    }
}
