//! Dashboard aggregates for parents and teachers.

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use schoolhub_core::schedule::{day_name, iso_day_of_week};
use schoolhub_db::models::classroom::ClassSummary;
use schoolhub_db::models::dashboard::ChildOverview;
use schoolhub_db::models::schedule::ScheduleItem;
use schoolhub_db::repositories::{ClassRepo, DashboardRepo, ScheduleRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireTeacher;
use crate::query::DateParams;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ParentDashboard {
    pub child_count: usize,
    pub children: Vec<ChildOverview>,
}

#[derive(Debug, Serialize)]
pub struct TeacherTotals {
    pub class_count: usize,
    pub student_count: i64,
    pub sessions_today: usize,
}

#[derive(Debug, Serialize)]
pub struct TeacherDashboard {
    pub teacher_name: String,
    pub date: NaiveDate,
    pub day_name: &'static str,
    pub classes: Vec<ClassSummary>,
    pub today: Vec<ScheduleItem>,
    pub totals: TeacherTotals,
}

/// GET /api/v1/dashboard/parent
pub async fn parent(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ParentDashboard>>> {
    let children = DashboardRepo::parent_overview(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse {
        data: ParentDashboard {
            child_count: children.len(),
            children,
        },
    }))
}

/// GET /api/v1/dashboard/teacher?date=
pub async fn teacher(
    RequireTeacher(teacher): RequireTeacher,
    State(state): State<AppState>,
    Query(params): Query<DateParams>,
) -> AppResult<Json<DataResponse<TeacherDashboard>>> {
    let date = params.resolve();
    let day = iso_day_of_week(date);

    let classes = ClassRepo::list_summaries(&state.pool, teacher.user_id()).await?;
    let today = ScheduleRepo::list_for_day(&state.pool, teacher.user_id(), day).await?;

    let totals = TeacherTotals {
        class_count: classes.len(),
        student_count: classes.iter().map(|c| c.student_count).sum(),
        sessions_today: today.len(),
    };

    Ok(Json(DataResponse {
        data: TeacherDashboard {
            teacher_name: teacher.profile.full_name,
            date,
            day_name: day_name(day).unwrap_or_default(),
            classes,
            today,
            totals,
        },
    }))
}
