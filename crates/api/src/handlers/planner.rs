//! Weekly lesson planner for a class (`/classes/{class_id}/planner`).
//!
//! The syllabus is picked from the class's board and standard plus the
//! requested subject. Without an explicit `per_week`, the pace is the
//! number of weekly timetable slots the teacher has for that class and
//! subject (at least one).

use axum::extract::{Path, Query, State};
use axum::Json;
use schoolhub_core::syllabus::store::validate_segment;
use schoolhub_core::syllabus::{plan_week, WeeklyPlan};
use schoolhub_core::types::DbId;
use schoolhub_db::repositories::ScheduleRepo;
use serde::Serialize;

use super::classroom::owned_class;
use super::syllabus::with_store;
use crate::error::AppResult;
use crate::middleware::rbac::RequireTeacher;
use crate::query::PlannerParams;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceSource {
    Query,
    Timetable,
}

#[derive(Debug, Serialize)]
pub struct ClassPlan {
    pub class_id: DbId,
    pub class_name: String,
    pub board: String,
    pub standard: i16,
    pub subject: String,
    pub pace_source: PaceSource,
    #[serde(flatten)]
    pub plan: WeeklyPlan,
}

/// GET /api/v1/classes/{class_id}/planner?subject=&week=&per_week=
pub async fn class_plan(
    RequireTeacher(teacher): RequireTeacher,
    State(state): State<AppState>,
    Path(class_id): Path<DbId>,
    Query(params): Query<PlannerParams>,
) -> AppResult<Json<DataResponse<ClassPlan>>> {
    let subject = params.subject.trim().to_ascii_lowercase();
    validate_segment("subject", &subject)?;
    let class = owned_class(&state, class_id, teacher.user_id()).await?;

    let (per_week, pace_source) = match params.per_week {
        Some(n) => (n, PaceSource::Query),
        None => {
            let sessions =
                ScheduleRepo::count_sessions(&state.pool, teacher.user_id(), &class.name, &subject)
                    .await?;
            (u32::try_from(sessions).unwrap_or(u32::MAX).max(1), PaceSource::Timetable)
        }
    };
    let week = params.week.unwrap_or(1);

    let board = class.board.clone();
    let standard = class.standard.to_string();
    let doc_subject = subject.clone();
    let plan = with_store(&state, move |s| {
        let doc = s.load(&board, &standard, &doc_subject)?;
        plan_week(&doc, week, per_week)
    })
    .await?;

    Ok(Json(DataResponse {
        data: ClassPlan {
            class_id: class.id,
            class_name: class.name,
            board: class.board,
            standard: class.standard,
            subject,
            pace_source,
            plan,
        },
    }))
}
