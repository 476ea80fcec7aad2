//! Handlers for the teacher's weekly timetable (`/schedules`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveTime;
use schoolhub_core::error::CoreError;
use schoolhub_core::schedule::{
    group_by_day, validate_day_of_week, validate_label, validate_room, validate_time_range,
    DaySchedule,
};
use schoolhub_core::types::DbId;
use schoolhub_db::models::schedule::{CreateScheduleItem, ScheduleItem, UpdateScheduleItem};
use schoolhub_db::repositories::ScheduleRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireTeacher;
use crate::response::{created, Created, DataResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ScheduleItem",
        id,
    })
}

struct SlotFields<'a> {
    day_of_week: i16,
    start_time: NaiveTime,
    end_time: NaiveTime,
    subject: &'a str,
    class_name: &'a str,
    room: Option<&'a str>,
}

fn validate_slot(slot: &SlotFields<'_>) -> Result<(), CoreError> {
    validate_day_of_week(slot.day_of_week)?;
    validate_time_range(slot.start_time, slot.end_time)?;
    validate_label("subject", slot.subject)?;
    validate_label("class_name", slot.class_name)?;
    validate_room(slot.room)
}

/// GET /api/v1/schedules
pub async fn list(
    RequireTeacher(teacher): RequireTeacher,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ScheduleItem>>>> {
    let items = ScheduleRepo::list_for_teacher(&state.pool, teacher.user_id()).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/schedules/week
///
/// Seven days, Monday first, each ordered by start time.
pub async fn week(
    RequireTeacher(teacher): RequireTeacher,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<DaySchedule<ScheduleItem>>>>> {
    let items = ScheduleRepo::list_for_teacher(&state.pool, teacher.user_id()).await?;
    let days = group_by_day(items, |i| i.day_of_week, |i| i.start_time);
    Ok(Json(DataResponse { data: days }))
}

/// POST /api/v1/schedules
pub async fn create(
    RequireTeacher(teacher): RequireTeacher,
    State(state): State<AppState>,
    Json(input): Json<CreateScheduleItem>,
) -> AppResult<Created<ScheduleItem>> {
    validate_slot(&SlotFields {
        day_of_week: input.day_of_week,
        start_time: input.start_time,
        end_time: input.end_time,
        subject: &input.subject,
        class_name: &input.class_name,
        room: input.room.as_deref(),
    })?;

    let item = ScheduleRepo::create(&state.pool, teacher.user_id(), &input).await?;
    Ok(created(item))
}

/// PUT /api/v1/schedules/{id}
///
/// The merged result (stored values overlaid with the patch) is validated,
/// so moving only `end_time` before the stored `start_time` is rejected.
pub async fn update(
    RequireTeacher(teacher): RequireTeacher,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateScheduleItem>,
) -> AppResult<Json<DataResponse<ScheduleItem>>> {
    let current = ScheduleRepo::find(&state.pool, id, teacher.user_id())
        .await?
        .ok_or_else(|| not_found(id))?;

    validate_slot(&SlotFields {
        day_of_week: input.day_of_week.unwrap_or(current.day_of_week),
        start_time: input.start_time.unwrap_or(current.start_time),
        end_time: input.end_time.unwrap_or(current.end_time),
        subject: input.subject.as_deref().unwrap_or(&current.subject),
        class_name: input.class_name.as_deref().unwrap_or(&current.class_name),
        room: input.room.as_deref().or(current.room.as_deref()),
    })?;

    let item = ScheduleRepo::update(&state.pool, id, teacher.user_id(), &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/schedules/{id}
pub async fn delete(
    RequireTeacher(teacher): RequireTeacher,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ScheduleRepo::delete(&state.pool, id, teacher.user_id()).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
