//! Handlers for the `/classes` resource. Teacher-only; every query is
//! scoped to the calling teacher.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use schoolhub_core::classroom::{
    normalize_division, validate_class_name, validate_division, validate_standard,
};
use schoolhub_core::error::CoreError;
use schoolhub_core::syllabus::store::validate_segment;
use schoolhub_core::types::{DbId, UserId};
use schoolhub_db::models::classroom::{Class, ClassSummary, CreateClass, UpdateClass};
use schoolhub_db::repositories::ClassRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireTeacher;
use crate::response::{created, Created, DataResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Class", id })
}

/// Board names double as syllabus directory names.
fn normalize_board(board: &str) -> Result<String, CoreError> {
    let board = board.trim().to_ascii_lowercase();
    validate_segment("board", &board)?;
    Ok(board)
}

/// Load one of the teacher's classes, or 404.
pub(crate) async fn owned_class(
    state: &AppState,
    id: DbId,
    teacher_id: UserId,
) -> AppResult<Class> {
    ClassRepo::find(&state.pool, id, teacher_id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// GET /api/v1/classes
pub async fn list(
    RequireTeacher(teacher): RequireTeacher,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ClassSummary>>>> {
    let classes = ClassRepo::list_summaries(&state.pool, teacher.user_id()).await?;
    Ok(Json(DataResponse { data: classes }))
}

/// POST /api/v1/classes
pub async fn create(
    RequireTeacher(teacher): RequireTeacher,
    State(state): State<AppState>,
    Json(mut input): Json<CreateClass>,
) -> AppResult<Created<Class>> {
    validate_class_name(&input.name)?;
    validate_standard(input.standard)?;
    input.division = normalize_division(&input.division);
    validate_division(&input.division)?;
    input.board = input.board.as_deref().map(normalize_board).transpose()?;

    let class = ClassRepo::create(&state.pool, teacher.user_id(), &input).await?;
    tracing::info!(class_id = class.id, teacher_id = %teacher.user_id(), "Class created");
    Ok(created(class))
}

/// GET /api/v1/classes/{id}
pub async fn get_by_id(
    RequireTeacher(teacher): RequireTeacher,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Class>>> {
    let class = owned_class(&state, id, teacher.user_id()).await?;
    Ok(Json(DataResponse { data: class }))
}

/// PUT /api/v1/classes/{id}
pub async fn update(
    RequireTeacher(teacher): RequireTeacher,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateClass>,
) -> AppResult<Json<DataResponse<Class>>> {
    if let Some(name) = &input.name {
        validate_class_name(name)?;
    }
    if let Some(standard) = input.standard {
        validate_standard(standard)?;
    }
    if let Some(division) = input.division.as_deref().map(normalize_division) {
        validate_division(&division)?;
        input.division = Some(division);
    }
    input.board = input.board.as_deref().map(normalize_board).transpose()?;

    let class = ClassRepo::update(&state.pool, id, teacher.user_id(), &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: class }))
}

/// DELETE /api/v1/classes/{id}
///
/// Students stay on record and become unassigned.
pub async fn delete(
    RequireTeacher(teacher): RequireTeacher,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ClassRepo::delete(&state.pool, id, teacher.user_id()).await? {
        tracing::info!(class_id = id, teacher_id = %teacher.user_id(), "Class deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
