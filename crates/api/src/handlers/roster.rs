//! Handlers for a class roster (`/classes/{class_id}/students`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use schoolhub_core::error::CoreError;
use schoolhub_core::types::DbId;
use schoolhub_db::models::child::{Child, CreateChild};
use schoolhub_db::repositories::ChildRepo;

use super::child::{today, validate_new_child};
use super::classroom::owned_class;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireTeacher;
use crate::response::{created, Created, DataResponse};
use crate::state::AppState;

/// GET /api/v1/classes/{class_id}/students
pub async fn list(
    RequireTeacher(teacher): RequireTeacher,
    State(state): State<AppState>,
    Path(class_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Child>>>> {
    owned_class(&state, class_id, teacher.user_id()).await?;
    let students = ChildRepo::list_for_class(&state.pool, class_id).await?;
    Ok(Json(DataResponse { data: students }))
}

/// POST /api/v1/classes/{class_id}/students
///
/// Adds a new student owned by the teacher and placed in the class.
pub async fn create(
    RequireTeacher(teacher): RequireTeacher,
    State(state): State<AppState>,
    Path(class_id): Path<DbId>,
    Json(input): Json<CreateChild>,
) -> AppResult<Created<Child>> {
    validate_new_child(&input, today())?;
    owned_class(&state, class_id, teacher.user_id()).await?;

    let child = ChildRepo::create(&state.pool, teacher.user_id(), Some(class_id), &input).await?;
    tracing::info!(child_id = child.id, class_id, "Student added to class");
    Ok(created(child))
}

/// PUT /api/v1/classes/{class_id}/students/{child_id}
///
/// Moves an existing child the teacher can already reach into this class.
pub async fn assign(
    RequireTeacher(teacher): RequireTeacher,
    State(state): State<AppState>,
    Path((class_id, child_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<Child>>> {
    owned_class(&state, class_id, teacher.user_id()).await?;
    let child = ChildRepo::assign_to_class(&state.pool, child_id, teacher.user_id(), class_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Child",
            id: child_id,
        }))?;
    Ok(Json(DataResponse { data: child }))
}

/// DELETE /api/v1/classes/{class_id}/students/{child_id}
///
/// Removes the child from the roster; the child record is kept.
pub async fn remove(
    RequireTeacher(teacher): RequireTeacher,
    State(state): State<AppState>,
    Path((class_id, child_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    owned_class(&state, class_id, teacher.user_id()).await?;
    if ChildRepo::remove_from_class(&state.pool, child_id, class_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Child",
            id: child_id,
        }))
    }
}
