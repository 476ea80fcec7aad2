//! Handlers for `/children/{child_id}/assessments`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use schoolhub_core::assessment::validate_answers;
use schoolhub_core::error::CoreError;
use schoolhub_core::types::DbId;
use schoolhub_db::models::assessment::{Assessment, CreateAssessment};
use schoolhub_db::repositories::AssessmentRepo;

use super::child::accessible_child;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{created, Created, DataResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Assessment",
        id,
    })
}

/// GET /api/v1/children/{child_id}/assessments
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(child_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Assessment>>>> {
    accessible_child(&state, child_id, auth.user_id).await?;
    let assessments = AssessmentRepo::list_for_child(&state.pool, child_id).await?;
    Ok(Json(DataResponse { data: assessments }))
}

/// POST /api/v1/children/{child_id}/assessments
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(child_id): Path<DbId>,
    Json(input): Json<CreateAssessment>,
) -> AppResult<Created<Assessment>> {
    validate_answers(&input.answers)?;
    accessible_child(&state, child_id, auth.user_id).await?;

    let assessment = AssessmentRepo::create(&state.pool, child_id, &input).await?;
    Ok(created(assessment))
}

/// GET /api/v1/children/{child_id}/assessments/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((child_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<Assessment>>> {
    accessible_child(&state, child_id, auth.user_id).await?;
    let assessment = AssessmentRepo::find(&state.pool, child_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: assessment }))
}

/// DELETE /api/v1/children/{child_id}/assessments/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((child_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    accessible_child(&state, child_id, auth.user_id).await?;
    if AssessmentRepo::delete(&state.pool, child_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
