//! Handlers for the `/children` resource.
//!
//! Any authenticated user can add children they own. Reads and writes on a
//! single child are allowed for its owner and for the teacher of its class.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use schoolhub_core::error::CoreError;
use schoolhub_core::student::{validate_child_name, validate_date_of_birth, validate_gender};
use schoolhub_core::types::{DbId, UserId};
use schoolhub_db::models::child::{Child, CreateChild, UpdateChild};
use schoolhub_db::repositories::{ChildRepo, ProfileRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{created, Created, DataResponse};
use crate::state::AppState;

/// Validate a new child before any database call.
pub(crate) fn validate_new_child(input: &CreateChild, today: NaiveDate) -> Result<(), CoreError> {
    validate_child_name(&input.name)?;
    if let Some(dob) = input.date_of_birth {
        validate_date_of_birth(dob, today)?;
    }
    validate_gender(input.gender.as_deref())
}

fn validate_child_update(input: &UpdateChild, today: NaiveDate) -> Result<(), CoreError> {
    if let Some(name) = &input.name {
        validate_child_name(name)?;
    }
    if let Some(dob) = input.date_of_birth {
        validate_date_of_birth(dob, today)?;
    }
    validate_gender(input.gender.as_deref())
}

/// Load a child the user may access, or 404.
pub(crate) async fn accessible_child(
    state: &AppState,
    id: DbId,
    user_id: UserId,
) -> AppResult<Child> {
    ChildRepo::find_accessible(&state.pool, id, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Child", id }))
}

pub(crate) fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// GET /api/v1/children
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Child>>>> {
    let children = ChildRepo::list_for_owner(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: children }))
}

/// POST /api/v1/children
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateChild>,
) -> AppResult<Created<Child>> {
    validate_new_child(&input, today())?;

    if ProfileRepo::find_by_id(&state.pool, auth.user_id).await?.is_none() {
        return Err(CoreError::Validation(
            "Create your profile (PUT /api/v1/me) before adding children".into(),
        )
        .into());
    }

    let child = ChildRepo::create(&state.pool, auth.user_id, None, &input).await?;
    tracing::info!(child_id = child.id, owner_id = %auth.user_id, "Child added");
    Ok(created(child))
}

/// GET /api/v1/children/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Child>>> {
    let child = accessible_child(&state, id, auth.user_id).await?;
    Ok(Json(DataResponse { data: child }))
}

/// PUT /api/v1/children/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateChild>,
) -> AppResult<Json<DataResponse<Child>>> {
    validate_child_update(&input, today())?;

    let child = ChildRepo::update(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Child", id }))?;
    Ok(Json(DataResponse { data: child }))
}

/// DELETE /api/v1/children/{id}
///
/// Also removes the child's assessments and trails.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ChildRepo::delete(&state.pool, id, auth.user_id).await? {
        tracing::info!(child_id = id, user_id = %auth.user_id, "Child deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Child", id }))
    }
}
