//! Handlers for `/children/{child_id}/trails`.
//!
//! Generating a trail gathers the child's profile (age, class, latest
//! assessment), asks the configured [`TrailGenerator`] for a plan and stores
//! the parsed result.
//!
//! [`TrailGenerator`]: schoolhub_ai::TrailGenerator

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use schoolhub_core::error::CoreError;
use schoolhub_core::student::age_on;
use schoolhub_core::trail::{validate_trail_request, StudentProfile, TrailRequest};
use schoolhub_core::types::DbId;
use schoolhub_db::models::child::Child;
use schoolhub_db::models::trail::{CreateTrail, Trail};
use schoolhub_db::repositories::{AssessmentRepo, ClassRepo, TrailRepo};

use super::child::{accessible_child, today};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{created, Created, DataResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Trail", id })
}

async fn student_profile(state: &AppState, child: &Child) -> AppResult<StudentProfile> {
    let class = match child.class_id {
        Some(class_id) => ClassRepo::find_by_id(&state.pool, class_id).await?,
        None => None,
    };
    let latest = AssessmentRepo::latest_for_child(&state.pool, child.id).await?;

    Ok(StudentProfile {
        name: child.name.clone(),
        age: child.date_of_birth.map(|dob| age_on(dob, today())),
        gender: child.gender.clone(),
        standard: class.as_ref().map(|c| c.standard),
        board: class.map(|c| c.board),
        answers: latest.map(|a| a.answers),
    })
}

/// GET /api/v1/children/{child_id}/trails
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(child_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Trail>>>> {
    accessible_child(&state, child_id, auth.user_id).await?;
    let trails = TrailRepo::list_for_child(&state.pool, child_id).await?;
    Ok(Json(DataResponse { data: trails }))
}

/// POST /api/v1/children/{child_id}/trails
///
/// Returns 503 when generation is not configured and 502 when the
/// completion API fails.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(child_id): Path<DbId>,
    Json(input): Json<TrailRequest>,
) -> AppResult<Created<Trail>> {
    validate_trail_request(&input)?;
    let child = accessible_child(&state, child_id, auth.user_id).await?;
    let profile = student_profile(&state, &child).await?;

    let generated = state.trail_generator.generate(&profile, &input).await?;
    let content = serde_json::to_value(&generated.plan)
        .map_err(|e| AppError::InternalError(format!("Failed to encode trail: {e}")))?;

    let trail = TrailRepo::create(
        &state.pool,
        &CreateTrail {
            child_id,
            topic: input.topic.trim().to_string(),
            subject: input
                .subject
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            content,
            model: generated.model,
        },
    )
    .await?;
    tracing::info!(child_id, trail_id = trail.id, model = %trail.model, "Trail saved");
    Ok(created(trail))
}

/// GET /api/v1/children/{child_id}/trails/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((child_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<Trail>>> {
    accessible_child(&state, child_id, auth.user_id).await?;
    let trail = TrailRepo::find(&state.pool, child_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: trail }))
}

/// DELETE /api/v1/children/{child_id}/trails/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((child_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    accessible_child(&state, child_id, auth.user_id).await?;
    if TrailRepo::delete(&state.pool, child_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
