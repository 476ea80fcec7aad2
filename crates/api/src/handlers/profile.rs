//! Handlers for the caller's own profile (`/me`).

use axum::extract::State;
use axum::Json;
use schoolhub_core::error::CoreError;
use schoolhub_core::roles::{validate_full_name, validate_role};
use schoolhub_db::models::profile::{Profile, UpsertProfile};
use schoolhub_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/me
pub async fn get_me(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Profile>>> {
    let profile = ProfileRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundKey {
                entity: "Profile",
                key: auth.user_id.to_string(),
            })
        })?;
    Ok(Json(DataResponse { data: profile }))
}

/// PUT /api/v1/me
///
/// Creates the profile on first call and replaces name and role afterwards.
pub async fn put_me(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpsertProfile>,
) -> AppResult<Json<DataResponse<Profile>>> {
    validate_full_name(&input.full_name)?;
    validate_role(&input.role)?;

    let profile = ProfileRepo::upsert(&state.pool, auth.user_id, &input).await?;
    tracing::info!(user_id = %auth.user_id, role = %profile.role, "Profile saved");
    Ok(Json(DataResponse { data: profile }))
}
