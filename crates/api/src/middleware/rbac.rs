//! Role-based access control extractors.
//!
//! Roles live on the `profiles` row, not in the token, so these extractors
//! load the caller's profile after authenticating.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use schoolhub_core::error::CoreError;
use schoolhub_core::roles::ROLE_TEACHER;
use schoolhub_db::models::profile::Profile;
use schoolhub_db::repositories::ProfileRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires a profile with the `teacher` role. Rejects with 403 Forbidden
/// otherwise (including callers who have not created a profile yet).
///
/// ```ignore
/// async fn teacher_only(RequireTeacher(teacher): RequireTeacher) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireTeacher(pub TeacherUser);

/// A caller verified to be a teacher.
#[derive(Debug, Clone)]
pub struct TeacherUser {
    pub auth: AuthUser,
    pub profile: Profile,
}

impl TeacherUser {
    pub fn user_id(&self) -> schoolhub_core::types::UserId {
        self.auth.user_id
    }
}

impl FromRequestParts<AppState> for RequireTeacher {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        let profile = ProfileRepo::find_by_id(&state.pool, auth.user_id)
            .await?
            .filter(|p| p.role == ROLE_TEACHER)
            .ok_or_else(|| {
                AppError::Core(CoreError::Forbidden("Teacher role required".into()))
            })?;
        Ok(RequireTeacher(TeacherUser { auth, profile }))
    }
}
