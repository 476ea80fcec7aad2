use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET    /parent     -> parent
/// GET    /teacher    -> teacher (?date=YYYY-MM-DD)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/parent", get(dashboard::parent))
        .route("/teacher", get(dashboard::teacher))
}
