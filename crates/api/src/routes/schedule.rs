use axum::routing::{get, put};
use axum::Router;

use crate::handlers::schedule;
use crate::state::AppState;

/// Routes mounted at `/schedules`.
///
/// ```text
/// GET    /         -> list
/// POST   /         -> create
/// GET    /week     -> week
/// PUT    /{id}     -> update
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(schedule::list).post(schedule::create))
        .route("/week", get(schedule::week))
        .route("/{id}", put(schedule::update).delete(schedule::delete))
}
