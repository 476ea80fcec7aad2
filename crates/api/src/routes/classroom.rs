//! Route definitions for the `/classes` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{classroom, planner, roster};
use crate::state::AppState;

/// Routes mounted at `/classes`.
///
/// ```text
/// GET    /                                   -> list
/// POST   /                                   -> create
/// GET    /{id}                               -> get_by_id
/// PUT    /{id}                               -> update
/// DELETE /{id}                               -> delete
///
/// GET    /{class_id}/students                -> roster::list
/// POST   /{class_id}/students                -> roster::create
/// PUT    /{class_id}/students/{child_id}     -> roster::assign
/// DELETE /{class_id}/students/{child_id}     -> roster::remove
///
/// GET    /{class_id}/planner                 -> planner::class_plan
/// ```
pub fn router() -> Router<AppState> {
    let roster_routes = Router::new()
        .route("/", get(roster::list).post(roster::create))
        .route("/{child_id}", put(roster::assign).delete(roster::remove));

    Router::new()
        .route("/", get(classroom::list).post(classroom::create))
        .route(
            "/{id}",
            get(classroom::get_by_id)
                .put(classroom::update)
                .delete(classroom::delete),
        )
        .nest("/{class_id}/students", roster_routes)
        .route("/{class_id}/planner", get(planner::class_plan))
}
