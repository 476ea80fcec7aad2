//! Route definitions for the `/children` resource.
//!
//! Also nests assessment and trail routes under `/children/{child_id}/...`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{assessment, child, trail};
use crate::state::AppState;

/// Routes mounted at `/children`.
///
/// ```text
/// GET    /                                   -> list
/// POST   /                                   -> create
/// GET    /{id}                               -> get_by_id
/// PUT    /{id}                               -> update
/// DELETE /{id}                               -> delete
///
/// GET    /{child_id}/assessments             -> list
/// POST   /{child_id}/assessments             -> create
/// GET    /{child_id}/assessments/{id}        -> get_by_id
/// DELETE /{child_id}/assessments/{id}        -> delete
///
/// GET    /{child_id}/trails                  -> list
/// POST   /{child_id}/trails                  -> create
/// GET    /{child_id}/trails/{id}             -> get_by_id
/// DELETE /{child_id}/trails/{id}             -> delete
/// ```
pub fn router() -> Router<AppState> {
    let assessment_routes = Router::new()
        .route("/", get(assessment::list).post(assessment::create))
        .route(
            "/{id}",
            get(assessment::get_by_id).delete(assessment::delete),
        );

    let trail_routes = Router::new()
        .route("/", get(trail::list).post(trail::create))
        .route("/{id}", get(trail::get_by_id).delete(trail::delete));

    Router::new()
        .route("/", get(child::list).post(child::create))
        .route(
            "/{id}",
            get(child::get_by_id)
                .put(child::update)
                .delete(child::delete),
        )
        .nest("/{child_id}/assessments", assessment_routes)
        .nest("/{child_id}/trails", trail_routes)
}
