use axum::routing::get;
use axum::Router;

use crate::handlers::syllabus;
use crate::state::AppState;

/// Routes mounted at `/syllabus`. No authentication.
///
/// ```text
/// GET    /                                              -> list_boards
/// GET    /{board}                                       -> list_standards
/// GET    /{board}/{standard}                            -> list_subjects
/// GET    /{board}/{standard}/{subject}                  -> get_document
/// GET    /{board}/{standard}/{subject}/chapters/{id}    -> get_chapter
/// GET    /{board}/{standard}/{subject}/plan             -> get_plan
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(syllabus::list_boards))
        .route("/{board}", get(syllabus::list_standards))
        .route("/{board}/{standard}", get(syllabus::list_subjects))
        .route("/{board}/{standard}/{subject}", get(syllabus::get_document))
        .route(
            "/{board}/{standard}/{subject}/chapters/{chapter_id}",
            get(syllabus::get_chapter),
        )
        .route("/{board}/{standard}/{subject}/plan", get(syllabus::get_plan))
}
