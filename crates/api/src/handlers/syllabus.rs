//! Public syllabus browser (`/syllabus/...`).
//!
//! Files are read on the blocking pool on every request.

use axum::extract::{Path, Query, State};
use axum::Json;
use schoolhub_core::error::CoreError;
use schoolhub_core::syllabus::{plan_week, Chapter, SyllabusDocument, SyllabusStore, WeeklyPlan};

use crate::error::{AppError, AppResult};
use crate::query::WeekParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Run a store operation on the blocking pool.
pub(crate) async fn with_store<T, F>(state: &AppState, op: F) -> AppResult<T>
where
    T: Send + 'static,
    F: FnOnce(&SyllabusStore) -> Result<T, CoreError> + Send + 'static,
{
    let store = state.syllabus.clone();
    let result = tokio::task::spawn_blocking(move || op(&store))
        .await
        .map_err(|e| AppError::InternalError(format!("Syllabus task failed: {e}")))?;
    Ok(result?)
}

/// GET /api/v1/syllabus
pub async fn list_boards(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<String>>>> {
    let boards = with_store(&state, |s| s.list_boards()).await?;
    Ok(Json(DataResponse { data: boards }))
}

/// GET /api/v1/syllabus/{board}
pub async fn list_standards(
    State(state): State<AppState>,
    Path(board): Path<String>,
) -> AppResult<Json<DataResponse<Vec<String>>>> {
    let standards = with_store(&state, move |s| s.list_standards(&board)).await?;
    Ok(Json(DataResponse { data: standards }))
}

/// GET /api/v1/syllabus/{board}/{standard}
pub async fn list_subjects(
    State(state): State<AppState>,
    Path((board, standard)): Path<(String, String)>,
) -> AppResult<Json<DataResponse<Vec<String>>>> {
    let subjects = with_store(&state, move |s| s.list_subjects(&board, &standard)).await?;
    Ok(Json(DataResponse { data: subjects }))
}

/// GET /api/v1/syllabus/{board}/{standard}/{subject}
pub async fn get_document(
    State(state): State<AppState>,
    Path((board, standard, subject)): Path<(String, String, String)>,
) -> AppResult<Json<DataResponse<SyllabusDocument>>> {
    let doc = with_store(&state, move |s| s.load(&board, &standard, &subject)).await?;
    Ok(Json(DataResponse { data: doc }))
}

/// GET /api/v1/syllabus/{board}/{standard}/{subject}/chapters/{chapter_id}
pub async fn get_chapter(
    State(state): State<AppState>,
    Path((board, standard, subject, chapter_id)): Path<(String, String, String, String)>,
) -> AppResult<Json<DataResponse<Chapter>>> {
    let chapter = with_store(&state, move |s| {
        s.load_chapter(&board, &standard, &subject, &chapter_id)
    })
    .await?;
    Ok(Json(DataResponse { data: chapter }))
}

/// GET /api/v1/syllabus/{board}/{standard}/{subject}/plan?week=&per_week=
pub async fn get_plan(
    State(state): State<AppState>,
    Path((board, standard, subject)): Path<(String, String, String)>,
    Query(params): Query<WeekParams>,
) -> AppResult<Json<DataResponse<WeeklyPlan>>> {
    let week = params.week.unwrap_or(1);
    let per_week = params.per_week.unwrap_or(1);
    let plan = with_store(&state, move |s| {
        let doc = s.load(&board, &standard, &subject)?;
        plan_week(&doc, week, per_week)
    })
    .await?;
    Ok(Json(DataResponse { data: plan }))
}
