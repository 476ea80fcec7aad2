pub mod child;
pub mod classroom;
pub mod dashboard;
pub mod health;
pub mod profile;
pub mod schedule;
pub mod syllabus;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /me                                              get, upsert own profile
///
/// /dashboard/parent                                parent overview
/// /dashboard/teacher                               teacher overview (teacher)
///
/// /children                                        list own, add
/// /children/{id}                                   get, update, delete
/// /children/{child_id}/assessments                 list, record
/// /children/{child_id}/assessments/{id}            get, delete
/// /children/{child_id}/trails                      list, generate
/// /children/{child_id}/trails/{id}                 get, delete
///
/// /classes                                         list, create (teacher)
/// /classes/{id}                                    get, update, delete
/// /classes/{class_id}/students                     roster, add new student
/// /classes/{class_id}/students/{child_id}          assign, remove
/// /classes/{class_id}/planner                      weekly plan
///
/// /schedules                                       list, create (teacher)
/// /schedules/week                                  grouped by day
/// /schedules/{id}                                  update, delete
///
/// /syllabus                                        boards (public)
/// /syllabus/{board}                                standards
/// /syllabus/{board}/{standard}                     subjects
/// /syllabus/{board}/{standard}/{subject}           document
/// /syllabus/{board}/{standard}/{subject}/chapters/{chapter_id}
/// /syllabus/{board}/{standard}/{subject}/plan      weekly plan preview
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Caller's own profile.
        .nest("/me", profile::router())
        .nest("/dashboard", dashboard::router())
        // Children with assessments and trails.
        .nest("/children", child::router())
        // Teacher-owned classes with roster and planner.
        .nest("/classes", classroom::router())
        .nest("/schedules", schedule::router())
        // Public syllabus browser.
        .nest("/syllabus", syllabus::router())
}
