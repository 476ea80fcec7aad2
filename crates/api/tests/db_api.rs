//! End-to-end flows against a real database.
//!
//! Each test gets a fresh migrated database from `#[sqlx::test]`.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, put_auth, put_json_auth, token_for};
use schoolhub_ai::{AiError, GeneratedTrail, TrailGenerator};
use schoolhub_core::trail::{StudentProfile, TrailActivity, TrailPlan, TrailRequest};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

/// Generator that echoes the profile back instead of calling a model.
struct EchoGenerator;

#[async_trait]
impl TrailGenerator for EchoGenerator {
    async fn generate(
        &self,
        profile: &StudentProfile,
        req: &TrailRequest,
    ) -> Result<GeneratedTrail, AiError> {
        Ok(GeneratedTrail {
            plan: TrailPlan {
                title: req.topic.clone(),
                summary: format!(
                    "{} in class {}",
                    profile.name,
                    profile.standard.map(|s| s.to_string()).unwrap_or_default()
                ),
                activities: vec![TrailActivity {
                    title: "Explore".into(),
                    description: "Look around".into(),
                    minutes: Some(20),
                }],
            },
            model: "echo".into(),
        })
    }
}

async fn sign_up(app: &axum::Router, role: &str) -> String {
    let token = token_for(Uuid::new_v4());
    let response = put_json_auth(
        app.clone(),
        "/api/v1/me",
        json!({"full_name": format!("Test {role}"), "role": role}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    token
}

async fn create_id(app: &axum::Router, uri: &str, body: serde_json::Value, token: &str) -> i64 {
    let response = post_json_auth(app.clone(), uri, body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED, "POST {uri}");
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn profile_is_created_then_read(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, dir.path());
    let token = token_for(Uuid::new_v4());

    let response = get_auth(app.clone(), "/api/v1/me", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = put_json_auth(
        app.clone(),
        "/api/v1/me",
        json!({"full_name": "Asha Rao", "role": "parent"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get_auth(app, "/api/v1/me", &token).await).await;
    assert_eq!(json["data"]["full_name"], "Asha Rao");
    assert_eq!(json["data"]["role"], "parent");
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn child_needs_a_profile_first(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, dir.path());
    let token = token_for(Uuid::new_v4());

    let response =
        post_json_auth(app.clone(), "/api/v1/children", json!({"name": "Meera"}), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("profile"));

    let parent = sign_up(&app, "parent").await;
    create_id(&app, "/api/v1/children", json!({"name": "Meera"}), &parent).await;
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn classes_are_teacher_only_and_unique(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, dir.path());
    let parent = sign_up(&app, "parent").await;
    let teacher = sign_up(&app, "teacher").await;

    let response = get_auth(app.clone(), "/api/v1/classes", &parent).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let class = json!({"name": "6A", "standard": 6, "division": "a"});
    let id = create_id(&app, "/api/v1/classes", class.clone(), &teacher).await;

    let response = post_json_auth(app.clone(), "/api/v1/classes", class, &teacher).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(get_auth(app.clone(), &format!("/api/v1/classes/{id}"), &teacher).await).await;
    assert_eq!(json["data"]["board"], "cbse");
    assert_eq!(json["data"]["division"], "A");

    let other = sign_up(&app, "teacher").await;
    let response = get_auth(app, &format!("/api/v1/classes/{id}"), &other).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn roster_and_child_access(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, dir.path());
    let parent = sign_up(&app, "parent").await;
    let teacher = sign_up(&app, "teacher").await;

    let class_id = create_id(
        &app,
        "/api/v1/classes",
        json!({"name": "6B", "standard": 6, "division": "B"}),
        &teacher,
    )
    .await;
    let child_id = create_id(&app, "/api/v1/children", json!({"name": "Meera"}), &parent).await;

    // The teacher cannot pull in a child they cannot already reach.
    let uri = format!("/api/v1/classes/{class_id}/students/{child_id}");
    let response = put_auth(app.clone(), &uri, &teacher).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let student_id = create_id(
        &app,
        &format!("/api/v1/classes/{class_id}/students"),
        json!({"name": "Kabir", "gender": "male"}),
        &teacher,
    )
    .await;
    let json = body_json(
        get_auth(app.clone(), &format!("/api/v1/classes/{class_id}/students"), &teacher).await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let json = body_json(get_auth(app.clone(), "/api/v1/classes", &teacher).await).await;
    assert_eq!(json["data"][0]["student_count"], 1);

    // The parent sees only their own child.
    let response = get_auth(app.clone(), &format!("/api/v1/children/{student_id}"), &parent).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let uri = format!("/api/v1/classes/{class_id}/students/{student_id}");
    let response = delete_auth(app.clone(), &uri, &teacher).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = get_auth(app, &format!("/api/v1/children/{student_id}"), &teacher).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn planner_paces_by_timetable(pool: PgPool) {
    let dir = common::syllabus_fixture();
    let app = common::build_test_app(pool, dir.path());
    let teacher = sign_up(&app, "teacher").await;

    let class_id = create_id(
        &app,
        "/api/v1/classes",
        json!({"name": "6A", "standard": 6, "division": "A"}),
        &teacher,
    )
    .await;
    for day in [1, 3] {
        create_id(
            &app,
            "/api/v1/schedules",
            json!({
                "day_of_week": day,
                "start_time": "09:00:00",
                "end_time": "09:45:00",
                "subject": "Science",
                "class_name": "6A",
            }),
            &teacher,
        )
        .await;
    }

    let uri = format!("/api/v1/classes/{class_id}/planner?subject=Science&week=2");
    let response = get_auth(app.clone(), &uri, &teacher).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["pace_source"], "timetable");
    assert_eq!(json["data"]["per_week"], 2);
    assert_eq!(json["data"]["completed_count"], 2);

    let uri = format!("/api/v1/classes/{class_id}/planner?subject=science&per_week=5");
    let json = body_json(get_auth(app.clone(), &uri, &teacher).await).await;
    assert_eq!(json["data"]["pace_source"], "query");
    assert_eq!(json["data"]["in_progress_count"], 5);

    let json = body_json(get_auth(app.clone(), "/api/v1/schedules/week", &teacher).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 7);

    let json =
        body_json(get_auth(app, "/api/v1/dashboard/teacher?date=2026-10-19", &teacher).await).await;
    assert_eq!(json["data"]["day_name"], "Monday");
    assert_eq!(json["data"]["totals"]["class_count"], 1);
    assert_eq!(json["data"]["totals"]["sessions_today"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn trail_generation_is_stored(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app_with(pool, dir.path(), Arc::new(EchoGenerator));
    let parent = sign_up(&app, "parent").await;

    let child_id = create_id(
        &app,
        "/api/v1/children",
        json!({"name": "Meera", "date_of_birth": "2015-04-12"}),
        &parent,
    )
    .await;
    create_id(
        &app,
        &format!("/api/v1/children/{child_id}/assessments"),
        json!({"answers": {"favourite_subject": "science"}}),
        &parent,
    )
    .await;

    let response = post_json_auth(
        app.clone(),
        &format!("/api/v1/children/{child_id}/trails"),
        json!({"topic": "Magnets", "subject": "Science"}),
        &parent,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["model"], "echo");
    assert_eq!(json["data"]["content"]["title"], "Magnets");

    let json = body_json(get_auth(app, "/api/v1/dashboard/parent", &parent).await).await;
    assert_eq!(json["data"]["child_count"], 1);
    assert_eq!(json["data"]["children"][0]["assessment_count"], 1);
    assert_eq!(json["data"]["children"][0]["latest_trail_topic"], "Magnets");
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn trail_generation_unavailable_without_generator(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, dir.path());
    let parent = sign_up(&app, "parent").await;
    let child_id = create_id(&app, "/api/v1/children", json!({"name": "Meera"}), &parent).await;

    let response = post_json_auth(
        app,
        &format!("/api/v1/children/{child_id}/trails"),
        json!({"topic": "Magnets"}),
        &parent,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
