//! Repository integration tests against a real database.
//!
//! - Ownership scoping for classes, children and schedules
//! - Cascades: child -> assessments/trails, class -> roster un-assigned
//! - Unique and check constraints

use chrono::{NaiveDate, NaiveTime};
use schoolhub_db::models::assessment::CreateAssessment;
use schoolhub_db::models::child::{CreateChild, UpdateChild};
use schoolhub_db::models::classroom::{CreateClass, UpdateClass};
use schoolhub_db::models::profile::UpsertProfile;
use schoolhub_db::models::schedule::CreateScheduleItem;
use schoolhub_db::models::trail::CreateTrail;
use schoolhub_db::repositories::{
    AssessmentRepo, ChildRepo, ClassRepo, DashboardRepo, ProfileRepo, ScheduleRepo, TrailRepo,
};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn profile(pool: &PgPool, role: &str) -> Uuid {
    let id = Uuid::new_v4();
    ProfileRepo::upsert(
        pool,
        id,
        &UpsertProfile {
            full_name: format!("Test {role}"),
            role: role.to_string(),
        },
    )
    .await
    .unwrap();
    id
}

fn new_class(standard: i16, division: &str) -> CreateClass {
    CreateClass {
        name: format!("Class {standard}{division}"),
        board: None,
        standard,
        division: division.to_string(),
    }
}

fn new_child(name: &str) -> CreateChild {
    CreateChild {
        name: name.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(2015, 4, 2),
        gender: None,
    }
}

fn slot(day: i16, start: u32, subject: &str, class_name: &str) -> CreateScheduleItem {
    CreateScheduleItem {
        day_of_week: day,
        start_time: NaiveTime::from_hms_opt(start, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(start, 45, 0).unwrap(),
        subject: subject.to_string(),
        class_name: class_name.to_string(),
        room: None,
    }
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_profile_upsert_replaces(pool: PgPool) {
    let id = profile(&pool, "parent").await;
    let updated = ProfileRepo::upsert(
        &pool,
        id,
        &UpsertProfile {
            full_name: "  Asha Rao ".into(),
            role: "teacher".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.full_name, "Asha Rao");
    assert_eq!(updated.role, "teacher");

    let found = ProfileRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(found.role, "teacher");
}

// ---------------------------------------------------------------------------
// Classes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_class_crud_is_scoped_to_teacher(pool: PgPool) {
    let teacher = profile(&pool, "teacher").await;
    let other = profile(&pool, "teacher").await;

    let class = ClassRepo::create(&pool, teacher, &new_class(6, "A")).await.unwrap();
    assert_eq!(class.board, "cbse");

    assert!(ClassRepo::find(&pool, class.id, other).await.unwrap().is_none());
    assert!(ClassRepo::update(&pool, class.id, other, &UpdateClass::default())
        .await
        .unwrap()
        .is_none());
    assert!(!ClassRepo::delete(&pool, class.id, other).await.unwrap());

    let renamed = ClassRepo::update(
        &pool,
        class.id,
        teacher,
        &UpdateClass {
            name: Some("Sixth A".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(renamed.name, "Sixth A");
    assert_eq!(renamed.standard, 6);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_duplicate_class_violates_unique_constraint(pool: PgPool) {
    let teacher = profile(&pool, "teacher").await;
    ClassRepo::create(&pool, teacher, &new_class(7, "B")).await.unwrap();

    let err = ClassRepo::create(&pool, teacher, &new_class(7, "B"))
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some("uq_classes_teacher_standard_division"));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_deleting_class_unassigns_students(pool: PgPool) {
    let teacher = profile(&pool, "teacher").await;
    let class = ClassRepo::create(&pool, teacher, &new_class(5, "C")).await.unwrap();
    let child = ChildRepo::create(&pool, teacher, Some(class.id), &new_child("Ravi"))
        .await
        .unwrap();

    let summaries = ClassRepo::list_summaries(&pool, teacher).await.unwrap();
    assert_eq!(summaries[0].student_count, 1);

    assert!(ClassRepo::delete(&pool, class.id, teacher).await.unwrap());
    let child = ChildRepo::find_accessible(&pool, child.id, teacher)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(child.class_id, None);
}

// ---------------------------------------------------------------------------
// Children
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_child_access_for_owner_and_class_teacher(pool: PgPool) {
    let parent = profile(&pool, "parent").await;
    let teacher = profile(&pool, "teacher").await;
    let stranger = profile(&pool, "parent").await;
    let class = ClassRepo::create(&pool, teacher, &new_class(4, "A")).await.unwrap();

    let child = ChildRepo::create(&pool, parent, None, &new_child("Meera")).await.unwrap();
    assert!(ChildRepo::find_accessible(&pool, child.id, teacher)
        .await
        .unwrap()
        .is_none());

    // Teachers can only assign children they can already reach.
    assert!(ChildRepo::assign_to_class(&pool, child.id, teacher, class.id)
        .await
        .unwrap()
        .is_none());
    ChildRepo::assign_to_class(&pool, child.id, parent, class.id)
        .await
        .unwrap()
        .unwrap();

    assert!(ChildRepo::find_accessible(&pool, child.id, teacher)
        .await
        .unwrap()
        .is_some());
    assert!(ChildRepo::find_accessible(&pool, child.id, stranger)
        .await
        .unwrap()
        .is_none());

    let roster = ChildRepo::list_for_class(&pool, class.id).await.unwrap();
    assert_eq!(roster.len(), 1);

    assert!(ChildRepo::remove_from_class(&pool, child.id, class.id).await.unwrap());
    assert!(!ChildRepo::remove_from_class(&pool, child.id, class.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_child_update_and_cascade_delete(pool: PgPool) {
    let parent = profile(&pool, "parent").await;
    let child = ChildRepo::create(&pool, parent, None, &new_child("Kabir")).await.unwrap();

    let updated = ChildRepo::update(
        &pool,
        child.id,
        parent,
        &UpdateChild {
            gender: Some("male".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.name, "Kabir");
    assert_eq!(updated.gender.as_deref(), Some("male"));

    let assessment = AssessmentRepo::create(
        &pool,
        child.id,
        &CreateAssessment {
            answers: json!({"favourite_subject": "maths"}),
        },
    )
    .await
    .unwrap();
    let trail = TrailRepo::create(
        &pool,
        &CreateTrail {
            child_id: child.id,
            topic: "Fractions".into(),
            subject: Some("maths".into()),
            content: json!({"title": "Fractions", "summary": "", "activities": []}),
            model: "test-model".into(),
        },
    )
    .await
    .unwrap();

    let overview = DashboardRepo::parent_overview(&pool, parent).await.unwrap();
    assert_eq!(overview[0].assessment_count, 1);
    assert_eq!(overview[0].latest_trail_topic.as_deref(), Some("Fractions"));

    assert!(ChildRepo::delete(&pool, child.id, parent).await.unwrap());
    assert!(AssessmentRepo::find(&pool, child.id, assessment.id)
        .await
        .unwrap()
        .is_none());
    assert!(TrailRepo::find(&pool, child.id, trail.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Schedules
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_schedule_ordering_and_session_count(pool: PgPool) {
    let teacher = profile(&pool, "teacher").await;
    ScheduleRepo::create(&pool, teacher, &slot(3, 10, "Science", "6A")).await.unwrap();
    ScheduleRepo::create(&pool, teacher, &slot(1, 11, "science ", "6a")).await.unwrap();
    ScheduleRepo::create(&pool, teacher, &slot(1, 9, "Maths", "6A")).await.unwrap();

    let all = ScheduleRepo::list_for_teacher(&pool, teacher).await.unwrap();
    let order: Vec<(i16, String)> = all
        .iter()
        .map(|i| (i.day_of_week, i.subject.clone()))
        .collect();
    assert_eq!(
        order,
        [
            (1, "Maths".to_string()),
            (1, "science".to_string()),
            (3, "Science".to_string())
        ]
    );

    let monday = ScheduleRepo::list_for_day(&pool, teacher, 1).await.unwrap();
    assert_eq!(monday.len(), 2);

    let count = ScheduleRepo::count_sessions(&pool, teacher, "6A", "Science")
        .await
        .unwrap();
    assert_eq!(count, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_schedule_rejects_inverted_time_range(pool: PgPool) {
    let teacher = profile(&pool, "teacher").await;
    let mut item = slot(2, 10, "English", "7B");
    item.end_time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();

    let err = ScheduleRepo::create(&pool, teacher, &item).await.unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23514"));
}
