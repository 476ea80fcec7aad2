//! Repository for the `schedule_items` table.

use schoolhub_core::types::{DbId, UserId};
use sqlx::PgPool;

use crate::models::schedule::{CreateScheduleItem, ScheduleItem, UpdateScheduleItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, teacher_id, day_of_week, start_time, end_time, subject, \
                       class_name, room, created_at, updated_at";

/// Provides CRUD operations for a teacher's weekly timetable.
pub struct ScheduleRepo;

impl ScheduleRepo {
    pub async fn create(
        pool: &PgPool,
        teacher_id: UserId,
        input: &CreateScheduleItem,
    ) -> Result<ScheduleItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO schedule_items
                (teacher_id, day_of_week, start_time, end_time, subject, class_name, room)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ScheduleItem>(&query)
            .bind(teacher_id)
            .bind(input.day_of_week)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(input.subject.trim())
            .bind(input.class_name.trim())
            .bind(input.room.as_deref().map(str::trim))
            .fetch_one(pool)
            .await
    }

    pub async fn find(
        pool: &PgPool,
        id: DbId,
        teacher_id: UserId,
    ) -> Result<Option<ScheduleItem>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM schedule_items WHERE id = $1 AND teacher_id = $2");
        sqlx::query_as::<_, ScheduleItem>(&query)
            .bind(id)
            .bind(teacher_id)
            .fetch_optional(pool)
            .await
    }

    /// All of the teacher's items, ordered by day then start time.
    pub async fn list_for_teacher(
        pool: &PgPool,
        teacher_id: UserId,
    ) -> Result<Vec<ScheduleItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM schedule_items WHERE teacher_id = $1
             ORDER BY day_of_week, start_time, id"
        );
        sqlx::query_as::<_, ScheduleItem>(&query)
            .bind(teacher_id)
            .fetch_all(pool)
            .await
    }

    /// The teacher's items on one ISO weekday, ordered by start time.
    pub async fn list_for_day(
        pool: &PgPool,
        teacher_id: UserId,
        day_of_week: i16,
    ) -> Result<Vec<ScheduleItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM schedule_items WHERE teacher_id = $1 AND day_of_week = $2
             ORDER BY start_time, id"
        );
        sqlx::query_as::<_, ScheduleItem>(&query)
            .bind(teacher_id)
            .bind(day_of_week)
            .fetch_all(pool)
            .await
    }

    /// Weekly sessions the teacher has for a class and subject.
    /// Labels are compared case-insensitively, ignoring surrounding spaces.
    pub async fn count_sessions(
        pool: &PgPool,
        teacher_id: UserId,
        class_name: &str,
        subject: &str,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM schedule_items
             WHERE teacher_id = $1
               AND LOWER(TRIM(class_name)) = LOWER(TRIM($2))
               AND LOWER(TRIM(subject)) = LOWER(TRIM($3))",
        )
        .bind(teacher_id)
        .bind(class_name)
        .bind(subject)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Update an item. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        teacher_id: UserId,
        input: &UpdateScheduleItem,
    ) -> Result<Option<ScheduleItem>, sqlx::Error> {
        let query = format!(
            "UPDATE schedule_items SET
                day_of_week = COALESCE($3, day_of_week),
                start_time = COALESCE($4, start_time),
                end_time = COALESCE($5, end_time),
                subject = COALESCE($6, subject),
                class_name = COALESCE($7, class_name),
                room = COALESCE($8, room)
             WHERE id = $1 AND teacher_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ScheduleItem>(&query)
            .bind(id)
            .bind(teacher_id)
            .bind(input.day_of_week)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(input.subject.as_deref().map(str::trim))
            .bind(input.class_name.as_deref().map(str::trim))
            .bind(input.room.as_deref().map(str::trim))
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId, teacher_id: UserId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM schedule_items WHERE id = $1 AND teacher_id = $2")
            .bind(id)
            .bind(teacher_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
