//! Repository for the `classes` table.
//!
//! Every query is scoped to the owning teacher.

use schoolhub_core::classroom::DEFAULT_BOARD;
use schoolhub_core::types::{DbId, UserId};
use sqlx::PgPool;

use crate::models::classroom::{Class, ClassSummary, CreateClass, UpdateClass};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, teacher_id, name, board, standard, division, created_at, updated_at";

/// Provides CRUD operations for classes.
pub struct ClassRepo;

impl ClassRepo {
    /// Insert a new class for `teacher_id`, returning the created row.
    ///
    /// If `board` is `None`, defaults to [`DEFAULT_BOARD`].
    pub async fn create(
        pool: &PgPool,
        teacher_id: UserId,
        input: &CreateClass,
    ) -> Result<Class, sqlx::Error> {
        let query = format!(
            "INSERT INTO classes (teacher_id, name, board, standard, division)
             VALUES ($1, $2, COALESCE($3, $4), $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Class>(&query)
            .bind(teacher_id)
            .bind(input.name.trim())
            .bind(&input.board)
            .bind(DEFAULT_BOARD)
            .bind(input.standard)
            .bind(&input.division)
            .fetch_one(pool)
            .await
    }

    /// Find a class by ID regardless of owner. Callers must already have
    /// established access through a related row.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Class>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes WHERE id = $1");
        sqlx::query_as::<_, Class>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find one of the teacher's classes by ID.
    pub async fn find(
        pool: &PgPool,
        id: DbId,
        teacher_id: UserId,
    ) -> Result<Option<Class>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes WHERE id = $1 AND teacher_id = $2");
        sqlx::query_as::<_, Class>(&query)
            .bind(id)
            .bind(teacher_id)
            .fetch_optional(pool)
            .await
    }

    /// List the teacher's classes with their roster sizes.
    pub async fn list_summaries(
        pool: &PgPool,
        teacher_id: UserId,
    ) -> Result<Vec<ClassSummary>, sqlx::Error> {
        sqlx::query_as::<_, ClassSummary>(
            "SELECT cl.id, cl.name, cl.board, cl.standard, cl.division,
                    COUNT(ch.id) AS student_count
             FROM classes cl
             LEFT JOIN children ch ON ch.class_id = cl.id
             WHERE cl.teacher_id = $1
             GROUP BY cl.id
             ORDER BY cl.standard, cl.division",
        )
        .bind(teacher_id)
        .fetch_all(pool)
        .await
    }

    /// Update a class. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the class does not exist or belongs to someone else.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        teacher_id: UserId,
        input: &UpdateClass,
    ) -> Result<Option<Class>, sqlx::Error> {
        let query = format!(
            "UPDATE classes SET
                name = COALESCE($3, name),
                board = COALESCE($4, board),
                standard = COALESCE($5, standard),
                division = COALESCE($6, division)
             WHERE id = $1 AND teacher_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Class>(&query)
            .bind(id)
            .bind(teacher_id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(&input.board)
            .bind(input.standard)
            .bind(&input.division)
            .fetch_optional(pool)
            .await
    }

    /// Delete a class. Its students stay, with `class_id` cleared.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, teacher_id: UserId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM classes WHERE id = $1 AND teacher_id = $2")
            .bind(id)
            .bind(teacher_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
