//! Repository for the `children` table.
//!
//! A child is *accessible* to a user who owns it or who teaches the class
//! it is assigned to.

use schoolhub_core::types::{DbId, UserId};
use sqlx::PgPool;

use crate::models::child::{Child, CreateChild, UpdateChild};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, owner_id, class_id, name, date_of_birth, gender, created_at, updated_at";

/// Same columns qualified with the `c` alias, for joined queries.
const QUALIFIED_COLUMNS: &str = "c.id, c.owner_id, c.class_id, c.name, c.date_of_birth, \
                                 c.gender, c.created_at, c.updated_at";

/// Access predicate over `c` (children) for the user bound at `$2`.
const ACCESSIBLE: &str =
    "(c.owner_id = $2 OR c.class_id IN (SELECT id FROM classes WHERE teacher_id = $2))";

/// Provides CRUD and roster operations for children.
pub struct ChildRepo;

impl ChildRepo {
    /// Insert a child owned by `owner_id`, optionally placed in `class_id`.
    pub async fn create(
        pool: &PgPool,
        owner_id: UserId,
        class_id: Option<DbId>,
        input: &CreateChild,
    ) -> Result<Child, sqlx::Error> {
        let query = format!(
            "INSERT INTO children (owner_id, class_id, name, date_of_birth, gender)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Child>(&query)
            .bind(owner_id)
            .bind(class_id)
            .bind(input.name.trim())
            .bind(input.date_of_birth)
            .bind(&input.gender)
            .fetch_one(pool)
            .await
    }

    /// Find a child the user may access.
    pub async fn find_accessible(
        pool: &PgPool,
        id: DbId,
        user_id: UserId,
    ) -> Result<Option<Child>, sqlx::Error> {
        let query =
            format!("SELECT {QUALIFIED_COLUMNS} FROM children c WHERE c.id = $1 AND {ACCESSIBLE}");
        sqlx::query_as::<_, Child>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List children owned by `owner_id`, oldest record first.
    pub async fn list_for_owner(
        pool: &PgPool,
        owner_id: UserId,
    ) -> Result<Vec<Child>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM children WHERE owner_id = $1 ORDER BY created_at, id");
        sqlx::query_as::<_, Child>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// List a class roster ordered by name.
    pub async fn list_for_class(pool: &PgPool, class_id: DbId) -> Result<Vec<Child>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM children WHERE class_id = $1 ORDER BY name, id");
        sqlx::query_as::<_, Child>(&query)
            .bind(class_id)
            .fetch_all(pool)
            .await
    }

    /// Update a child the user may access. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: UserId,
        input: &UpdateChild,
    ) -> Result<Option<Child>, sqlx::Error> {
        let query = format!(
            "UPDATE children c SET
                name = COALESCE($3, c.name),
                date_of_birth = COALESCE($4, c.date_of_birth),
                gender = COALESCE($5, c.gender)
             WHERE c.id = $1 AND {ACCESSIBLE}
             RETURNING {QUALIFIED_COLUMNS}"
        );
        sqlx::query_as::<_, Child>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(input.date_of_birth)
            .bind(&input.gender)
            .fetch_optional(pool)
            .await
    }

    /// Delete a child the user may access, with its assessments and trails.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: UserId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM children c WHERE c.id = $1 AND {ACCESSIBLE}");
        let result = sqlx::query(&query)
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Place an accessible child into `class_id`, moving it out of any
    /// previous class. Returns `None` if the child is not accessible.
    pub async fn assign_to_class(
        pool: &PgPool,
        id: DbId,
        user_id: UserId,
        class_id: DbId,
    ) -> Result<Option<Child>, sqlx::Error> {
        let query = format!(
            "UPDATE children c SET class_id = $3
             WHERE c.id = $1 AND {ACCESSIBLE}
             RETURNING {QUALIFIED_COLUMNS}"
        );
        sqlx::query_as::<_, Child>(&query)
            .bind(id)
            .bind(user_id)
            .bind(class_id)
            .fetch_optional(pool)
            .await
    }

    /// Clear `class_id` for a child currently in `class_id`.
    /// Returns `true` if the child was on that roster.
    pub async fn remove_from_class(
        pool: &PgPool,
        id: DbId,
        class_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE children SET class_id = NULL WHERE id = $1 AND class_id = $2")
                .bind(id)
                .bind(class_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
