//! Repository for the `trails` table.

use schoolhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::trail::{CreateTrail, Trail};

const COLUMNS: &str = "id, child_id, topic, subject, content, model, created_at";

/// Stores generated learning trails. Callers check access to the child.
pub struct TrailRepo;

impl TrailRepo {
    pub async fn create(pool: &PgPool, input: &CreateTrail) -> Result<Trail, sqlx::Error> {
        let query = format!(
            "INSERT INTO trails (child_id, topic, subject, content, model)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trail>(&query)
            .bind(input.child_id)
            .bind(&input.topic)
            .bind(&input.subject)
            .bind(&input.content)
            .bind(&input.model)
            .fetch_one(pool)
            .await
    }

    pub async fn find(
        pool: &PgPool,
        child_id: DbId,
        id: DbId,
    ) -> Result<Option<Trail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trails WHERE id = $1 AND child_id = $2");
        sqlx::query_as::<_, Trail>(&query)
            .bind(id)
            .bind(child_id)
            .fetch_optional(pool)
            .await
    }

    /// List a child's trails, newest first.
    pub async fn list_for_child(pool: &PgPool, child_id: DbId) -> Result<Vec<Trail>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM trails WHERE child_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Trail>(&query)
            .bind(child_id)
            .fetch_all(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, child_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trails WHERE id = $1 AND child_id = $2")
            .bind(id)
            .bind(child_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
