//! Repository for the `assessments` table.
//!
//! Callers check access to the child first; these queries are scoped by
//! `child_id` only.

use schoolhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::assessment::{Assessment, CreateAssessment};

const COLUMNS: &str = "id, child_id, answers, created_at";

pub struct AssessmentRepo;

impl AssessmentRepo {
    pub async fn create(
        pool: &PgPool,
        child_id: DbId,
        input: &CreateAssessment,
    ) -> Result<Assessment, sqlx::Error> {
        let query = format!(
            "INSERT INTO assessments (child_id, answers) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assessment>(&query)
            .bind(child_id)
            .bind(&input.answers)
            .fetch_one(pool)
            .await
    }

    /// Find an assessment belonging to `child_id`.
    pub async fn find(
        pool: &PgPool,
        child_id: DbId,
        id: DbId,
    ) -> Result<Option<Assessment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assessments WHERE id = $1 AND child_id = $2");
        sqlx::query_as::<_, Assessment>(&query)
            .bind(id)
            .bind(child_id)
            .fetch_optional(pool)
            .await
    }

    /// List a child's assessments, newest first.
    pub async fn list_for_child(
        pool: &PgPool,
        child_id: DbId,
    ) -> Result<Vec<Assessment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assessments WHERE child_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Assessment>(&query)
            .bind(child_id)
            .fetch_all(pool)
            .await
    }

    /// The child's most recent assessment, if any.
    pub async fn latest_for_child(
        pool: &PgPool,
        child_id: DbId,
    ) -> Result<Option<Assessment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assessments WHERE child_id = $1
             ORDER BY created_at DESC, id DESC LIMIT 1"
        );
        sqlx::query_as::<_, Assessment>(&query)
            .bind(child_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, child_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assessments WHERE id = $1 AND child_id = $2")
            .bind(id)
            .bind(child_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
