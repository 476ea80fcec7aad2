//! Repository for the `profiles` table.

use schoolhub_core::types::UserId;
use sqlx::PgPool;

use crate::models::profile::{Profile, UpsertProfile};

const COLUMNS: &str = "id, full_name, role, created_at, updated_at";

/// Provides lookup and upsert for user profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Find a profile by the auth provider's user id.
    pub async fn find_by_id(pool: &PgPool, id: UserId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert the profile, or replace name and role if it already exists.
    pub async fn upsert(
        pool: &PgPool,
        id: UserId,
        input: &UpsertProfile,
    ) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (id, full_name, role)
             VALUES ($1, $2, $3)
             ON CONFLICT (id) DO UPDATE SET
                full_name = EXCLUDED.full_name,
                role = EXCLUDED.role
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(input.full_name.trim())
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }
}
