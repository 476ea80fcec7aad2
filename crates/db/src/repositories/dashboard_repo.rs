//! Read-only aggregate queries for the dashboards.

use schoolhub_core::types::UserId;
use sqlx::PgPool;

use crate::models::dashboard::ChildOverview;

pub struct DashboardRepo;

impl DashboardRepo {
    /// The parent's children with class name, assessment count and
    /// most recent trail.
    pub async fn parent_overview(
        pool: &PgPool,
        owner_id: UserId,
    ) -> Result<Vec<ChildOverview>, sqlx::Error> {
        sqlx::query_as::<_, ChildOverview>(
            "SELECT c.id, c.name, c.class_id, cl.name AS class_name,
                    (SELECT COUNT(*) FROM assessments a WHERE a.child_id = c.id)
                        AS assessment_count,
                    t.topic AS latest_trail_topic,
                    t.created_at AS latest_trail_at
             FROM children c
             LEFT JOIN classes cl ON cl.id = c.class_id
             LEFT JOIN LATERAL (
                 SELECT topic, created_at FROM trails
                 WHERE child_id = c.id
                 ORDER BY created_at DESC, id DESC
                 LIMIT 1
             ) t ON TRUE
             WHERE c.owner_id = $1
             ORDER BY c.created_at, c.id",
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await
    }
}
