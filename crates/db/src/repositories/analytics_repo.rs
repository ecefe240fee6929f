//! Read-only repository over the `analytics` table.
//!
//! Analytics rows are daily per-platform, per-country stream counts tied to
//! a release. Every query joins through `releases` so results are scoped to
//! the owning user.

use sqlx::PgPool;
use tunedrop_core::types::DbId;

use crate::models::analytics::StreamAggregate;

pub struct AnalyticsRepo;

impl AnalyticsRepo {
    /// Streams summed by (date, platform, country) over the user's
    /// releases, newest date first.
    pub async fn stream_aggregates(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<StreamAggregate>, sqlx::Error> {
        sqlx::query_as::<_, StreamAggregate>(
            "SELECT a.date, a.platform, a.country, SUM(a.streams)::bigint AS streams \
             FROM analytics a \
             JOIN releases r ON a.release_id = r.id \
             WHERE r.user_id = $1 \
             GROUP BY a.date, a.platform, a.country \
             ORDER BY a.date DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Total streams over all of the user's releases. Zero when none exist.
    pub async fn total_streams(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COALESCE(SUM(a.streams), 0)::bigint \
             FROM analytics a \
             JOIN releases r ON a.release_id = r.id \
             WHERE r.user_id = $1",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }
}
