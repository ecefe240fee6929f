//! Repository for the `releases` table.

use sqlx::PgPool;
use tunedrop_core::types::DbId;

use crate::models::release::{CreateRelease, ReleaseSummary};

/// Column list shared by list queries.
const SUMMARY_COLUMNS: &str = "r.id, r.title, r.artist_name, r.release_type, r.status, \
     r.release_date, r.genre, COUNT(t.id) AS track_count, r.cover_url, r.upc";

/// Provides list/create/status-update operations for releases.
pub struct ReleaseRepo;

impl ReleaseRepo {
    /// List a user's releases with their track counts, newest first.
    ///
    /// When `status` is given, the filter clause is appended to the same
    /// parameterized query rather than duplicating the whole statement.
    pub async fn list(
        pool: &PgPool,
        user_id: DbId,
        status: Option<&str>,
    ) -> Result<Vec<ReleaseSummary>, sqlx::Error> {
        let mut query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM releases r \
             LEFT JOIN tracks t ON r.id = t.release_id \
             WHERE r.user_id = $1"
        );
        if status.is_some() {
            query.push_str(" AND r.status = $2");
        }
        query.push_str(" GROUP BY r.id ORDER BY r.created_at DESC");

        let mut q = sqlx::query_as::<_, ReleaseSummary>(&query).bind(user_id);
        if let Some(status) = status {
            q = q.bind(status);
        }
        q.fetch_all(pool).await
    }

    /// Insert a new release with status `draft`, returning its id.
    pub async fn create(pool: &PgPool, input: &CreateRelease) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO releases \
                (user_id, title, artist_name, release_type, genre, release_date, status) \
             VALUES ($1, $2, $3, $4, $5, $6, 'draft') \
             RETURNING id",
        )
        .bind(input.user_id)
        .bind(&input.title)
        .bind(&input.artist_name)
        .bind(&input.release_type)
        .bind(&input.genre)
        .bind(input.release_date)
        .fetch_one(pool)
        .await
    }

    /// Set a release's status, touching no other column.
    ///
    /// Returns the number of rows affected. Updating a non-existent id
    /// affects zero rows and is not an error.
    pub async fn update_status(pool: &PgPool, id: DbId, status: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE releases SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
