//! Read-only repository over the `financials` ledger.

use sqlx::PgPool;
use tunedrop_core::types::DbId;

use crate::models::financial::FinancialEntry;

pub struct FinancialRepo;

impl FinancialRepo {
    /// The user's ledger entries joined to their release titles, most
    /// recent period first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<FinancialEntry>, sqlx::Error> {
        sqlx::query_as::<_, FinancialEntry>(
            "SELECT f.id, f.amount::double precision AS amount, f.platform, \
                    f.period_start, f.period_end, f.status, r.title AS release_title \
             FROM financials f \
             JOIN releases r ON f.release_id = r.id \
             WHERE f.user_id = $1 \
             ORDER BY f.period_end DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Sum of the user's ledger amounts with the given status
    /// (e.g. `processing` for the open balance, `paid` for paid-out
    /// totals). Zero when none match.
    pub async fn sum_by_status(
        pool: &PgPool,
        user_id: DbId,
        status: &str,
    ) -> Result<f64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COALESCE(SUM(f.amount), 0)::double precision \
             FROM financials f \
             WHERE f.user_id = $1 AND f.status = $2",
        )
        .bind(user_id)
        .bind(status)
        .fetch_one(pool)
        .await
    }
}
