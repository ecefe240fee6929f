//! Financial ledger row types.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use tunedrop_core::types::DbId;

/// A `financials` row joined with its release title.
///
/// `amount` is cast to `double precision` in the query so it renders as a
/// plain JSON float.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FinancialEntry {
    pub id: DbId,
    pub amount: f64,
    pub platform: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub status: String,
    pub release_title: String,
}
