//! Streaming analytics row types.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// One aggregated analytics row: streams summed over all of a user's
/// releases for a (date, platform, country) tuple.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StreamAggregate {
    pub date: NaiveDate,
    pub platform: String,
    pub country: String,
    pub streams: i64,
}
