//! Handler for the streaming analytics summary endpoint.
//!
//! One GET assembles four read queries into a single document: aggregated
//! stream counts, the financial ledger, and summary totals.

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;
use tunedrop_db::models::analytics::StreamAggregate;
use tunedrop_db::models::financial::FinancialEntry;
use tunedrop_db::repositories::{AnalyticsRepo, FinancialRepo};

use crate::error::AppResult;
use crate::query::UserScopeParams;
use crate::state::AppState;

/// Aggregate totals shown at the top of the analytics dashboard.
#[derive(Debug, Serialize)]
pub struct AnalyticsSummary {
    /// Total streams over the user's releases. Zero when there are none.
    pub total_streams: i64,
    /// Sum of ledger amounts still in `processing`.
    pub balance: f64,
    /// Sum of ledger amounts already `paid`.
    pub total_paid: f64,
}

/// Full response for `GET /api/v1/analytics`.
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub analytics: Vec<StreamAggregate>,
    pub financials: Vec<FinancialEntry>,
    pub summary: AnalyticsSummary,
}

/// GET /api/v1/analytics
///
/// Per-(date, platform, country) stream totals, the financial ledger, and
/// summary figures for one user.
pub async fn get_analytics(
    State(state): State<AppState>,
    Query(params): Query<UserScopeParams>,
) -> AppResult<Json<AnalyticsResponse>> {
    let analytics = AnalyticsRepo::stream_aggregates(&state.pool, params.user_id).await?;
    let financials = FinancialRepo::list_for_user(&state.pool, params.user_id).await?;

    let total_streams = AnalyticsRepo::total_streams(&state.pool, params.user_id).await?;
    let balance = FinancialRepo::sum_by_status(&state.pool, params.user_id, "processing").await?;
    let total_paid = FinancialRepo::sum_by_status(&state.pool, params.user_id, "paid").await?;

    Ok(Json(AnalyticsResponse {
        analytics,
        financials,
        summary: AnalyticsSummary {
            total_streams,
            balance,
            total_paid,
        },
    }))
}
