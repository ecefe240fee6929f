pub mod analytics;
pub mod health;
pub mod releases;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /analytics     GET, OPTIONS              streaming + financial summary
/// /releases      GET, POST, PUT, OPTIONS   release list / create / status update
/// ```
///
/// Each resource router carries its own CORS layer so preflight responses
/// advertise exactly the methods that resource supports.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(analytics::router())
        .merge(releases::router())
}
