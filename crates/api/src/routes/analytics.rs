//! Route definitions for the analytics endpoint.

use axum::http::Method;
use axum::routing::get;
use axum::Router;

use crate::handlers::{self, analytics};
use crate::router::resource_cors_layer;
use crate::state::AppState;

/// Analytics routes mounted at `/analytics`.
///
/// ```text
/// GET      /    -> get_analytics
/// OPTIONS  /    -> empty 200 (preflight)
/// (other)  /    -> 405 {"error": "Method not allowed"}
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/analytics",
            get(analytics::get_analytics)
                .options(handlers::options_ok)
                .fallback(handlers::method_not_allowed),
        )
        .layer(resource_cors_layer([Method::GET, Method::OPTIONS]))
}
