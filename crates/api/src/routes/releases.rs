//! Route definitions for the releases endpoint.

use axum::http::Method;
use axum::routing::get;
use axum::Router;

use crate::handlers::{self, releases};
use crate::router::resource_cors_layer;
use crate::state::AppState;

/// Release routes mounted at `/releases`.
///
/// ```text
/// GET      /    -> list_releases
/// POST     /    -> create_release
/// PUT      /    -> update_release_status (id in body)
/// OPTIONS  /    -> empty 200 (preflight)
/// (other)  /    -> 405 {"error": "Method not allowed"}
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/releases",
            get(releases::list_releases)
                .post(releases::create_release)
                .put(releases::update_release_status)
                .options(handlers::options_ok)
                .fallback(handlers::method_not_allowed),
        )
        .layer(resource_cors_layer([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
}
