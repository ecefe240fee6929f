//! HTTP handler modules, plus the method/preflight handlers shared by
//! every resource router.

pub mod analytics;
pub mod releases;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Fallback for HTTP methods a route does not support.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}

/// Explicit OPTIONS handler: an empty 200.
///
/// Real browser preflights are answered by the `CorsLayer` before reaching
/// the router; this covers bare OPTIONS requests so they never fall through
/// to the 405 fallback. CORS headers are attached by the layer.
pub async fn options_ok() -> StatusCode {
    StatusCode::OK
}
