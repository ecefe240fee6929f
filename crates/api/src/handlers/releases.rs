//! Handlers for release listing, creation, and status updates.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tunedrop_core::error::CoreError;
use tunedrop_core::types::DbId;
use tunedrop_db::models::release::{CreateRelease, ReleaseSummary, UpdateReleaseStatus};
use tunedrop_db::repositories::ReleaseRepo;

use crate::error::{AppError, AppResult};
use crate::query::ReleaseListParams;
use crate::state::AppState;

/// Response for `GET /api/v1/releases`.
#[derive(Debug, Serialize)]
pub struct ReleaseListResponse {
    pub releases: Vec<ReleaseSummary>,
}

/// Response for a successful create: the new id plus a fixed marker.
#[derive(Debug, Serialize)]
pub struct ReleaseCreatedResponse {
    pub id: DbId,
    pub status: &'static str,
}

/// Response for a successful status update.
#[derive(Debug, Serialize)]
pub struct ReleaseUpdatedResponse {
    pub status: &'static str,
}

/// GET /api/v1/releases
///
/// List a user's releases with track counts, newest first, optionally
/// filtered to a single status.
pub async fn list_releases(
    State(state): State<AppState>,
    Query(params): Query<ReleaseListParams>,
) -> AppResult<Json<ReleaseListResponse>> {
    let releases =
        ReleaseRepo::list(&state.pool, params.user_id, params.status.as_deref()).await?;

    Ok(Json(ReleaseListResponse { releases }))
}

/// POST /api/v1/releases
///
/// Create a release. Status always starts as `draft`, whatever the client
/// sends; required fields are validated before any SQL runs.
pub async fn create_release(
    State(state): State<AppState>,
    Json(input): Json<CreateRelease>,
) -> AppResult<(StatusCode, Json<ReleaseCreatedResponse>)> {
    validate_create(&input)?;

    let id = ReleaseRepo::create(&state.pool, &input).await?;

    tracing::info!(release_id = id, user_id = input.user_id, "Release created");

    Ok((
        StatusCode::CREATED,
        Json(ReleaseCreatedResponse {
            id,
            status: "created",
        }),
    ))
}

/// PUT /api/v1/releases
///
/// Update only the status column of the matching release. There is no
/// existence check: a non-existent id affects zero rows and still reports
/// success.
pub async fn update_release_status(
    State(state): State<AppState>,
    Json(input): Json<UpdateReleaseStatus>,
) -> AppResult<Json<ReleaseUpdatedResponse>> {
    let rows = ReleaseRepo::update_status(&state.pool, input.id, &input.status).await?;

    tracing::info!(
        release_id = input.id,
        status = %input.status,
        rows,
        "Release status updated"
    );

    Ok(Json(ReleaseUpdatedResponse { status: "updated" }))
}

/// Reject empty required fields before touching the data layer.
fn validate_create(input: &CreateRelease) -> Result<(), AppError> {
    for (field, value) in [
        ("title", &input.title),
        ("artist_name", &input.artist_name),
        ("release_type", &input.release_type),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(format!(
                "{field} must not be empty"
            ))));
        }
    }
    Ok(())
}
