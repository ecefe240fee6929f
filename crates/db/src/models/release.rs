//! Release entity model and DTOs.
//!
//! A release is a distributable work (album or single) owned by a user.
//! Releases start life as `draft` and have their status advanced by the
//! review pipeline via the status update endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tunedrop_core::types::DbId;

/// A `releases` row joined with its track count, as returned by the list
/// query. `track_count` is a LEFT JOIN count and is `0` for a release with
/// no tracks, never null.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReleaseSummary {
    pub id: DbId,
    pub title: String,
    pub artist_name: String,
    pub release_type: String,
    pub status: String,
    pub release_date: Option<NaiveDate>,
    pub genre: String,
    pub track_count: i64,
    pub cover_url: Option<String>,
    pub upc: Option<String>,
}

/// DTO for creating a new release.
///
/// There is deliberately no `status` field: new releases are always created
/// as `draft`, whatever the client sends.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRelease {
    pub title: String,
    pub artist_name: String,
    pub release_type: String,
    #[serde(default = "default_genre")]
    pub genre: String,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default = "default_user_id")]
    pub user_id: DbId,
}

/// DTO for updating a release's status.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReleaseStatus {
    pub id: DbId,
    pub status: String,
}

fn default_genre() -> String {
    "Pop".to_string()
}

fn default_user_id() -> DbId {
    1
}
