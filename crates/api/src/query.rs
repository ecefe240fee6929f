//! Shared query parameter types for API handlers.

use serde::Deserialize;
use tunedrop_core::types::DbId;

/// Scopes a read to one user (`?user_id=`).
///
/// Defaults to user 1, matching the platform's single-tenant development
/// setup.
#[derive(Debug, Deserialize)]
pub struct UserScopeParams {
    #[serde(default = "default_user_id")]
    pub user_id: DbId,
}

/// Parameters for listing releases: user scope plus an optional status
/// filter (`?user_id=&status=`).
#[derive(Debug, Deserialize)]
pub struct ReleaseListParams {
    #[serde(default = "default_user_id")]
    pub user_id: DbId,
    pub status: Option<String>,
}

fn default_user_id() -> DbId {
    1
}
