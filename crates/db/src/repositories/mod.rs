//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod analytics_repo;
pub mod financial_repo;
pub mod release_repo;

pub use analytics_repo::AnalyticsRepo;
pub use financial_repo::FinancialRepo;
pub use release_repo::ReleaseRepo;
