//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` struct matching the rows a query returns
//! - `Deserialize` DTOs for the write paths

pub mod analytics;
pub mod financial;
pub mod release;
