//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Read-only projections used by dashboards live in [`dashboard`].

pub mod assessment;
pub mod child;
pub mod classroom;
pub mod dashboard;
pub mod profile;
pub mod schedule;
pub mod trail;
