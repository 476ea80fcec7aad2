//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireTeacher`] -- Requires a profile with the `teacher` role.

pub mod auth;
pub mod rbac;
