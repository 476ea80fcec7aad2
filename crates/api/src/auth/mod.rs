//! Authentication primitives.
//!
//! - [`jwt`] -- verification of the auth provider's HS256 access tokens.

pub mod jwt;
