//! Domain logic shared by the API server and the syllabus tool.
//!
//! This crate has zero internal deps: validators, the syllabus model and
//! its linearizer/repair passes, and trail prompt handling all live here so
//! they can be tested without a database or network.

pub mod assessment;
pub mod classroom;
pub mod error;
pub mod roles;
pub mod schedule;
pub mod student;
pub mod syllabus;
pub mod trail;
pub mod types;
