//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Ownership is part of the
//! `WHERE` clause: a row the caller may not touch behaves as missing.

pub mod assessment_repo;
pub mod child_repo;
pub mod class_repo;
pub mod dashboard_repo;
pub mod profile_repo;
pub mod schedule_repo;
pub mod trail_repo;

pub use assessment_repo::AssessmentRepo;
pub use child_repo::ChildRepo;
pub use class_repo::ClassRepo;
pub use dashboard_repo::DashboardRepo;
pub use profile_repo::ProfileRepo;
pub use schedule_repo::ScheduleRepo;
pub use trail_repo::TrailRepo;
