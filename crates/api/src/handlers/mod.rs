pub mod assessment;
pub mod child;
pub mod classroom;
pub mod dashboard;
pub mod planner;
pub mod profile;
pub mod roster;
pub mod schedule;
pub mod syllabus;
pub mod trail;
