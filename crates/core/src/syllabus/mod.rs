//! Static curriculum data: board → standard → subject → chapter → topic.

pub mod diagnose;
pub mod heal;
pub mod linearize;
pub mod model;
pub mod store;

pub use linearize::{plan_week, weekly_breakdown, TopicStatus, WeeklyPlan};
pub use model::{Chapter, SyllabusDocument, Topic};
pub use store::SyllabusStore;
