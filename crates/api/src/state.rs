use std::sync::Arc;

use schoolhub_ai::TrailGenerator;
use schoolhub_core::syllabus::SyllabusStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: schoolhub_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Read-only syllabus files under `config.syllabus_dir`.
    pub syllabus: SyllabusStore,
    /// Learning-trail generator (disabled when no AI key is configured).
    pub trail_generator: Arc<dyn TrailGenerator>,
}
