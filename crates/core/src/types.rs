/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Profiles are keyed by the auth provider's user id (the JWT `sub`).
pub type UserId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
