//! Well-known role name constants.
//!
//! These must match the `CHECK` constraint on `profiles.role`.

use crate::error::CoreError;

pub const ROLE_PARENT: &str = "parent";
pub const ROLE_TEACHER: &str = "teacher";

/// All valid profile roles.
pub const VALID_ROLES: &[&str] = &[ROLE_PARENT, ROLE_TEACHER];

/// Maximum length for a profile's display name.
pub const MAX_FULL_NAME_LEN: usize = 120;

/// Validate that `role` is one of the known profile roles.
pub fn validate_role(role: &str) -> Result<(), CoreError> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid role '{role}'. Must be one of: {}",
            VALID_ROLES.join(", ")
        )))
    }
}

/// Validate a profile display name: non-blank and within length limit.
pub fn validate_full_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Full name must not be empty".into()));
    }
    if trimmed.chars().count() > MAX_FULL_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Full name too long (max {MAX_FULL_NAME_LEN} chars)"
        )));
    }
    Ok(())
}
