//! Child/student input validation and derived values.

use chrono::{Datelike, NaiveDate};

use crate::error::CoreError;

/// Maximum length for a child's name.
pub const MAX_CHILD_NAME_LEN: usize = 100;

pub const GENDER_MALE: &str = "male";
pub const GENDER_FEMALE: &str = "female";
pub const GENDER_OTHER: &str = "other";

/// All accepted gender values.
pub const VALID_GENDERS: &[&str] = &[GENDER_MALE, GENDER_FEMALE, GENDER_OTHER];

/// Validate a child's name: non-blank and within length limit.
pub fn validate_child_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Child name is required".into()));
    }
    if trimmed.chars().count() > MAX_CHILD_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Child name too long (max {MAX_CHILD_NAME_LEN} chars)"
        )));
    }
    Ok(())
}

/// Validate a date of birth against `today`.
///
/// Dates in the future and dates before 1900-01-01 are rejected.
pub fn validate_date_of_birth(dob: NaiveDate, today: NaiveDate) -> Result<(), CoreError> {
    if dob > today {
        return Err(CoreError::Validation(
            "Date of birth cannot be in the future".into(),
        ));
    }
    if dob.year() < 1900 {
        return Err(CoreError::Validation(
            "Date of birth must be on or after 1900-01-01".into(),
        ));
    }
    Ok(())
}

/// Validate an optional gender value.
pub fn validate_gender(gender: Option<&str>) -> Result<(), CoreError> {
    match gender {
        None => Ok(()),
        Some(g) if VALID_GENDERS.contains(&g) => Ok(()),
        Some(g) => Err(CoreError::Validation(format!(
            "Invalid gender '{g}'. Must be one of: {}",
            VALID_GENDERS.join(", ")
        ))),
    }
}

/// Whole years between `dob` and `on`. Zero if `on` precedes `dob`.
pub fn age_on(dob: NaiveDate, on: NaiveDate) -> u32 {
    if on < dob {
        return 0;
    }
    let mut years = on.year() - dob.year();
    if (on.month(), on.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    years.max(0) as u32
}
