//! Class (standard + division) validation.

use crate::error::CoreError;

/// Maximum length for a class display name.
pub const MAX_CLASS_NAME_LEN: usize = 100;

/// Lowest and highest standard (grade) supported.
pub const MIN_STANDARD: i16 = 1;
pub const MAX_STANDARD: i16 = 12;

/// Maximum length for a division label (`A`, `B2`, `SCI`).
pub const MAX_DIVISION_LEN: usize = 3;

/// Board used when a class does not specify one.
pub const DEFAULT_BOARD: &str = "cbse";

/// Validate a class display name.
pub fn validate_class_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Class name is required".into()));
    }
    if trimmed.chars().count() > MAX_CLASS_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Class name too long (max {MAX_CLASS_NAME_LEN} chars)"
        )));
    }
    Ok(())
}

/// Validate that `standard` is within the supported range.
pub fn validate_standard(standard: i16) -> Result<(), CoreError> {
    if !(MIN_STANDARD..=MAX_STANDARD).contains(&standard) {
        return Err(CoreError::Validation(format!(
            "Standard must be between {MIN_STANDARD} and {MAX_STANDARD}, got {standard}"
        )));
    }
    Ok(())
}

/// Validate a division label: 1-3 ASCII alphanumerics.
pub fn validate_division(division: &str) -> Result<(), CoreError> {
    if division.is_empty()
        || division.len() > MAX_DIVISION_LEN
        || !division.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(CoreError::Validation(format!(
            "Invalid division '{division}'. Use 1-{MAX_DIVISION_LEN} letters or digits"
        )));
    }
    Ok(())
}

/// Canonical division label (upper-cased).
pub fn normalize_division(division: &str) -> String {
    division.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_range_is_enforced() {
        assert!(validate_standard(0).is_err());
        assert!(validate_standard(1).is_ok());
        assert!(validate_standard(12).is_ok());
        assert!(validate_standard(13).is_err());
    }

    #[test]
    fn division_must_be_short_alphanumeric() {
        assert!(validate_division("A").is_ok());
        assert!(validate_division("B2").is_ok());
        assert!(validate_division("").is_err());
        assert!(validate_division("ABCD").is_err());
        assert!(validate_division("A-").is_err());
    }

    #[test]
    fn division_is_upper_cased() {
        assert_eq!(normalize_division(" b "), "B");
    }

    #[test]
    fn blank_class_name_rejected() {
        assert!(validate_class_name(" ").is_err());
        assert!(validate_class_name("6 A Science").is_ok());
    }
}
