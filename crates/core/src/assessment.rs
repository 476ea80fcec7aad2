//! Assessment answer-map validation.

use crate::error::CoreError;

/// Maximum number of answered questions in one assessment.
pub const MAX_ANSWER_KEYS: usize = 200;

/// Validate a free-form answer map: a non-empty JSON object whose keys are
/// non-blank, with at most [`MAX_ANSWER_KEYS`] entries.
pub fn validate_answers(answers: &serde_json::Value) -> Result<(), CoreError> {
    let obj = answers
        .as_object()
        .ok_or_else(|| CoreError::Validation("answers must be a JSON object".into()))?;

    if obj.is_empty() {
        return Err(CoreError::Validation("answers must not be empty".into()));
    }
    if obj.len() > MAX_ANSWER_KEYS {
        return Err(CoreError::Validation(format!(
            "Too many answers: {} (max {MAX_ANSWER_KEYS})",
            obj.len()
        )));
    }
    if obj.keys().any(|k| k.trim().is_empty()) {
        return Err(CoreError::Validation(
            "answer keys must not be blank".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn object_with_answers_is_valid() {
        assert!(validate_answers(&json!({"favourite_subject": "science", "reads_daily": true})).is_ok());
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(validate_answers(&json!(["a", "b"])).is_err());
        assert!(validate_answers(&json!(null)).is_err());
    }

    #[test]
    fn empty_object_is_rejected() {
        assert!(validate_answers(&json!({})).is_err());
    }

    #[test]
    fn blank_key_is_rejected() {
        assert!(validate_answers(&json!({" ": 1})).is_err());
    }
}
