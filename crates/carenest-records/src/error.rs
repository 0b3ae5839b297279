//! Validation error carrying the offending field

use thiserror::Error;

/// The single error kind raised while turning untrusted payloads into
/// canonical records. Carries the offending field name and a reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid field `{field}`: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, "required field is missing")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field() {
        let err = ValidationError::new("healingScore", "must be in 0..=100");
        assert_eq!(
            err.to_string(),
            "invalid field `healingScore`: must be in 0..=100"
        );
    }

    #[test]
    fn test_missing_helper() {
        let err = ValidationError::missing("timestamp");
        assert_eq!(err.field, "timestamp");
        assert!(err.reason.contains("missing"));
    }
}
