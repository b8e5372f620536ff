//! Error types for Haven
//!
//! Shared error type for the model and client crates: draft validation
//! failures and configuration problems.

use thiserror::Error;

/// The main error type for Haven
#[derive(Debug, Error)]
pub enum HavenError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A required form field was left empty
    #[error("'{field}' is required")]
    FieldRequired { field: String },

    /// A field holds a value of the wrong shape
    #[error("Invalid value for '{field}': {message}")]
    FieldInvalid { field: String, message: String },

    /// An image-bearing field has no hosted URL yet
    #[error("An uploaded image is required for '{field}'")]
    ImageMissing { field: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),
}

impl HavenError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        HavenError::Validation(msg.into())
    }

    /// Create a required-field error
    pub fn required(field: impl Into<String>) -> Self {
        HavenError::FieldRequired {
            field: field.into(),
        }
    }

    /// Create an invalid-field error
    pub fn invalid(field: impl Into<String>, msg: impl Into<String>) -> Self {
        HavenError::FieldInvalid {
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Create a missing-image error
    pub fn image_missing(field: impl Into<String>) -> Self {
        HavenError::ImageMissing {
            field: field.into(),
        }
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            HavenError::Validation(_)
                | HavenError::FieldRequired { .. }
                | HavenError::FieldInvalid { .. }
                | HavenError::ImageMissing { .. }
        )
    }

    /// Check if this error is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            HavenError::InvalidConfig(_) | HavenError::MissingConfig(_)
        )
    }
}

/// Result type alias using HavenError
pub type HavenResult<T> = Result<T, HavenError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_required_field_error() {
        let err = HavenError::required("guestName");
        assert!(err.is_validation());
        assert!(!err.is_config());
        assert_eq!(err.to_string(), "'guestName' is required");
    }

    #[test]
    fn test_image_missing_error() {
        let err = HavenError::image_missing("imageUrl");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "An uploaded image is required for 'imageUrl'"
        );
    }

    #[test]
    fn test_config_errors() {
        let err = HavenError::MissingConfig("IMGBB_API_KEY".to_string());
        assert!(err.is_config());
        assert!(!err.is_validation());
        assert_eq!(
            err.to_string(),
            "Missing required configuration: IMGBB_API_KEY"
        );
    }

    #[test]
    fn test_invalid_field_error() {
        let err = HavenError::invalid("email", "Enter a valid email address");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Invalid value for 'email': Enter a valid email address"
        );
    }
}
