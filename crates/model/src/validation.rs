//! Form validation for Haven drafts
//!
//! Only required-field checks are performed, plus the syntactic email check
//! a browser `type="email"` input would apply. Dates are required to parse
//! but no cross-field ordering is enforced.

use std::sync::OnceLock;

use haven_core::{HavenError, HavenResult};
use regex::Regex;

use crate::image::ImageSlot;

// ============================================================================
// ValidationResult
// ============================================================================

/// Collected field errors for one form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    /// Errors in the order the fields were checked
    pub errors: Vec<FieldError>,
}

/// One failed field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// Wire name of the field (`guestName`, `imageUrl`, ...)
    pub field: &'static str,
    /// Human-readable message
    pub message: String,
}

impl ValidationResult {
    /// Create an empty (passing) result
    pub fn ok() -> Self {
        Self::default()
    }

    /// Whether every check passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record an error against a field
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Require a non-blank text value
    pub fn require(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.add(field, format!("{} is required", humanize(field)));
        }
        self
    }

    /// Require a value that parses as a calendar date
    pub fn require_date(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.add(field, format!("{} is required", humanize(field)));
        } else if crate::lenient::parse_date(value).is_none() {
            self.add(field, format!("{} must be a valid date", humanize(field)));
        }
        self
    }

    /// Require a syntactically valid email address
    pub fn require_email(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.add(field, format!("{} is required", humanize(field)));
        } else if !is_email(value) {
            self.add(field, "Enter a valid email address");
        }
        self
    }

    /// Require a numeric value (prices)
    pub fn require_amount(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.add(field, format!("{} is required", humanize(field)));
        } else if parse_amount(value).is_none() {
            self.add(field, format!("{} must be a number", humanize(field)));
        }
        self
    }

    /// Require an image slot that holds an uploaded URL and is not mid-upload
    pub fn require_image(&mut self, field: &'static str, slot: &ImageSlot) -> &mut Self {
        if slot.is_uploading() {
            self.add(field, "Wait for the image upload to finish");
        } else if slot.url().is_none() {
            self.add(field, "Upload an image first");
        }
        self
    }

    /// First error message for a field, for inline display
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Convert to a `HavenResult`, keeping the most specific error variant
    pub fn into_result(self, image_fields: &[&str]) -> HavenResult<()> {
        let Some(first) = self.errors.first() else {
            return Ok(());
        };
        if image_fields.contains(&first.field) {
            return Err(HavenError::image_missing(first.field));
        }
        if self.errors.len() == 1 {
            return Err(HavenError::invalid(first.field, first.message.clone()));
        }
        let msg = self
            .errors
            .iter()
            .map(|e| e.message.clone())
            .collect::<Vec<_>>()
            .join("; ");
        Err(HavenError::validation(msg))
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    // Same shape the HTML living standard uses for type="email"
    EMAIL.get_or_init(|| {
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        )
        .expect("email pattern is valid")
    })
}

/// Check an address the way a browser email input does
pub fn is_email(value: &str) -> bool {
    email_regex().is_match(value.trim())
}

/// Parse a price typed into a form
pub fn parse_amount(value: &str) -> Option<f64> {
    value
        .trim()
        .trim_start_matches('$')
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite() && *f >= 0.0)
}

/// `guestName` → `Guest name`
fn humanize(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 4);
    for (i, ch) in field.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.push(' ');
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_collects_messages() {
        let mut result = ValidationResult::ok();
        result.require("guestName", "  ").require("phone", "+880");
        assert!(!result.is_valid());
        assert_eq!(result.message_for("guestName"), Some("Guest name is required"));
        assert_eq!(result.message_for("phone"), None);
    }

    #[test]
    fn test_email_check() {
        assert!(is_email("a@x.com"));
        assert!(is_email("guest.name+tag@hotel.co"));
        assert!(!is_email("not-an-email"));
        assert!(!is_email("a@"));
        assert!(!is_email("@x.com"));
    }

    #[test]
    fn test_require_date() {
        let mut result = ValidationResult::ok();
        result.require_date("checkIn", "2026-02-24");
        assert!(result.is_valid());

        result.require_date("checkOut", "tomorrow");
        assert_eq!(
            result.message_for("checkOut"),
            Some("Check out must be a valid date")
        );
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("120"), Some(120.0));
        assert_eq!(parse_amount("$1,250.50"), Some(1250.5));
        assert_eq!(parse_amount("-5"), None);
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn test_into_result_prefers_image_error() {
        let mut result = ValidationResult::ok();
        result.require_image("image", &ImageSlot::empty());
        let err = result.into_result(&["image"]).unwrap_err();
        assert!(matches!(err, HavenError::ImageMissing { .. }));
    }

    #[test]
    fn test_into_result_joins_multiple() {
        let mut result = ValidationResult::ok();
        result.require("title", "").require("description", "");
        let err = result.into_result(&[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Title is required; Description is required"
        );
    }
}
