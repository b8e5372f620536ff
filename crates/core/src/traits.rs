//! Core traits for Haven
//!
//! This module defines the behaviours shared by every record type and every
//! form draft: identification within a collection, and required-field
//! validation before anything leaves the client.

use crate::error::HavenResult;
use crate::types::{Collection, RecordId};
use serde::{Serialize, de::DeserializeOwned};

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Drafts implement this so a record is never sent with a missing required
/// field or an image that has not been uploaded yet.
///
/// # Example
///
/// ```rust,ignore
/// use haven_core::{Validatable, HavenResult, HavenError};
///
/// struct GalleryDraft {
///     title: String,
///     image: Option<String>,
/// }
///
/// impl Validatable for GalleryDraft {
///     fn validate(&self) -> HavenResult<()> {
///         if self.image.is_none() {
///             return Err(HavenError::image_missing("image"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `HavenError` describing the first problem.
    fn validate(&self) -> HavenResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get all validation errors (for types that can have multiple errors)
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => vec![e.to_string()],
        }
    }
}

// ============================================================================
// Resource Trait
// ============================================================================

/// A record type stored in one of the backend collections
///
/// Implementors are plain serde structs. The identifier is `None` until the
/// backend has assigned one.
pub trait Resource:
    Serialize + DeserializeOwned + Clone + PartialEq + Send + Sync + 'static
{
    /// Collection this record type lives in
    const COLLECTION: Collection;

    /// Backend-assigned identifier, if the record has been persisted
    fn id(&self) -> Option<&RecordId>;

    /// Short human-readable label (titles, guest names) for dialogs and logs
    fn label(&self) -> String;

    /// Hosted image URL carried by the record, if the type has one
    fn image_url(&self) -> Option<&str> {
        None
    }
}
