//! Form drafts
//!
//! A draft is the editable, not-yet-persisted side of a record. It owns
//! the raw text a form collects and turns into a record only after every
//! required field and image slot checks out.

use haven_core::{HavenResult, Resource};

use crate::validation::ValidationResult;

/// Editable form state for one record type
pub trait Draft {
    /// Record produced by this draft
    type Record: Resource;

    /// Wire names of image-bearing fields, checked by `require_image`
    const IMAGE_FIELDS: &'static [&'static str];

    /// Run every field check and collect the failures
    fn check(&self) -> ValidationResult;

    /// Convert to a record without the identifier.
    ///
    /// Callers go through [`Draft::build`], which validates first.
    fn to_record(&self) -> Self::Record;

    /// Whether the form may be submitted right now
    fn is_submittable(&self) -> bool {
        self.check().is_valid()
    }

    /// Validate, then build the record
    fn build(&self) -> HavenResult<Self::Record> {
        self.check().into_result(Self::IMAGE_FIELDS)?;
        Ok(self.to_record())
    }
}

/// Implement `haven_core::Validatable` for drafts by delegating to `check`
macro_rules! validatable_draft {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl haven_core::Validatable for $ty {
                fn validate(&self) -> haven_core::HavenResult<()> {
                    $crate::draft::Draft::check(self)
                        .into_result(<$ty as $crate::draft::Draft>::IMAGE_FIELDS)
                }

                fn validation_errors(&self) -> Vec<String> {
                    $crate::draft::Draft::check(self)
                        .errors
                        .into_iter()
                        .map(|e| e.message)
                        .collect()
                }
            }
        )+
    };
}

pub(crate) use validatable_draft;
