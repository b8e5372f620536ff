//! # Haven Model
//!
//! Domain records and form logic for Haven Hotel.
//!
//! ## Core Concepts
//!
//! - **Record**: a backend document (room, booking, package, offer, blog post, gallery image)
//! - **Draft**: the editable form side of a record, validated before any request is sent
//! - **ImageSlot**: an image field that only ever holds a URL an upload service returned
//! - **ReservationWizard**: the three-step public booking form
//! - **DashboardSummary**: headline figures for the admin stats tab
//!

// Module declarations
pub mod blog;
pub mod booking;
pub mod dashboard;
pub mod draft;
pub mod gallery;
pub mod image;
pub mod inquiry;
pub mod lenient;
pub mod offer;
pub mod package;
pub mod reservation;
pub mod room;
pub mod validation;

// Re-export commonly used types at crate root
pub use blog::{BlogDraft, BlogPost};
pub use booking::{Booking, StatusPatch};
pub use dashboard::{DashboardSummary, format_currency};
pub use draft::Draft;
pub use gallery::{GalleryDraft, GalleryImage};
pub use image::ImageSlot;
pub use inquiry::{InquiryDraft, InquiryForm, InquirySubject};
pub use offer::{Offer, OfferDraft};
pub use package::{Package, PackageDraft};
pub use reservation::{
    MEMBER_OPTIONS, ReservationDraft, ReservationWizard, WizardPhase, WizardStep,
};
pub use room::{Room, RoomDraft, distinct_titles, find_by_slug, format_amount, slugify};
pub use validation::{FieldError, ValidationResult, is_email};

// Re-export core types that are commonly used with the model
pub use haven_core::{
    BlogCategory, BookingStatus, Collection, HavenError, HavenResult, RecordId, Resource,
    RoomCategory, StatusAction, Validatable,
};

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::{
        // Records
        BlogPost,
        Booking,
        BookingStatus,
        // Re-exported from core
        Collection,
        // Drafts
        Draft,
        GalleryImage,
        HavenError,
        HavenResult,
        ImageSlot,
        Offer,
        Package,
        RecordId,
        Resource,
        Room,
        Validatable,
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_record_targets_its_collection() {
        assert_eq!(Room::COLLECTION, Collection::Rooms);
        assert_eq!(Booking::COLLECTION, Collection::Bookings);
        assert_eq!(Package::COLLECTION, Collection::Packages);
        assert_eq!(Offer::COLLECTION, Collection::Offers);
        assert_eq!(BlogPost::COLLECTION, Collection::Blogs);
        assert_eq!(GalleryImage::COLLECTION, Collection::Gallery);
    }
}
