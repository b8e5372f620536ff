//! # UI Components
//!
//! Reusable Dioxus components shared by the public pages and the admin
//! shell.
//!
//! - **Navbar / Footer**: public site chrome
//! - **Cards**: catalog summaries (rooms, offers, packages, blog posts)
//! - **Inputs**: form input components (text, textarea, select)
//! - **Image Upload**: image field that uploads to the configured host
//! - **Inquiry Panel**: offer/package inquiry form
//! - **Record List**: admin list with Edit / Delete
//! - **Status Badge**: booking status pill
//! - **Dialogs**: blocking alert and delete confirmation
//!
//! ## Component Hierarchy
//!
//! ```text
//! PublicLayout
//! ├── Navbar
//! ├── page (Outlet)
//! │   ├── RoomCard / OfferCard / PackageCard / BlogCard
//! │   └── InquiryPanel (offer and package detail)
//! └── Footer
//!
//! AdminShell
//! ├── tab forms (inputs + ImageUpload)
//! ├── RecordList
//! └── booking cards (StatusBadge)
//!
//! DialogOverlay
//! ├── AlertDialog
//! └── ConfirmDeleteDialog
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod cards;
pub mod dialogs;
pub mod feedback;
pub mod image_upload;
pub mod inputs;
pub mod inquiry_form;
pub mod navbar;
pub mod record_list;
pub mod status_badge;

// ============================================================================
// Re-exports
// ============================================================================

// Catalog
pub use cards::{BlogCard, OfferCard, PackageCard, RoomCard, price_label};
pub use inquiry_form::InquiryPanel;
pub use navbar::{Footer, Navbar};

// Feedback
pub use feedback::{EmptyState, Loading};
pub use status_badge::StatusBadge;

// Admin
pub use image_upload::ImageUpload;
pub use record_list::{RecordList, RecordRow};

// Re-export input components
pub use inputs::{Select, SelectOption, TextArea, TextInput, field_error};

// Re-export dialog components
pub use dialogs::{AlertDialog, ConfirmDeleteDialog};
