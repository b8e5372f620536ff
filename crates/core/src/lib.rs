//! # Haven Core
//!
//! Core types, traits, and error handling for Haven.
//!
//! This crate provides the foundational building blocks used by every other
//! crate in the workspace, including:
//!
//! - **Types**: Record identifiers, collections, booking status, categories
//! - **Traits**: `Resource` for backend records, `Validatable` for drafts
//! - **Errors**: Unified error handling with `HavenError` and `HavenResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{HavenError, HavenResult};
pub use traits::{Resource, Validatable};
pub use types::{BlogCategory, BookingStatus, Collection, RecordId, RoomCategory, StatusAction};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
