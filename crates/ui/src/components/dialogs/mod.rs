//! # Dialog Components
//!
//! Modal dialogs rendered by `DialogOverlay` in `app.rs`.
//!
//! - **AlertDialog**: blocking alert naming a failed action
//! - **ConfirmDeleteDialog**: confirmation before any DELETE

// ============================================================================
// Module Declarations
// ============================================================================

pub mod alert;
pub mod confirm_delete;

// ============================================================================
// Re-exports
// ============================================================================

pub use alert::AlertDialog;
pub use confirm_delete::ConfirmDeleteDialog;
