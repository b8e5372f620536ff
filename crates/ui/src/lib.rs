//! # Haven UI
//!
//! Dioxus Desktop UI for Haven Hotel.
//!
//! This crate provides both surfaces of the application: the public
//! catalog with its reservation wizard, and the admin back-office.
//!
//! ## Features
//!
//! - Room, offer, package, blog and gallery pages over the shared cache
//! - Three-step reservation wizard
//! - Offer and package inquiry form
//! - Tabbed admin shell with create/edit forms and image upload
//! - Booking status management and dashboard figures
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod file_ops;
pub mod hooks;
pub mod pages;
pub mod services;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use haven_client;
pub use haven_model;

// Re-export main components
pub use app::{App, Route};
pub use services::Services;
pub use state::{APP_STATE, AdminTab, AppState, DeleteTarget, Dialog, StatusLevel, UiState};

use haven_client::HavenConfig;

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Haven";

/// Application display title
pub const TITLE: &str = "Haven Hotel";

/// CSS styles for the application
/// This is the compiled Tailwind CSS included at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Haven desktop application
///
/// Builds the backend client, image host and authenticator from `config`
/// and hands them to the component tree as a root context.
///
/// # Example
///
/// ```rust,ignore
/// fn main() -> anyhow::Result<()> {
///     let config = haven_client::HavenConfig::from_env()?;
///     haven_ui::launch(&config)
/// }
/// ```
pub fn launch(config: &HavenConfig) -> anyhow::Result<()> {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    let services = Services::from_config(config)?;

    // Build custom head with embedded CSS
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    // Configure and launch Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1400.0, 900.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(800.0, 600.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .with_context(services)
        .launch(App);

    Ok(())
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_title() {
        assert!(TITLE.contains(NAME));
    }

    #[test]
    fn test_styles_loaded() {
        assert!(!STYLES.is_empty());
        assert!(STYLES.contains("tailwindcss"));
    }
}
