//! Application State Management for Haven
//!
//! Centralized state using Dioxus 0.7 Signals. The global [`APP_STATE`]
//! holds the shared record cache every screen reads from, plus UI state:
//! the active admin tab, the blocking dialog and the status toast.
//!
//! The operator session is not kept here. It is provided to the
//! component tree as a context signal by `App` (see [`use_session`]).

use dioxus::prelude::*;
use haven_client::{ClientError, ResourceCache, Session};
use haven_core::{Collection, RecordId};

// ============================================================================
// Admin Tabs
// ============================================================================

/// Tabs of the admin shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Stats,
    AddRoom,
    ManageRooms,
    Bookings,
    Gallery,
    Offers,
    Blogs,
    Packages,
}

impl AdminTab {
    /// Tabs in sidebar order
    pub const ALL: [AdminTab; 8] = [
        AdminTab::Stats,
        AdminTab::AddRoom,
        AdminTab::ManageRooms,
        AdminTab::Bookings,
        AdminTab::Gallery,
        AdminTab::Offers,
        AdminTab::Blogs,
        AdminTab::Packages,
    ];

    /// Get the display name for this tab
    pub fn display_name(&self) -> &'static str {
        match self {
            AdminTab::Stats => "Dashboard",
            AdminTab::AddRoom => "Add Room",
            AdminTab::ManageRooms => "Manage Rooms",
            AdminTab::Bookings => "Bookings",
            AdminTab::Gallery => "Gallery",
            AdminTab::Offers => "Offers",
            AdminTab::Blogs => "Blogs",
            AdminTab::Packages => "Packages",
        }
    }

    /// Get the icon emoji for this tab
    pub fn icon(&self) -> &'static str {
        match self {
            AdminTab::Stats => "📊",
            AdminTab::AddRoom => "➕",
            AdminTab::ManageRooms => "🛏️",
            AdminTab::Bookings => "📅",
            AdminTab::Gallery => "🖼️",
            AdminTab::Offers => "🏷️",
            AdminTab::Blogs => "📝",
            AdminTab::Packages => "🎁",
        }
    }

    /// Collection managed by this tab, if any
    pub fn collection(&self) -> Option<Collection> {
        match self {
            AdminTab::Stats => None,
            AdminTab::AddRoom | AdminTab::ManageRooms => Some(Collection::Rooms),
            AdminTab::Bookings => Some(Collection::Bookings),
            AdminTab::Gallery => Some(Collection::Gallery),
            AdminTab::Offers => Some(Collection::Offers),
            AdminTab::Blogs => Some(Collection::Blogs),
            AdminTab::Packages => Some(Collection::Packages),
        }
    }
}

// ============================================================================
// Dialogs
// ============================================================================

/// What a delete confirmation is about
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteTarget {
    pub collection: Collection,
    pub id: RecordId,
    /// Label shown in the dialog ("Ocean Suite")
    pub label: String,
}

impl DeleteTarget {
    pub fn new(collection: Collection, id: RecordId, label: impl Into<String>) -> Self {
        Self {
            collection,
            id,
            label: label.into(),
        }
    }

    /// Dialog heading ("Delete room?")
    pub fn title(&self) -> String {
        format!("Delete {}?", self.collection.noun())
    }
}

/// Dialog types
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    /// Blocking alert after a failed write
    Alert { title: String, message: String },
    /// Delete confirmation
    ConfirmDelete(DeleteTarget),
}

// ============================================================================
// Status Messages
// ============================================================================

/// Status toast message
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Status message level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusLevel {
    /// Tailwind classes for the toast
    pub fn class(&self) -> &'static str {
        match self {
            StatusLevel::Info => "bg-sky-600",
            StatusLevel::Success => "bg-emerald-600",
            StatusLevel::Warning => "bg-amber-600",
            StatusLevel::Error => "bg-rose-600",
        }
    }
}

// ============================================================================
// UI State
// ============================================================================

/// UI-specific state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// Active admin shell tab
    pub admin_tab: AdminTab,
    /// Active dialog (if any)
    pub active_dialog: Option<Dialog>,
    /// Status toast
    pub status_message: Option<StatusMessage>,
}

impl UiState {
    /// Create new UI state
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the admin tab
    pub fn select_tab(&mut self, tab: AdminTab) {
        self.admin_tab = tab;
    }

    /// Show a dialog
    pub fn show_dialog(&mut self, dialog: Dialog) {
        self.active_dialog = Some(dialog);
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = None;
    }

    /// Open a blocking alert
    pub fn alert(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.show_dialog(Dialog::Alert {
            title: title.into(),
            message: message.into(),
        });
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            level,
        });
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

// ============================================================================
// App State
// ============================================================================

/// Main application state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Records of every collection
    pub cache: ResourceCache,
    /// UI state
    pub ui: UiState,
}

impl AppState {
    /// Create a new application state
    pub fn new() -> Self {
        Self::default()
    }

    /// Log a failed write and open the blocking alert naming the action
    pub fn report_failure(&mut self, action: &str, err: &ClientError) {
        tracing::error!(action, error = %err, "request failed");
        self.ui.alert(format!("{action} failed"), err.user_message());
    }
}

/// Global application state signal
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

/// Shorthand for [`AppState::report_failure`] on the global state
pub fn report_failure(action: &str, err: &ClientError) {
    APP_STATE.write().report_failure(action, err);
}

/// Shorthand for a success toast
pub fn notify(message: impl Into<String>) {
    APP_STATE
        .write()
        .ui
        .set_status(message, StatusLevel::Success);
}

// ============================================================================
// Session Context
// ============================================================================

/// Operator session provided by `App`
pub type SessionSignal = Signal<Option<Session>>;

/// Hook to access the session context
pub fn use_session() -> SessionSignal {
    use_context::<SessionSignal>()
}

/// The session, if one exists and has not expired
pub fn active_session(session: &Option<Session>) -> Option<&Session> {
    session.as_ref().filter(|s| s.is_valid())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_admin_tabs() {
        assert_eq!(AdminTab::default(), AdminTab::Stats);
        assert_eq!(AdminTab::ALL.len(), 8);
        assert_eq!(AdminTab::ManageRooms.collection(), Some(Collection::Rooms));
        assert_eq!(AdminTab::AddRoom.collection(), Some(Collection::Rooms));
        assert_eq!(AdminTab::Stats.collection(), None);
        assert_eq!(AdminTab::Bookings.display_name(), "Bookings");
    }

    #[test]
    fn test_ui_state_dialogs() {
        let mut ui = UiState::new();
        assert!(ui.active_dialog.is_none());

        ui.alert("Save failed", "Server unavailable");
        assert_eq!(
            ui.active_dialog,
            Some(Dialog::Alert {
                title: "Save failed".into(),
                message: "Server unavailable".into(),
            })
        );

        ui.close_dialog();
        assert!(ui.active_dialog.is_none());
    }

    #[test]
    fn test_delete_target_title() {
        let target = DeleteTarget::new(Collection::Bookings, "b1".into(), "A. Rahman");
        assert_eq!(target.title(), format!("Delete {}?", Collection::Bookings.noun()));
        assert_eq!(target.label, "A. Rahman");
    }

    #[test]
    fn test_report_failure_opens_alert() {
        let mut state = AppState::new();
        let err = ClientError::Status {
            status: 500,
            message: "Database offline".into(),
        };
        state.report_failure("Save room", &err);

        match state.ui.active_dialog {
            Some(Dialog::Alert { title, message }) => {
                assert_eq!(title, "Save room failed");
                assert_eq!(message, "Database offline");
            }
            other => panic!("expected alert, got {other:?}"),
        }
    }

    #[test]
    fn test_active_session_filters_expired() {
        assert!(active_session(&None).is_none());

        let live = Some(Session::new("admin", "t", Duration::from_secs(3600)));
        assert!(active_session(&live).is_some());

        let mut expired = Session::new("admin", "t", Duration::from_secs(3600));
        expired.expires_at = expired.issued_at - chrono::Duration::seconds(1);
        assert!(active_session(&Some(expired)).is_none());
    }

    #[test]
    fn test_status_message() {
        let mut ui = UiState::new();
        ui.set_status("Room saved", StatusLevel::Success);
        assert_eq!(ui.status_message.as_ref().map(|m| m.level), Some(StatusLevel::Success));
        ui.clear_status();
        assert!(ui.status_message.is_none());
    }
}
