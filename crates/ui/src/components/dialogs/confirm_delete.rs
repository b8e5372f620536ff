//! # Confirm Delete Dialog Component
//!
//! Every delete in the admin shell goes through this dialog. Nothing is
//! sent until the operator confirms; on success the record is dropped from
//! the shared cache without re-fetching the list.

use dioxus::prelude::*;
use haven_core::Collection;

use crate::services::{delete_record, forget_record, use_services};
use crate::state::{APP_STATE, DeleteTarget, notify, report_failure};

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDeleteDialogProps {
    /// The record to delete
    pub target: DeleteTarget,
}

// ============================================================================
// Main Component
// ============================================================================

/// Confirmation dialog for delete operations
#[component]
pub fn ConfirmDeleteDialog(props: ConfirmDeleteDialogProps) -> Element {
    let services = use_services();
    let mut is_deleting = use_signal(|| false);

    let title = props.target.title();
    let note = delete_note(props.target.collection);

    let target = props.target.clone();
    let handle_delete = move |_| {
        if *is_deleting.peek() {
            return;
        }
        is_deleting.set(true);

        let target = target.clone();
        let api = services.api.clone();
        spawn(async move {
            match delete_record(&api, &target).await {
                Ok(()) => {
                    tracing::info!(collection = %target.collection, id = %target.id, "record deleted");
                    let mut state = APP_STATE.write();
                    forget_record(&mut state.cache, &target);
                    state.ui.close_dialog();
                    drop(state);
                    notify(format!("Deleted {}", target.label));
                }
                Err(err) => {
                    is_deleting.set(false);
                    report_failure(&format!("Deleting {}", target.collection.noun()), &err);
                }
            }
        });
    };

    let handle_cancel = move |_| {
        APP_STATE.write().ui.close_dialog();
    };

    let deleting = *is_deleting.read();

    rsx! {
        div {
            class: "confirm-delete-dialog p-6",

            // Header with warning icon
            div {
                class: "flex items-start gap-4 mb-6",
                div {
                    class: "flex-shrink-0 w-12 h-12 rounded-full bg-red-500/20 flex items-center justify-center",
                    span { class: "text-2xl", "⚠️" }
                }
                div {
                    class: "flex-1",
                    h2 { class: "text-xl font-bold text-red-400 mb-2", "{title}" }
                    p { class: "text-slate-300", "This cannot be undone." }
                }
            }

            // Item being deleted
            div {
                class: "mb-4 p-3 bg-slate-700/50 rounded-lg border border-slate-600",
                div {
                    class: "flex items-center gap-2",
                    span { class: "text-slate-400", "Item:" }
                    span { class: "font-medium text-white", "{props.target.label}" }
                }
            }

            if let Some(note) = note {
                p {
                    class: "mb-4 p-3 bg-amber-500/10 border border-amber-500/30 rounded-lg text-sm text-amber-300",
                    "{note}"
                }
            }

            // Actions
            div {
                class: "flex justify-end gap-3",

                button {
                    r#type: "button",
                    class: "px-4 py-2 bg-slate-700 hover:bg-slate-600 rounded-lg transition-colors",
                    disabled: deleting,
                    onclick: handle_cancel,
                    "Cancel"
                }

                button {
                    r#type: "button",
                    class: "px-4 py-2 bg-red-600 hover:bg-red-700 disabled:bg-red-600/50 disabled:cursor-not-allowed rounded-lg transition-colors flex items-center gap-2",
                    disabled: deleting,
                    onclick: handle_delete,

                    if deleting {
                        span { class: "animate-spin", "⏳" }
                        "Deleting..."
                    } else {
                        span { "🗑️" }
                        "Delete"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Extra warning for collections other records refer to by value
fn delete_note(collection: Collection) -> Option<&'static str> {
    match collection {
        Collection::Rooms => {
            Some("Existing bookings keep the room title they were made with.")
        }
        Collection::Offers | Collection::Packages => {
            Some("Inquiries already received stay in the bookings list.")
        }
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_note() {
        assert!(delete_note(Collection::Rooms).is_some());
        assert!(delete_note(Collection::Packages).is_some());
        assert!(delete_note(Collection::Bookings).is_none());
        assert!(delete_note(Collection::Gallery).is_none());
    }
}
