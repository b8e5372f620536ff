//! # Bookings Tab
//!
//! Every booking request as an expandable card. Status buttons send an
//! unconditional PATCH and patch the cached booking with the answer; the
//! list is never re-fetched to reconcile. Delete goes through the
//! confirmation dialog.

use std::collections::HashSet;

use dioxus::prelude::*;
use haven_client::{ApiClient, LoadState, change_status};
use haven_core::{BookingStatus, Collection, RecordId, StatusAction};
use haven_model::{Booking, format_currency};

use crate::components::{EmptyState, Loading, StatusBadge};
use crate::hooks::{fetch_collection, use_collection};
use crate::services::use_services;
use crate::state::{APP_STATE, DeleteTarget, Dialog, report_failure};

// ============================================================================
// Bookings Tab
// ============================================================================

#[component]
pub fn BookingsTab() -> Element {
    let services = use_services();
    let bookings = use_collection::<Booking>();
    let mut filter: Signal<Option<BookingStatus>> = use_signal(|| None);
    let mut expanded: Signal<HashSet<RecordId>> = use_signal(HashSet::new);
    // Booking whose PATCH is in flight
    let busy: Signal<Option<RecordId>> = use_signal(|| None);

    let selected = *filter.read();
    let shown = with_status(&bookings.records, selected);
    let open = expanded.read().clone();
    let in_flight = busy.read().clone();

    let refresh = {
        let api = services.api.clone();
        move |_| fetch_collection::<Booking>(api.clone(), true)
    };

    rsx! {
        div {
            class: "flex flex-col gap-4",

            // Toolbar
            div {
                class: "flex flex-wrap items-center gap-2",
                StatusFilter { label: "All".to_string(), active: selected.is_none(), on_select: move |_| filter.set(None) }
                for status in BookingStatus::ALL {
                    StatusFilter {
                        key: "{status}",
                        label: status.to_string(),
                        active: selected == Some(status),
                        on_select: move |_| filter.set(Some(status)),
                    }
                }
                div { class: "flex-1" }
                button {
                    class: "px-3 py-1.5 text-sm bg-slate-700 hover:bg-slate-600 rounded transition-colors disabled:opacity-50",
                    disabled: bookings.state == LoadState::Loading,
                    onclick: refresh,
                    "🔄 Refresh"
                }
            }

            if bookings.is_loading() {
                Loading {}
            } else if shown.is_empty() {
                EmptyState {
                    icon: "📅",
                    title: "No bookings here",
                    hint: if bookings.is_failed() { Some("The bookings could not be loaded. Try Refresh.".to_string()) } else { None },
                }
            } else {
                div {
                    class: "flex flex-col gap-3",
                    for booking in shown {
                        if let Some(id) = booking.id.clone() {
                            BookingCard {
                                key: "{id}",
                                is_open: open.contains(&id),
                                is_busy: in_flight.as_ref() == Some(&id),
                                booking,
                                on_toggle: move |id: RecordId| {
                                    let mut set = expanded.write();
                                    if !set.remove(&id) {
                                        set.insert(id);
                                    }
                                },
                                on_action: {
                                    let api = services.api.clone();
                                    move |(id, action): (RecordId, StatusAction)| {
                                        send_status(api.clone(), busy, id, action)
                                    }
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}

/// PATCH one booking and write the outcome into the cache
fn send_status(
    api: ApiClient,
    mut busy: Signal<Option<RecordId>>,
    id: RecordId,
    action: StatusAction,
) {
    if busy.peek().is_some() {
        return;
    }
    busy.set(Some(id.clone()));

    spawn(async move {
        match change_status(&api.bookings(), &id, action).await {
            Ok(change) => change.apply(&mut APP_STATE.write().cache),
            Err(err) => report_failure("Updating booking status", &err),
        }
        busy.set(None);
    });
}

/// Bookings with one status, or all of them
fn with_status(bookings: &[Booking], status: Option<BookingStatus>) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|b| status.is_none_or(|s| b.status == s))
        .cloned()
        .collect()
}

// ============================================================================
// Components
// ============================================================================

#[component]
fn StatusFilter(label: String, active: bool, on_select: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: if active {
                "px-3 py-1 rounded-full text-sm bg-indigo-600 text-white"
            } else {
                "px-3 py-1 rounded-full text-sm bg-slate-800 text-slate-300 hover:bg-slate-700"
            },
            onclick: move |_| on_select.call(()),
            "{label}"
        }
    }
}

#[component]
fn BookingCard(
    booking: Booking,
    is_open: bool,
    is_busy: bool,
    on_toggle: EventHandler<RecordId>,
    on_action: EventHandler<(RecordId, StatusAction)>,
) -> Element {
    let Some(id) = booking.id.clone() else {
        return rsx! {};
    };
    let stay = booking.stay_label();
    let nights = booking.nights().map(|n| format!("{n} night{}", if n == 1 { "" } else { "s" }));
    let total = booking.total_price.filter(|p| *p > 0.0).map(format_currency);
    let delete_target = DeleteTarget::new(Collection::Bookings, id.clone(), booking.guest_name.clone());
    let toggle_id = id.clone();

    rsx! {
        div {
            class: "bg-slate-800 rounded-xl border border-slate-700",

            // Summary row
            div {
                class: "flex items-center gap-4 p-4 cursor-pointer",
                onclick: move |_| on_toggle.call(toggle_id.clone()),

                span { class: "text-slate-500 w-4", if is_open { "▾" } else { "▸" } }
                div {
                    class: "flex-1 min-w-0",
                    p { class: "font-medium truncate", "{booking.guest_name}" }
                    p { class: "text-xs text-slate-400 truncate", "{booking.room_title} · {stay}" }
                }
                if let Some(total) = total {
                    span { class: "text-sm text-amber-400", "{total}" }
                }
                StatusBadge { status: booking.status }
            }

            if is_open {
                div {
                    class: "px-4 pb-4 pl-12 grid grid-cols-1 md:grid-cols-2 gap-x-8 gap-y-1 text-sm",
                    Detail { label: "Email", value: booking.email.clone() }
                    Detail { label: "Phone", value: booking.phone.clone() }
                    Detail { label: "Address", value: booking.address.clone() }
                    Detail { label: "Party", value: booking.members.clone() }
                    if let Some(nights) = nights {
                        Detail { label: "Length", value: nights }
                    }
                    if let Some(message) = booking.message.clone().filter(|m| !m.is_empty()) {
                        Detail { label: "Message", value: message }
                    }
                }
            }

            // Actions
            div {
                class: "flex flex-wrap items-center gap-2 px-4 py-3 border-t border-slate-700",
                for action in StatusAction::ALL {
                    button {
                        key: "{action.label()}",
                        class: action_class(action, booking.status),
                        disabled: is_busy,
                        onclick: {
                            let id = id.clone();
                            move |_| on_action.call((id.clone(), action))
                        },
                        "{action.label()}"
                    }
                }
                if is_busy {
                    span { class: "animate-spin text-sm", "⏳" }
                }
                div { class: "flex-1" }
                button {
                    class: "px-3 py-1 text-sm bg-red-600/80 hover:bg-red-700 rounded transition-colors",
                    disabled: is_busy,
                    onclick: move |_| {
                        APP_STATE
                            .write()
                            .ui
                            .show_dialog(Dialog::ConfirmDelete(delete_target.clone()));
                    },
                    "🗑️ Delete"
                }
            }
        }
    }
}

#[component]
fn Detail(label: String, value: String) -> Element {
    rsx! {
        p {
            span { class: "text-slate-500", "{label}: " }
            span { class: "text-slate-200", if value.is_empty() { "—" } else { "{value}" } }
        }
    }
}

/// Highlight the button matching the current status
fn action_class(action: StatusAction, current: BookingStatus) -> &'static str {
    if action.target() == current {
        "px-3 py-1 text-sm rounded bg-indigo-600 text-white disabled:opacity-50"
    } else {
        "px-3 py-1 text-sm rounded bg-slate-700 hover:bg-slate-600 disabled:opacity-50"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(id: &str, status: BookingStatus) -> Booking {
        Booking {
            id: Some(RecordId::new(id)),
            status,
            ..Default::default()
        }
    }

    #[test]
    fn test_with_status() {
        let bookings = vec![
            booking("b1", BookingStatus::Pending),
            booking("b2", BookingStatus::Confirmed),
            booking("b3", BookingStatus::Pending),
        ];

        assert_eq!(with_status(&bookings, None).len(), 3);
        let pending = with_status(&bookings, Some(BookingStatus::Pending));
        assert_eq!(pending.len(), 2);
        assert!(pending.iter().all(|b| b.status == BookingStatus::Pending));
        assert!(with_status(&bookings, Some(BookingStatus::Cancelled)).is_empty());
    }

    #[test]
    fn test_action_class_marks_current_status() {
        assert!(action_class(StatusAction::Confirm, BookingStatus::Confirmed).contains("indigo"));
        assert!(!action_class(StatusAction::Cancel, BookingStatus::Confirmed).contains("indigo"));
    }
}
