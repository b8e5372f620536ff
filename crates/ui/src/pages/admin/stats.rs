//! Dashboard tab: headline figures and the latest booking requests

use dioxus::prelude::*;
use haven_model::Booking;

use crate::components::{Loading, StatusBadge};
use crate::hooks::use_dashboard;

/// Rows in the recent bookings table
const RECENT_COUNT: usize = 5;

#[component]
pub fn StatsTab() -> Element {
    let Some(data) = use_dashboard() else {
        return rsx! { Loading { label: "Crunching numbers…" } };
    };

    let summary = data.summary;
    let revenue = summary.revenue_label();
    let recent = most_recent(&data.bookings, RECENT_COUNT);

    rsx! {
        div {
            class: "flex flex-col gap-8",

            div {
                class: "grid grid-cols-2 xl:grid-cols-5 gap-4",
                StatTile { icon: "🛏️", label: "Rooms", value: summary.total_rooms.to_string() }
                StatTile { icon: "🎁", label: "Packages", value: summary.total_packages.to_string() }
                StatTile { icon: "📅", label: "Bookings today", value: summary.bookings_today.to_string() }
                StatTile { icon: "⏳", label: "Pending", value: summary.pending_bookings.to_string() }
                StatTile { icon: "💰", label: "Revenue", value: revenue }
            }

            section {
                h2 { class: "text-lg font-semibold mb-3", "Latest requests" }
                if recent.is_empty() {
                    p { class: "text-sm text-slate-400", "No bookings yet." }
                } else {
                    table {
                        class: "w-full text-sm bg-slate-800 rounded-xl overflow-hidden",
                        thead {
                            tr {
                                class: "text-left text-slate-400 border-b border-slate-700",
                                th { class: "p-3", "Guest" }
                                th { class: "p-3", "Room" }
                                th { class: "p-3", "Stay" }
                                th { class: "p-3", "Status" }
                            }
                        }
                        tbody {
                            for (i, booking) in recent.into_iter().enumerate() {
                                tr {
                                    key: "{i}",
                                    class: "border-b border-slate-700/50 last:border-0",
                                    td { class: "p-3", "{booking.guest_name}" }
                                    td { class: "p-3 text-slate-300", "{booking.room_title}" }
                                    td { class: "p-3 text-slate-400", "{booking.stay_label()}" }
                                    td { class: "p-3", StatusBadge { status: booking.status } }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatTile(icon: String, label: String, value: String) -> Element {
    rsx! {
        div {
            class: "bg-slate-800 rounded-xl border border-slate-700 p-4",
            div {
                class: "flex items-center gap-2 text-slate-400 text-sm",
                span { "{icon}" }
                span { "{label}" }
            }
            p { class: "text-2xl font-bold mt-2", "{value}" }
        }
    }
}

/// Newest bookings first; undated ones after every dated one
fn most_recent(bookings: &[Booking], count: usize) -> Vec<Booking> {
    let mut sorted = bookings.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(count);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn booking(guest: &str, hour: Option<u32>) -> Booking {
        Booking {
            guest_name: guest.to_string(),
            created_at: hour.map(|h| Utc.with_ymd_and_hms(2026, 10, 18, h, 0, 0).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_most_recent_orders_and_truncates() {
        let bookings = vec![
            booking("early", Some(8)),
            booking("undated", None),
            booking("late", Some(20)),
            booking("noon", Some(12)),
        ];

        let guests: Vec<_> = most_recent(&bookings, 3)
            .into_iter()
            .map(|b| b.guest_name)
            .collect();
        assert_eq!(guests, vec!["late", "noon", "early"]);
    }
}
