//! Room Pages
//!
//! `/all-rooms` lists every room, optionally narrowed to one category;
//! `/room/:slug` shows one room, looked up by its title slug.

use dioxus::prelude::*;
use haven_core::RoomCategory;
use haven_model::{Room, find_by_slug};

use crate::app::Route;
use crate::components::{EmptyState, Loading, RoomCard, price_label};
use crate::hooks::use_collection;

// ============================================================================
// All Rooms
// ============================================================================

#[component]
pub fn AllRoomsPage() -> Element {
    let rooms = use_collection::<Room>();
    let mut category: Signal<Option<RoomCategory>> = use_signal(|| None);

    let selected = *category.read();
    let shown = filter_by_category(&rooms.records, selected);

    rsx! {
        div {
            class: "max-w-6xl mx-auto px-6 py-12",
            h1 { class: "font-serif text-4xl mb-6", "Rooms & suites" }

            // Category filter
            div {
                class: "flex flex-wrap gap-2 mb-8",
                FilterChip {
                    label: "All",
                    active: selected.is_none(),
                    on_select: move |_| category.set(None),
                }
                for known in RoomCategory::KNOWN {
                    FilterChip {
                        key: "{known}",
                        label: known.label().to_string(),
                        active: selected.as_ref() == Some(known),
                        on_select: move |_| category.set(Some(known.clone())),
                    }
                }
            }

            if rooms.is_loading() {
                Loading {}
            } else if shown.is_empty() {
                EmptyState {
                    icon: "🛏️",
                    title: "No rooms to show",
                    hint: if rooms.is_failed() {
                        Some("We could not reach the reservations system. Please try again shortly.".to_string())
                    } else {
                        None
                    },
                }
            } else {
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for room in shown {
                        RoomCard { key: "{room.title}", room }
                    }
                }
            }
        }
    }
}

/// Rooms in one category, or all of them
fn filter_by_category(rooms: &[Room], category: Option<RoomCategory>) -> Vec<Room> {
    rooms
        .iter()
        .filter(|room| category.as_ref().is_none_or(|c| &room.category == c))
        .cloned()
        .collect()
}

#[component]
fn FilterChip(label: String, active: bool, on_select: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: if active {
                "px-3 py-1 rounded-full text-sm bg-amber-500 text-slate-900"
            } else {
                "px-3 py-1 rounded-full text-sm bg-slate-800 text-slate-300 hover:bg-slate-700"
            },
            onclick: move |_| on_select.call(()),
            "{label}"
        }
    }
}

// ============================================================================
// Room Detail
// ============================================================================

#[component]
pub fn RoomDetailPage(slug: String) -> Element {
    let rooms = use_collection::<Room>();

    if rooms.is_loading() {
        return rsx! { Loading {} };
    }

    let Some(room) = find_by_slug(&rooms.records, &slug).cloned() else {
        return rsx! {
            EmptyState {
                icon: "🔍",
                title: "Room not found",
                hint: "It may have been renamed. Have a look at all our rooms instead.",
            }
        };
    };

    let price = price_label(room.price);

    rsx! {
        article {
            class: "max-w-5xl mx-auto px-6 py-12",
            img { class: "w-full h-96 object-cover rounded-xl mb-8", src: "{room.image}", alt: "{room.title}" }

            div {
                class: "flex flex-wrap items-start justify-between gap-6",
                div {
                    class: "flex-1 min-w-[18rem]",
                    span { class: "text-xs uppercase tracking-wider text-amber-300", "{room.category}" }
                    h1 { class: "font-serif text-4xl mt-1 mb-4", "{room.title}" }
                    p { class: "text-slate-300 leading-relaxed whitespace-pre-line", "{room.description}" }
                }

                aside {
                    class: "w-72 bg-slate-800 rounded-xl border border-slate-700 p-6 flex flex-col gap-3",
                    div {
                        span { class: "text-2xl font-semibold text-amber-400", "{price}" }
                        span { class: "text-sm text-slate-400", " / night" }
                    }
                    if !room.area.is_empty() {
                        p { class: "text-sm text-slate-400", "Area: {room.area}" }
                    }
                    p { class: "text-xs text-slate-500", "Payment on arrival." }
                    Link {
                        class: "mt-2 text-center px-4 py-2 rounded-lg bg-amber-500 hover:bg-amber-400 text-slate-900 font-semibold",
                        to: Route::Reservation {},
                        "Book this room"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(title: &str, category: RoomCategory) -> Room {
        Room {
            title: title.to_string(),
            category,
            ..Default::default()
        }
    }

    #[test]
    fn test_filter_by_category() {
        let rooms = vec![
            room("Ocean Suite", RoomCategory::parse("Suite")),
            room("Garden Room", RoomCategory::parse("Deluxe")),
        ];

        assert_eq!(filter_by_category(&rooms, None).len(), 2);

        let suites = filter_by_category(&rooms, Some(RoomCategory::parse("Suite")));
        assert_eq!(suites.len(), 1);
        assert_eq!(suites[0].title, "Ocean Suite");
    }
}
