//! About Page Component

use dioxus::prelude::*;

use crate::app::Route;

/// Hotel facts shown as highlight tiles
const HIGHLIGHTS: &[(&str, &str, &str)] = &[
    ("🌊", "Seafront", "Every room is a short walk from the water."),
    ("🍽️", "Kitchen", "Breakfast is served until eleven, all year round."),
    ("🧖", "Spa", "Sauna, steam room and treatments on the lower floor."),
    ("🚗", "Arrival", "Free parking and airport transfers on request."),
];

#[component]
pub fn AboutPage() -> Element {
    rsx! {
        div {
            class: "max-w-4xl mx-auto px-6 py-12",
            h1 { class: "font-serif text-4xl mb-4", "About Haven" }
            p {
                class: "text-slate-300 leading-relaxed mb-10",
                "Haven is a small family-run hotel on the coast. We keep the number of rooms low so every guest gets a quiet stay and a proper welcome. Reservations are requests: our team confirms each one personally, and you pay on arrival."
            }

            div {
                class: "grid grid-cols-1 sm:grid-cols-2 gap-4 mb-10",
                for (icon, title, text) in HIGHLIGHTS.iter().copied() {
                    div {
                        key: "{title}",
                        class: "bg-slate-800 rounded-xl border border-slate-700 p-5",
                        span { class: "text-2xl", "{icon}" }
                        h3 { class: "font-semibold mt-2", "{title}" }
                        p { class: "text-sm text-slate-400 mt-1", "{text}" }
                    }
                }
            }

            Link {
                class: "px-6 py-3 rounded-lg bg-amber-500 hover:bg-amber-400 text-slate-900 font-semibold",
                to: Route::Reservation {},
                "Plan your stay"
            }
        }
    }
}
