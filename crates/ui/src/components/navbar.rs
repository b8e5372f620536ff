//! Public site chrome: top navigation and footer

use dioxus::prelude::*;

use crate::app::Route;

/// Links shown in the public navigation bar, in order
pub fn nav_links() -> Vec<(&'static str, Route)> {
    vec![
        ("Home", Route::Home {}),
        ("Rooms", Route::AllRooms {}),
        ("Offers", Route::Offers {}),
        ("Packages", Route::Packages {}),
        ("Gallery", Route::Gallery {}),
        ("Blog", Route::Blogs {}),
        ("About", Route::About {}),
    ]
}

#[component]
pub fn Navbar() -> Element {
    let current = use_route::<Route>();

    rsx! {
        header {
            class: "h-16 bg-slate-900/95 border-b border-slate-800 flex items-center px-6 gap-6 shrink-0 sticky top-0 z-40",

            Link {
                class: "flex items-center gap-2 mr-6",
                to: Route::Home {},
                span { class: "text-2xl", "🏨" }
                span { class: "font-serif text-xl tracking-wide text-amber-300", "Haven" }
            }

            nav {
                class: "flex items-center gap-1 flex-1",
                for (label, route) in nav_links() {
                    Link {
                        key: "{label}",
                        class: if route == current {
                            "px-3 py-1.5 rounded text-sm bg-slate-800 text-amber-300"
                        } else {
                            "px-3 py-1.5 rounded text-sm text-slate-300 hover:text-white hover:bg-slate-800"
                        },
                        to: route.clone(),
                        "{label}"
                    }
                }
            }

            Link {
                class: "px-4 py-2 rounded-lg bg-amber-500 hover:bg-amber-400 text-slate-900 text-sm font-semibold",
                to: Route::Reservation {},
                "Book now"
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().format("%Y").to_string();

    rsx! {
        footer {
            class: "bg-slate-950 border-t border-slate-800 px-6 py-8 text-sm text-slate-500",
            div {
                class: "flex flex-wrap items-center justify-between gap-4",
                span { "© {year} Haven Hotel. Payment is settled on arrival." }
                div {
                    class: "flex gap-4",
                    Link { class: "hover:text-slate-300", to: Route::About {}, "About" }
                    Link { class: "hover:text-slate-300", to: Route::Reservation {}, "Reservations" }
                    Link { class: "hover:text-slate-300", to: Route::AdminLogin {}, "Staff" }
                }
            }
        }
    }
}
