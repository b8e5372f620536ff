//! Home Page Component
//!
//! Landing page: hero, featured rooms, current offers, a gallery strip and
//! the latest blog posts. Each section reads its collection from the
//! shared cache and quietly drops out when there is nothing to show.

use dioxus::prelude::*;
use haven_model::{BlogPost, GalleryImage, Offer, Room};

use crate::app::Route;
use crate::components::{BlogCard, Loading, OfferCard, RoomCard};
use crate::hooks::use_collection;

/// Cards per home page section
const PREVIEW_COUNT: usize = 3;

/// Images in the gallery strip
const STRIP_COUNT: usize = 8;

// ============================================================================
// Home Page Component
// ============================================================================

#[component]
pub fn HomePage() -> Element {
    let rooms = use_collection::<Room>();
    let offers = use_collection::<Offer>();
    let gallery = use_collection::<GalleryImage>();
    let blogs = use_collection::<BlogPost>();

    rsx! {
        div {
            class: "home-page",

            Hero {}

            // Featured rooms
            Section {
                heading: "Our rooms",
                more: Route::AllRooms {},
                if rooms.is_loading() {
                    Loading {}
                } else {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                        for room in rooms.records.into_iter().take(PREVIEW_COUNT) {
                            RoomCard { key: "{room.title}", room }
                        }
                    }
                }
            }

            if !offers.is_empty() {
                Section {
                    heading: "Special offers",
                    more: Route::Offers {},
                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                        for offer in offers.records.into_iter().take(PREVIEW_COUNT) {
                            OfferCard { key: "{offer.title}", offer }
                        }
                    }
                }
            }

            if !gallery.is_empty() {
                Section {
                    heading: "Gallery",
                    more: Route::Gallery {},
                    div {
                        class: "flex gap-4 overflow-x-auto pb-2",
                        for image in gallery.records.into_iter().take(STRIP_COUNT) {
                            img {
                                key: "{image.image}",
                                class: "h-48 w-72 object-cover rounded-lg shrink-0",
                                src: "{image.image}",
                                alt: "{image.title}",
                            }
                        }
                    }
                }
            }

            if !blogs.is_empty() {
                Section {
                    heading: "From the journal",
                    more: Route::Blogs {},
                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                        for post in blogs.records.into_iter().take(PREVIEW_COUNT) {
                            BlogCard { key: "{post.title}", post }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

#[component]
fn Hero() -> Element {
    rsx! {
        section {
            class: "relative h-[28rem] flex items-center justify-center text-center bg-gradient-to-b from-slate-800 to-slate-900",
            div {
                class: "max-w-2xl px-6",
                h1 { class: "font-serif text-5xl text-amber-200 mb-4", "Welcome to Haven" }
                p {
                    class: "text-lg text-slate-300 mb-8",
                    "Quiet rooms, slow mornings and a view worth waking up for."
                }
                div {
                    class: "flex justify-center gap-4",
                    Link {
                        class: "px-6 py-3 rounded-lg bg-amber-500 hover:bg-amber-400 text-slate-900 font-semibold",
                        to: Route::Reservation {},
                        "Reserve a room"
                    }
                    Link {
                        class: "px-6 py-3 rounded-lg border border-slate-600 hover:bg-slate-800",
                        to: Route::AllRooms {},
                        "Browse rooms"
                    }
                }
            }
        }
    }
}

#[component]
fn Section(heading: String, more: Route, children: Element) -> Element {
    rsx! {
        section {
            class: "max-w-6xl mx-auto px-6 py-12",
            div {
                class: "flex items-end justify-between mb-6",
                h2 { class: "font-serif text-3xl", "{heading}" }
                Link {
                    class: "text-sm text-amber-300 hover:text-amber-200",
                    to: more,
                    "See all →"
                }
            }
            {children}
        }
    }
}
