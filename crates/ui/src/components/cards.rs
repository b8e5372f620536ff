//! # Catalog Cards
//!
//! Summary cards for the public list pages and the home page previews.
//! Each card links to its detail route.

use dioxus::prelude::*;
use haven_model::{BlogPost, Offer, Package, Room, format_currency};

use crate::app::Route;

/// Price text for a card, "On request" when unset
pub fn price_label(price: Option<f64>) -> String {
    price
        .map(format_currency)
        .unwrap_or_else(|| "On request".to_string())
}

// ============================================================================
// Room
// ============================================================================

#[component]
pub fn RoomCard(room: Room) -> Element {
    let price = price_label(room.price);
    let slug = room.slug();

    rsx! {
        div {
            class: "card bg-slate-800 rounded-xl overflow-hidden border border-slate-700 flex flex-col",
            img { class: "h-48 w-full object-cover", src: "{room.image}", alt: "{room.title}" }
            div {
                class: "p-4 flex flex-col gap-2 flex-1",
                div {
                    class: "flex items-center justify-between",
                    h3 { class: "text-lg font-semibold", "{room.title}" }
                    span { class: "text-xs px-2 py-0.5 rounded bg-slate-700 text-slate-300", "{room.category}" }
                }
                p { class: "text-sm text-slate-400 line-clamp-3 flex-1", "{room.description}" }
                div {
                    class: "flex items-center justify-between mt-2",
                    span { class: "text-amber-400 font-semibold", "{price} / night" }
                    Link {
                        class: "text-sm text-amber-300 hover:text-amber-200",
                        to: Route::RoomDetail { slug },
                        "View details →"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Offer
// ============================================================================

#[component]
pub fn OfferCard(offer: Offer) -> Element {
    let price = price_label(offer.price);
    let id = offer.id.as_ref().map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        div {
            class: "card relative bg-slate-800 rounded-xl overflow-hidden border border-slate-700 flex flex-col",
            img { class: "h-44 w-full object-cover", src: "{offer.image_url}", alt: "{offer.title}" }
            if !offer.discount.is_empty() {
                span {
                    class: "absolute top-3 left-3 px-2 py-1 rounded bg-rose-600 text-xs font-bold",
                    "{offer.discount}"
                }
            }
            div {
                class: "p-4 flex flex-col gap-2 flex-1",
                h3 { class: "text-lg font-semibold", "{offer.title}" }
                p { class: "text-sm text-slate-400 line-clamp-2 flex-1", "{offer.description}" }
                p { class: "text-xs text-slate-500", "{offer.validity}" }
                div {
                    class: "flex items-center justify-between mt-2",
                    span { class: "text-amber-400 font-semibold", "{price}" }
                    Link {
                        class: "text-sm text-amber-300 hover:text-amber-200",
                        to: Route::OfferDetail { id },
                        "See offer →"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Package
// ============================================================================

#[component]
pub fn PackageCard(package: Package) -> Element {
    let price = price_label(package.price);
    let id = package.id.as_ref().map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        div {
            class: "card bg-slate-800 rounded-xl overflow-hidden border border-slate-700 flex flex-col",
            img { class: "h-44 w-full object-cover", src: "{package.image}", alt: "{package.title}" }
            div {
                class: "p-4 flex flex-col gap-2 flex-1",
                div {
                    class: "flex items-center justify-between",
                    h3 { class: "text-lg font-semibold", "{package.title}" }
                    span { class: "text-xs text-slate-400", "{package.duration}" }
                }
                ul {
                    class: "text-sm text-slate-400 list-disc list-inside flex-1",
                    for feature in package.features.iter().take(3) {
                        li { key: "{feature}", "{feature}" }
                    }
                }
                div {
                    class: "flex items-center justify-between mt-2",
                    span { class: "text-amber-400 font-semibold", "{price}" }
                    Link {
                        class: "text-sm text-amber-300 hover:text-amber-200",
                        to: Route::PackageDetail { id },
                        "View package →"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Blog
// ============================================================================

#[component]
pub fn BlogCard(post: BlogPost) -> Element {
    let id = post.id.as_ref().map(|id| id.to_string()).unwrap_or_default();
    let excerpt = post.excerpt(140);
    let published = post.published_label();

    rsx! {
        article {
            class: "card bg-slate-800 rounded-xl overflow-hidden border border-slate-700 flex flex-col",
            img { class: "h-44 w-full object-cover", src: "{post.image}", alt: "{post.title}" }
            div {
                class: "p-4 flex flex-col gap-2 flex-1",
                div {
                    class: "flex items-center gap-2 text-xs text-slate-500",
                    span { class: "px-2 py-0.5 rounded bg-slate-700 text-slate-300", "{post.category}" }
                    span { "{published}" }
                }
                h3 { class: "text-lg font-semibold", "{post.title}" }
                p { class: "text-sm text-slate-400 flex-1", "{excerpt}" }
                Link {
                    class: "text-sm text-amber-300 hover:text-amber-200 mt-2",
                    to: Route::BlogDetail { id },
                    "Read more →"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_label() {
        assert_eq!(price_label(Some(1200.0)), "$1,200");
        assert_eq!(price_label(None), "On request");
    }
}
