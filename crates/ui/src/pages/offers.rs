//! Offer Pages
//!
//! `/offers` lists current offers; `/offers/:id` shows one offer with the
//! inquiry form next to it.

use dioxus::prelude::*;
use haven_core::RecordId;
use haven_model::{InquirySubject, Offer};

use crate::components::{EmptyState, InquiryPanel, Loading, OfferCard, price_label};
use crate::hooks::{RecordView, use_collection, use_record};

// ============================================================================
// Offer List
// ============================================================================

#[component]
pub fn OffersPage() -> Element {
    let offers = use_collection::<Offer>();

    rsx! {
        div {
            class: "max-w-6xl mx-auto px-6 py-12",
            h1 { class: "font-serif text-4xl mb-2", "Special offers" }
            p { class: "text-slate-400 mb-8", "Seasonal rates and extras, while they last." }

            if offers.is_loading() {
                Loading {}
            } else if offers.is_empty() {
                EmptyState {
                    icon: "🏷️",
                    title: "No offers running right now",
                    hint: "Check back soon, or book a room at our regular rate.",
                }
            } else {
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for offer in offers.records {
                        OfferCard { key: "{offer.title}", offer }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Offer Detail
// ============================================================================

#[component]
pub fn OfferDetailPage(id: String) -> Element {
    let view = use_record::<Offer>(RecordId::new(id.clone()));

    let offer = match view {
        RecordView::Loading => return rsx! { Loading {} },
        RecordView::Missing(reason) => {
            return rsx! {
                EmptyState { icon: "🏷️", title: "Offer not available", hint: reason }
            };
        }
        RecordView::Ready(offer) => offer,
    };

    let price = price_label(offer.price);
    let subject = InquirySubject::from(&offer);

    rsx! {
        div {
            class: "max-w-6xl mx-auto px-6 py-12 grid grid-cols-1 lg:grid-cols-5 gap-10",

            article {
                class: "lg:col-span-3",
                div {
                    class: "relative mb-6",
                    img { class: "w-full h-80 object-cover rounded-xl", src: "{offer.image_url}", alt: "{offer.title}" }
                    if !offer.discount.is_empty() {
                        span {
                            class: "absolute top-4 left-4 px-3 py-1 rounded bg-rose-600 text-sm font-bold",
                            "{offer.discount}"
                        }
                    }
                }
                h1 { class: "font-serif text-4xl mb-2", "{offer.title}" }
                div {
                    class: "flex items-center gap-4 mb-6 text-sm",
                    span { class: "text-amber-400 text-xl font-semibold", "{price}" }
                    if !offer.validity.is_empty() {
                        span { class: "text-slate-400", "Valid: {offer.validity}" }
                    }
                }
                p { class: "text-slate-300 leading-relaxed whitespace-pre-line", "{offer.description}" }
            }

            div {
                key: "{id}",
                class: "lg:col-span-2",
                InquiryPanel { subject }
            }
        }
    }
}
