//! Package Pages
//!
//! `/packages` lists every package; `/packages/:id` shows the full feature
//! list and the inquiry form.

use dioxus::prelude::*;
use haven_core::RecordId;
use haven_model::{InquirySubject, Package};

use crate::components::{EmptyState, InquiryPanel, Loading, PackageCard, price_label};
use crate::hooks::{RecordView, use_collection, use_record};

// ============================================================================
// Package List
// ============================================================================

#[component]
pub fn PackagesPage() -> Element {
    let packages = use_collection::<Package>();

    rsx! {
        div {
            class: "max-w-6xl mx-auto px-6 py-12",
            h1 { class: "font-serif text-4xl mb-8", "Packages" }

            if packages.is_loading() {
                Loading {}
            } else if packages.is_empty() {
                EmptyState { icon: "🎁", title: "No packages yet" }
            } else {
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for package in packages.records {
                        PackageCard { key: "{package.title}", package }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Package Detail
// ============================================================================

#[component]
pub fn PackageDetailPage(id: String) -> Element {
    let view = use_record::<Package>(RecordId::new(id.clone()));

    let package = match view {
        RecordView::Loading => return rsx! { Loading {} },
        RecordView::Missing(reason) => {
            return rsx! {
                EmptyState { icon: "🎁", title: "Package not available", hint: reason }
            };
        }
        RecordView::Ready(package) => package,
    };

    let price = price_label(package.price);
    let subject = InquirySubject::from(&package);

    rsx! {
        div {
            class: "max-w-6xl mx-auto px-6 py-12 grid grid-cols-1 lg:grid-cols-5 gap-10",

            article {
                class: "lg:col-span-3",
                img { class: "w-full h-80 object-cover rounded-xl mb-6", src: "{package.image}", alt: "{package.title}" }
                h1 { class: "font-serif text-4xl mb-2", "{package.title}" }
                div {
                    class: "flex items-center gap-4 mb-6",
                    span { class: "text-amber-400 text-xl font-semibold", "{price}" }
                    if !package.duration.is_empty() {
                        span { class: "text-sm text-slate-400", "{package.duration}" }
                    }
                }
                p { class: "text-slate-300 leading-relaxed whitespace-pre-line mb-6", "{package.description}" }

                if !package.features.is_empty() {
                    h2 { class: "text-lg font-semibold mb-2", "Included" }
                    ul {
                        class: "grid grid-cols-1 sm:grid-cols-2 gap-2",
                        for feature in package.features.iter() {
                            li {
                                key: "{feature}",
                                class: "flex items-center gap-2 text-sm text-slate-300",
                                span { class: "text-emerald-400", "✓" }
                                "{feature}"
                            }
                        }
                    }
                }
            }

            div {
                key: "{id}",
                class: "lg:col-span-2",
                InquiryPanel { subject }
            }
        }
    }
}
