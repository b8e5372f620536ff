//! Gallery Page Component
//!
//! Masonry wall of every gallery image; clicking one opens it full size.

use dioxus::prelude::*;
use haven_model::GalleryImage;

use crate::components::{EmptyState, Loading};
use crate::hooks::use_collection;

#[component]
pub fn GalleryPage() -> Element {
    let gallery = use_collection::<GalleryImage>();
    let mut enlarged: Signal<Option<GalleryImage>> = use_signal(|| None);

    rsx! {
        div {
            class: "max-w-6xl mx-auto px-6 py-12",
            h1 { class: "font-serif text-4xl mb-8", "Gallery" }

            if gallery.is_loading() {
                Loading {}
            } else if gallery.is_empty() {
                EmptyState { icon: "🖼️", title: "No photos yet" }
            } else {
                div {
                    class: "columns-1 sm:columns-2 lg:columns-3 gap-4",
                    for image in gallery.records {
                        figure {
                            key: "{image.image}",
                            class: "mb-4 break-inside-avoid cursor-zoom-in",
                            onclick: {
                                let image = image.clone();
                                move |_| enlarged.set(Some(image.clone()))
                            },
                            img { class: "w-full rounded-lg", src: "{image.image}", alt: "{image.title}" }
                            if !image.title.is_empty() {
                                figcaption { class: "text-xs text-slate-400 mt-1", "{image.title}" }
                            }
                        }
                    }
                }
            }

            if let Some(image) = enlarged() {
                div {
                    class: "fixed inset-0 z-40 bg-black/80 flex items-center justify-center p-8 cursor-zoom-out",
                    onclick: move |_| enlarged.set(None),
                    img { class: "max-h-full max-w-full rounded-lg", src: "{image.image}", alt: "{image.title}" }
                }
            }
        }
    }
}
