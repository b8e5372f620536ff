//! Fallback for unknown paths

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "no route matched");

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center text-center px-6",
            span { class: "text-6xl mb-4", "🧭" }
            h1 { class: "font-serif text-3xl mb-2", "Page not found" }
            p { class: "text-slate-400 mb-6", "Nothing lives at {path}." }
            Link {
                class: "px-5 py-2 rounded-lg bg-amber-500 hover:bg-amber-400 text-slate-900 font-semibold",
                to: Route::Home {},
                "Back to home"
            }
        }
    }
}
