//! Placeholder states for list and detail pages

use dioxus::prelude::*;

#[component]
pub fn Loading(#[props(default = "Loading…".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-center py-16 text-slate-400",
            span { class: "animate-pulse", "{label}" }
        }
    }
}

/// Shown when a collection is empty, or could not be fetched
#[component]
pub fn EmptyState(icon: String, title: String, #[props(default)] hint: Option<String>) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center py-16 text-center",
            span { class: "text-4xl mb-3", "{icon}" }
            h3 { class: "text-lg font-semibold text-slate-200", "{title}" }
            if let Some(hint) = hint {
                p { class: "text-sm text-slate-400 mt-1 max-w-md", "{hint}" }
            }
        }
    }
}
