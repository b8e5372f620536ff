//! Blocking alert shown after a failed write

use dioxus::prelude::*;

use crate::state::APP_STATE;

#[component]
pub fn AlertDialog(title: String, message: String) -> Element {
    rsx! {
        div {
            class: "p-6",

            div {
                class: "flex items-start gap-3 mb-4",
                span { class: "text-2xl", "❌" }
                div {
                    h2 { class: "text-xl font-bold text-red-400", "{title}" }
                    p { class: "text-slate-300 mt-1", "{message}" }
                }
            }

            div {
                class: "flex justify-end",
                button {
                    class: "px-4 py-2 bg-slate-700 hover:bg-slate-600 rounded transition-colors",
                    onclick: move |_| {
                        APP_STATE.write().ui.close_dialog();
                    },
                    "OK"
                }
            }
        }
    }
}
