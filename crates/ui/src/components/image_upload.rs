//! # Image Upload Field
//!
//! Image field embedded in every admin record form. Picking a file uploads
//! it straight to the configured image host; the form only ever receives
//! the hosted URL, carried in an [`ImageSlot`].
//!
//! One upload runs at a time per field. While it is in flight the slot
//! reports `is_uploading()` and the owning form keeps its submit button
//! disabled. A failed upload keeps whatever URL the slot held before.

use dioxus::prelude::*;
use haven_client::ImageFile;
use haven_model::ImageSlot;

use crate::file_ops::{is_image_path, pick_image};
use crate::services::use_services;

/// Properties for ImageUpload component
#[derive(Props, Clone, PartialEq)]
pub struct ImageUploadProps {
    /// Field label
    pub label: String,

    /// Current upload state
    pub slot: ImageSlot,

    /// Validation error from the owning form
    #[props(default)]
    pub error: Option<String>,

    /// Called with the new slot state on start, success and failure
    pub on_change: EventHandler<ImageSlot>,
}

/// Image picker + uploader with preview
#[component]
pub fn ImageUpload(props: ImageUploadProps) -> Element {
    let services = use_services();
    let slot = props.slot.clone();
    let on_change = props.on_change;

    let start_upload = move |_| {
        let mut working = slot.clone();
        let images = services.images.clone();
        spawn(async move {
            let Some(path) = pick_image().await else {
                return;
            };
            if !is_image_path(&path) {
                tracing::warn!(path = %path.display(), "picked file is not an image");
                return;
            }
            if !working.begin_upload() {
                return;
            }
            on_change.call(working.clone());

            let result = match ImageFile::from_path(&path).await {
                Ok(file) => images.upload(file).await,
                Err(err) => Err(err),
            };
            match result {
                Ok(url) => {
                    tracing::info!(host = images.name(), %url, "image uploaded");
                    working.finish_upload(url);
                }
                Err(err) => {
                    tracing::error!(host = images.name(), error = %err, "image upload failed");
                    working.fail_upload(err.user_message());
                }
            }
            on_change.call(working);
        });
    };

    let uploading = props.slot.is_uploading();
    let clear_slot = props.slot.clone();

    rsx! {
        div {
            class: "input-group",

            label {
                class: "block text-sm font-medium text-slate-300 mb-1.5",
                "{props.label}"
                span { class: "text-rose-400 ml-0.5", "*" }
            }

            div {
                class: "flex items-center gap-4",

                // Preview
                div {
                    class: "w-28 h-20 rounded-lg overflow-hidden bg-slate-800 border border-slate-700 flex items-center justify-center shrink-0",
                    if let Some(url) = props.slot.url() {
                        img { class: "w-full h-full object-cover", src: "{url}" }
                    } else {
                        span { class: "text-2xl text-slate-600", "🖼️" }
                    }
                }

                div {
                    class: "flex flex-col gap-2",
                    button {
                        r#type: "button",
                        class: "px-3 py-1.5 bg-slate-700 hover:bg-slate-600 rounded text-sm transition-colors disabled:opacity-50",
                        disabled: uploading,
                        onclick: start_upload,
                        if uploading {
                            "Uploading…"
                        } else if props.slot.url().is_some() {
                            "Replace image"
                        } else {
                            "Choose image"
                        }
                    }
                    if props.slot.url().is_some() && !uploading {
                        button {
                            r#type: "button",
                            class: "text-xs text-slate-400 hover:text-rose-400 text-left",
                            onclick: move |_| {
                                let mut cleared = clear_slot.clone();
                                cleared.clear();
                                on_change.call(cleared);
                            },
                            "Remove"
                        }
                    }
                }
            }

            if let Some(message) = props.slot.last_error() {
                p { class: "mt-1 text-xs text-rose-400", "{message}" }
            } else if let Some(error) = &props.error {
                p { class: "mt-1 text-xs text-rose-400", "{error}" }
            }
        }
    }
}
