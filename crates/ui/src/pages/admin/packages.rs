//! Packages tab

use dioxus::prelude::*;
use haven_core::{Collection, RecordId};
use haven_model::{ImageSlot, Package, PackageDraft};

use super::form::FormCard;
use crate::components::{
    ImageUpload, RecordList, RecordRow, TextArea, TextInput, field_error, price_label,
};
use crate::hooks::{use_collection, use_record_form};
use crate::services::use_services;
use crate::state::APP_STATE;

#[component]
pub fn PackagesTab() -> Element {
    let services = use_services();
    let packages = use_collection::<Package>();
    let mut form = use_record_form::<PackageDraft>();
    let mut draft = form.draft;

    let rows: Vec<RecordRow> = packages
        .records
        .iter()
        .filter_map(|p| {
            let subtitle = format!("{} · {}", p.duration, price_label(p.price));
            RecordRow::new(p.id.as_ref(), p.title.clone(), subtitle, p.image.clone())
        })
        .collect();
    let editing = form.editing.read().clone();
    let draft_now = draft.read().clone();
    let errs = form.errors.read().clone();

    rsx! {
        div {
            class: "grid grid-cols-1 xl:grid-cols-2 gap-6 items-start",
            FormCard {
                noun: "package",
                editing: editing.is_some(),
                saving: *form.saving.read(),
                can_save: !draft_now.image.is_uploading(),
                on_save: move |_| form.save(services.api.clone()),
                on_cancel: move |_| form.reset(),

                TextInput {
                    label: "Title",
                    value: draft_now.title.clone(),
                    required: true,
                    error: field_error(&errs, "title"),
                    on_change: move |v: String| draft.write().title = v,
                }
                div {
                    class: "grid grid-cols-2 gap-4",
                    TextInput {
                        label: "Price",
                        input_type: "number",
                        value: draft_now.price.clone(),
                        required: true,
                        error: field_error(&errs, "price"),
                        on_change: move |v: String| draft.write().price = v,
                    }
                    TextInput {
                        label: "Duration",
                        value: draft_now.duration.clone(),
                        placeholder: "3 nights",
                        required: true,
                        error: field_error(&errs, "duration"),
                        on_change: move |v: String| draft.write().duration = v,
                    }
                }
                TextArea {
                    label: "Description",
                    value: draft_now.description.clone(),
                    rows: 3,
                    required: true,
                    error: field_error(&errs, "description"),
                    on_change: move |v: String| draft.write().description = v,
                }
                TextArea {
                    label: "Features",
                    value: draft_now.features.clone(),
                    help_text: "One per line, or separated by commas",
                    on_change: move |v: String| draft.write().features = v,
                }
                ImageUpload {
                    label: "Image",
                    slot: draft_now.image.clone(),
                    error: field_error(&errs, "image"),
                    on_change: move |slot: ImageSlot| draft.write().image = slot,
                }
            }
            RecordList {
                collection: Collection::Packages,
                rows,
                editing,
                on_edit: move |id: RecordId| {
                    let package = APP_STATE.read().cache.get::<Package>(&id);
                    if let Some(package) = package {
                        form.edit(id, PackageDraft::from_record(&package));
                    }
                },
            }
        }
    }
}
