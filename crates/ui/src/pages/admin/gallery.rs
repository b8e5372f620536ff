//! Gallery tab

use dioxus::prelude::*;
use haven_core::{Collection, RecordId};
use haven_model::{GalleryDraft, GalleryImage, ImageSlot};

use super::form::FormCard;
use crate::components::{ImageUpload, RecordList, RecordRow, TextInput, field_error};
use crate::hooks::{use_collection, use_record_form};
use crate::services::use_services;
use crate::state::APP_STATE;

#[component]
pub fn GalleryTab() -> Element {
    let services = use_services();
    let gallery = use_collection::<GalleryImage>();
    let mut form = use_record_form::<GalleryDraft>();
    let mut draft = form.draft;

    let rows: Vec<RecordRow> = gallery
        .records
        .iter()
        .filter_map(|image| RecordRow::new(image.id.as_ref(), image.title.clone(), "", image.image.clone()))
        .collect();
    let editing = form.editing.read().clone();
    let draft_now = draft.read().clone();
    let errs = form.errors.read().clone();

    rsx! {
        div {
            class: "grid grid-cols-1 xl:grid-cols-2 gap-6 items-start",
            FormCard {
                noun: "gallery image",
                editing: editing.is_some(),
                saving: *form.saving.read(),
                can_save: !draft_now.image.is_uploading(),
                on_save: move |_| form.save(services.api.clone()),
                on_cancel: move |_| form.reset(),

                TextInput {
                    label: "Caption",
                    value: draft_now.title.clone(),
                    required: true,
                    error: field_error(&errs, "title"),
                    on_change: move |v: String| draft.write().title = v,
                }
                ImageUpload {
                    label: "Photo",
                    slot: draft_now.image.clone(),
                    error: field_error(&errs, "image"),
                    on_change: move |slot: ImageSlot| draft.write().image = slot,
                }
            }
            RecordList {
                collection: Collection::Gallery,
                rows,
                editing,
                on_edit: move |id: RecordId| {
                    let image = APP_STATE.read().cache.get::<GalleryImage>(&id);
                    if let Some(image) = image {
                        form.edit(id, GalleryDraft::from_record(&image));
                    }
                },
            }
        }
    }
}
