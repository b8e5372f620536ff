//! Room tabs
//!
//! "Add Room" is a bare create form; "Manage Rooms" lists every room with
//! Edit and Delete and reuses the same form for edits.

use dioxus::prelude::*;
use haven_core::{Collection, RecordId, RoomCategory};
use haven_model::{ImageSlot, Room, RoomDraft};

use super::form::FormCard;
use crate::components::{
    ImageUpload, RecordList, RecordRow, Select, SelectOption, TextArea, TextInput, field_error,
    price_label,
};
use crate::hooks::{RecordForm, use_collection, use_record_form};
use crate::services::use_services;
use crate::state::APP_STATE;

// ============================================================================
// Tabs
// ============================================================================

#[component]
pub fn AddRoomTab() -> Element {
    let form = use_record_form::<RoomDraft>();

    rsx! {
        div {
            class: "max-w-2xl",
            RoomForm { form }
        }
    }
}

#[component]
pub fn ManageRoomsTab() -> Element {
    let rooms = use_collection::<Room>();
    let mut form = use_record_form::<RoomDraft>();

    let rows: Vec<RecordRow> = rooms.records.iter().filter_map(room_row).collect();
    let editing = form.editing.read().clone();

    rsx! {
        div {
            class: "grid grid-cols-1 xl:grid-cols-2 gap-6 items-start",
            RecordList {
                collection: Collection::Rooms,
                rows,
                editing: editing.clone(),
                on_edit: move |id: RecordId| {
                    let room = APP_STATE.read().cache.get::<Room>(&id);
                    if let Some(room) = room {
                        form.edit(id, RoomDraft::from_record(&room));
                    }
                },
            }
            if editing.is_some() {
                RoomForm { form }
            } else {
                p { class: "text-sm text-slate-400", "Pick a room to edit it." }
            }
        }
    }
}

fn room_row(room: &Room) -> Option<RecordRow> {
    RecordRow::new(
        room.id.as_ref(),
        room.title.clone(),
        format!("{} · {} / night", room.category, price_label(room.price)),
        room.image.clone(),
    )
}

// ============================================================================
// Form
// ============================================================================

/// Category choices; an unknown stored category stays selectable
fn category_options(current: &RoomCategory) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = RoomCategory::KNOWN
        .iter()
        .map(|c| SelectOption::plain(c.label()))
        .collect();
    if let RoomCategory::Other(raw) = current {
        options.push(SelectOption::plain(raw.as_str()));
    }
    options
}

#[component]
fn RoomForm(form: RecordForm<RoomDraft>) -> Element {
    let services = use_services();
    let mut draft = form.draft;
    let draft_now = draft.read().clone();
    let errs = form.errors.read().clone();
    let categories = category_options(&draft_now.category);
    let mut form = form;

    rsx! {
        FormCard {
            noun: "room",
            editing: form.is_editing(),
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
                Select {
                    label: "Category",
                    value: draft_now.category.label().to_string(),
                    options: categories,
                    on_change: move |v: String| draft.write().category = RoomCategory::parse(&v),
                }
                TextInput {
                    label: "Price per night",
                    input_type: "number",
                    value: draft_now.price.clone(),
                    required: true,
                    error: field_error(&errs, "price"),
                    on_change: move |v: String| draft.write().price = v,
                }
            }
            TextInput {
                label: "Area",
                value: draft_now.area.clone(),
                placeholder: "e.g. 45 m²",
                on_change: move |v: String| draft.write().area = v,
            }
            TextArea {
                label: "Description",
                value: draft_now.description.clone(),
                required: true,
                error: field_error(&errs, "description"),
                on_change: move |v: String| draft.write().description = v,
            }
            ImageUpload {
                label: "Photo",
                slot: draft_now.image.clone(),
                error: field_error(&errs, "image"),
                on_change: move |slot: ImageSlot| draft.write().image = slot,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_options_keep_unknown_value() {
        let known = category_options(&RoomCategory::Suite);
        assert_eq!(known.len(), RoomCategory::KNOWN.len());

        let with_other = category_options(&RoomCategory::Other("Treehouse".into()));
        assert_eq!(with_other.len(), RoomCategory::KNOWN.len() + 1);
        assert_eq!(with_other.last().map(|o| o.value.as_str()), Some("Treehouse"));
    }

    #[test]
    fn test_room_row() {
        let unsaved = Room {
            title: "Draft".into(),
            ..Default::default()
        };
        assert!(room_row(&unsaved).is_none());

        let room = Room {
            id: Some(RecordId::new("r1")),
            title: "Ocean Suite".into(),
            category: RoomCategory::Suite,
            price: Some(320.0),
            ..Default::default()
        };
        let row = room_row(&room).unwrap();
        assert_eq!(row.subtitle, "Suite · $320 / night");
    }
}
