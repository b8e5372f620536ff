//! Blogs tab

use dioxus::prelude::*;
use haven_core::{BlogCategory, Collection, RecordId};
use haven_model::{BlogDraft, BlogPost, ImageSlot};

use super::form::FormCard;
use crate::components::{
    ImageUpload, RecordList, RecordRow, Select, SelectOption, TextArea, TextInput, field_error,
};
use crate::hooks::{use_collection, use_record_form};
use crate::services::use_services;
use crate::state::APP_STATE;

#[component]
pub fn BlogsTab() -> Element {
    let services = use_services();
    let blogs = use_collection::<BlogPost>();
    let mut form = use_record_form::<BlogDraft>();
    let mut draft = form.draft;

    let rows: Vec<RecordRow> = blogs
        .records
        .iter()
        .filter_map(|post| {
            let subtitle = format!("{} · {}", post.category, post.published_label());
            RecordRow::new(post.id.as_ref(), post.title.clone(), subtitle, post.image.clone())
        })
        .collect();
    let editing = form.editing.read().clone();
    let draft_now = draft.read().clone();
    let errs = form.errors.read().clone();

    let mut categories: Vec<SelectOption> = BlogCategory::KNOWN
        .iter()
        .map(|c| SelectOption::plain(c.label()))
        .collect();
    if let BlogCategory::Other(raw) = &draft_now.category {
        categories.push(SelectOption::plain(raw.as_str()));
    }

    rsx! {
        div {
            class: "grid grid-cols-1 xl:grid-cols-2 gap-6 items-start",
            FormCard {
                noun: "blog post",
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
                Select {
                    label: "Category",
                    value: draft_now.category.label().to_string(),
                    options: categories,
                    on_change: move |v: String| draft.write().category = BlogCategory::parse(&v),
                }
                TextArea {
                    label: "Body",
                    value: draft_now.description.clone(),
                    rows: 8,
                    required: true,
                    error: field_error(&errs, "description"),
                    on_change: move |v: String| draft.write().description = v,
                }
                ImageUpload {
                    label: "Cover image",
                    slot: draft_now.image.clone(),
                    error: field_error(&errs, "image"),
                    on_change: move |slot: ImageSlot| draft.write().image = slot,
                }
            }
            RecordList {
                collection: Collection::Blogs,
                rows,
                editing,
                on_edit: move |id: RecordId| {
                    let post = APP_STATE.read().cache.get::<BlogPost>(&id);
                    if let Some(post) = post {
                        form.edit(id, BlogDraft::from_record(&post));
                    }
                },
            }
        }
    }
}
