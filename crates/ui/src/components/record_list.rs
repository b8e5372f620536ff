//! # Record List
//!
//! Admin-side list used by every management tab: thumbnail, title, a
//! secondary line, and Edit / Delete actions. Delete never fires a request
//! directly; it opens the confirmation dialog.

use dioxus::prelude::*;
use haven_core::{Collection, RecordId};

use crate::components::feedback::EmptyState;
use crate::state::{APP_STATE, DeleteTarget, Dialog};

/// One row of a management list
#[derive(Debug, Clone, PartialEq)]
pub struct RecordRow {
    pub id: RecordId,
    pub title: String,
    pub subtitle: String,
    pub image: String,
}

impl RecordRow {
    pub fn new(
        id: Option<&RecordId>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        image: impl Into<String>,
    ) -> Option<Self> {
        // records without an id cannot be edited or deleted
        Some(Self {
            id: id?.clone(),
            title: title.into(),
            subtitle: subtitle.into(),
            image: image.into(),
        })
    }
}

/// Properties for RecordList component
#[derive(Props, Clone, PartialEq)]
pub struct RecordListProps {
    pub collection: Collection,
    pub rows: Vec<RecordRow>,
    /// Row currently loaded in the edit form
    #[props(default)]
    pub editing: Option<RecordId>,
    pub on_edit: EventHandler<RecordId>,
}

#[component]
pub fn RecordList(props: RecordListProps) -> Element {
    if props.rows.is_empty() {
        return rsx! {
            EmptyState {
                icon: "📭",
                title: format!("No {} yet", props.collection),
            }
        };
    }

    let collection = props.collection;
    let on_edit = props.on_edit;

    rsx! {
        ul {
            class: "flex flex-col divide-y divide-slate-700 bg-slate-800 rounded-xl border border-slate-700",
            for row in props.rows.iter().cloned() {
                li {
                    key: "{row.id}",
                    class: if props.editing.as_ref() == Some(&row.id) {
                        "flex items-center gap-4 p-3 bg-slate-700/40"
                    } else {
                        "flex items-center gap-4 p-3"
                    },

                    if row.image.is_empty() {
                        div { class: "w-16 h-12 rounded bg-slate-700 shrink-0" }
                    } else {
                        img { class: "w-16 h-12 rounded object-cover shrink-0", src: "{row.image}" }
                    }

                    div {
                        class: "flex-1 min-w-0",
                        p { class: "font-medium truncate", "{row.title}" }
                        p { class: "text-xs text-slate-400 truncate", "{row.subtitle}" }
                    }

                    button {
                        class: "px-3 py-1 text-sm bg-slate-700 hover:bg-slate-600 rounded transition-colors",
                        onclick: {
                            let id = row.id.clone();
                            move |_| on_edit.call(id.clone())
                        },
                        "✏️ Edit"
                    }
                    button {
                        class: "px-3 py-1 text-sm bg-red-600/80 hover:bg-red-700 rounded transition-colors",
                        onclick: {
                            let target = DeleteTarget::new(collection, row.id.clone(), row.title.clone());
                            move |_| {
                                APP_STATE
                                    .write()
                                    .ui
                                    .show_dialog(Dialog::ConfirmDelete(target.clone()));
                            }
                        },
                        "🗑️ Delete"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_requires_id() {
        assert!(RecordRow::new(None, "Ocean Suite", "", "").is_none());

        let id = RecordId::new("r1");
        let row = RecordRow::new(Some(&id), "Ocean Suite", "Deluxe", "http://img").unwrap();
        assert_eq!(row.id, id);
        assert_eq!(row.title, "Ocean Suite");
    }
}
