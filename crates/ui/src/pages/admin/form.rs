//! Shared chrome for admin create/edit forms

use dioxus::prelude::*;

/// Properties for FormCard component
#[derive(Props, Clone, PartialEq)]
pub struct FormCardProps {
    /// Record noun used in the heading ("room")
    pub noun: String,
    pub editing: bool,
    pub saving: bool,
    /// False while an image upload is in flight
    pub can_save: bool,
    pub on_save: EventHandler<()>,
    pub on_cancel: EventHandler<()>,
    pub children: Element,
}

#[component]
pub fn FormCard(props: FormCardProps) -> Element {
    let heading = form_heading(&props.noun, props.editing);
    let on_save = props.on_save;
    let on_cancel = props.on_cancel;

    rsx! {
        form {
            class: "bg-slate-800 rounded-xl border border-slate-700 p-6 flex flex-col gap-4",
            onsubmit: move |e| {
                e.prevent_default();
                on_save.call(());
            },

            h2 { class: "text-lg font-semibold", "{heading}" }

            {props.children}

            div {
                class: "flex justify-end gap-3 pt-2",
                if props.editing {
                    button {
                        r#type: "button",
                        class: "px-4 py-2 bg-slate-700 hover:bg-slate-600 rounded-lg transition-colors",
                        disabled: props.saving,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
                button {
                    r#type: "submit",
                    class: "px-4 py-2 bg-indigo-600 hover:bg-indigo-500 disabled:bg-indigo-600/50 disabled:cursor-not-allowed rounded-lg transition-colors flex items-center gap-2",
                    disabled: props.saving || !props.can_save,
                    if props.saving {
                        span { class: "animate-spin", "⏳" }
                        "Saving..."
                    } else if props.editing {
                        "💾 Save changes"
                    } else {
                        "➕ Create"
                    }
                }
            }
        }
    }
}

/// "Add room" / "Edit room"
pub fn form_heading(noun: &str, editing: bool) -> String {
    if editing {
        format!("Edit {noun}")
    } else {
        format!("Add {noun}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_heading() {
        assert_eq!(form_heading("room", false), "Add room");
        assert_eq!(form_heading("blog post", true), "Edit blog post");
    }
}
