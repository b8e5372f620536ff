//! # Input Components
//!
//! Form inputs shared by the reservation wizard, the inquiry form, the
//! login page and every admin record form:
//! - **TextInput**: single-line input (text, email, password, date, number)
//! - **TextArea**: multi-line input
//! - **Select**: dropdown selection
//!
//! Each takes an optional `error` shown under the field; forms pull it out
//! of a `ValidationResult` with [`field_error`].

use dioxus::prelude::*;
use haven_model::ValidationResult;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Input type (text, email, password, date, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,

    /// Enter key handler
    #[props(default)]
    pub on_enter: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = build_input_class(props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                FieldLabel { text: label.clone(), required: props.required }
            }

            input {
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        props.on_enter.call(props.value.clone());
                    }
                },
            }

            if let Some(error) = &props.error {
                p { class: "mt-1 text-xs text-rose-400", "{error}" }
            }
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    pub value: String,

    #[props(default)]
    pub label: Option<String>,

    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text shown when there is no error
    #[props(default)]
    pub help_text: Option<String>,

    #[props(default)]
    pub error: Option<String>,

    /// Number of visible rows
    #[props(default = 4)]
    pub rows: usize,

    #[props(default = false)]
    pub required: bool,

    #[props(default = false)]
    pub disabled: bool,

    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let textarea_class = format!(
        "{} resize-y",
        build_input_class(props.error.is_some(), props.disabled)
    );

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                FieldLabel { text: label.clone(), required: props.required }
            }

            textarea {
                class: "{textarea_class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
                "{props.value}"
            }

            if let Some(error) = &props.error {
                p { class: "mt-1 text-xs text-rose-400", "{error}" }
            } else if let Some(help) = &props.help_text {
                p { class: "mt-1 text-xs text-slate-500", "{help}" }
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// Option for Select component
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option whose value and label are the same text
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(text.clone(), text)
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    #[props(default)]
    pub label: Option<String>,

    /// Placeholder (shown when no selection)
    #[props(default)]
    pub placeholder: Option<String>,

    #[props(default)]
    pub error: Option<String>,

    #[props(default = false)]
    pub required: bool,

    #[props(default = false)]
    pub disabled: bool,

    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select component
#[component]
pub fn Select(props: SelectProps) -> Element {
    let select_class = format!(
        "{} appearance-none cursor-pointer",
        build_input_class(props.error.is_some(), props.disabled)
    );

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                FieldLabel { text: label.clone(), required: props.required }
            }

            select {
                class: "{select_class}",
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.value()),

                if let Some(placeholder) = &props.placeholder {
                    option {
                        value: "",
                        disabled: true,
                        selected: props.value.is_empty(),
                        "{placeholder}"
                    }
                }

                for option in &props.options {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: props.value == option.value,
                        "{option.label}"
                    }
                }
            }

            if let Some(error) = &props.error {
                p { class: "mt-1 text-xs text-rose-400", "{error}" }
            }
        }
    }
}

// ============================================================================
// Shared pieces
// ============================================================================

#[component]
fn FieldLabel(text: String, required: bool) -> Element {
    rsx! {
        label {
            class: "block text-sm font-medium text-slate-300 mb-1.5",
            "{text}"
            if required {
                span { class: "text-rose-400 ml-0.5", "*" }
            }
        }
    }
}

/// Error message for one field, if the check flagged it
pub fn field_error(result: &ValidationResult, field: &str) -> Option<String> {
    result.message_for(field).map(str::to_string)
}

/// Build input class string
fn build_input_class(has_error: bool, disabled: bool) -> String {
    let mut classes = vec![
        "w-full",
        "px-3",
        "py-2",
        "bg-slate-800",
        "border",
        "rounded-lg",
        "text-sm",
        "text-slate-100",
        "placeholder-slate-500",
        "transition-colors",
        "focus:outline-none",
        "focus:ring-2",
    ];

    if has_error {
        classes.extend(["border-rose-500", "focus:ring-rose-500/30"]);
    } else {
        classes.extend(["border-slate-700", "focus:ring-amber-500/30", "focus:border-amber-500"]);
    }

    if disabled {
        classes.extend(["opacity-50", "cursor-not-allowed"]);
    }

    classes.join(" ")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_input_class() {
        let class = build_input_class(false, false);
        assert!(class.contains("border-slate-700"));
        assert!(!class.contains("border-rose-500"));
        assert!(!class.contains("opacity-50"));
    }

    #[test]
    fn test_build_input_class_error_and_disabled() {
        let class = build_input_class(true, true);
        assert!(class.contains("border-rose-500"));
        assert!(class.contains("cursor-not-allowed"));
    }

    #[test]
    fn test_select_option_plain() {
        let opt = SelectOption::plain("2 Adults");
        assert_eq!(opt.value, "2 Adults");
        assert_eq!(opt.label, "2 Adults");
    }

    #[test]
    fn test_field_error_lookup() {
        let mut result = ValidationResult::ok();
        result.require("guestName", "");
        assert!(field_error(&result, "guestName").is_some());
        assert!(field_error(&result, "email").is_none());
    }
}
