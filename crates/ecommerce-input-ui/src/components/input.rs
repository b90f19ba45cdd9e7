//! Labelled Input Component
//!
//! A single text field with:
//! - an optional description rendered above the field
//! - a floating label that sits inside the field until it has focus or content
//! - an optional error message rendered below the field
//! - a "Show"/"Hide" toggle when the requested type is `password`
//!
//! The description and error are linked to the input through
//! `aria-describedby` / `aria-errormessage`, and `aria-invalid` is set
//! whenever error content is present.

use dioxus::prelude::*;
use ecommerce_input_core::{AriaState, FieldIds, PasswordVisibility, PASSWORD_TYPE};

use super::variant::InputVariant;
use crate::context::use_translator;
use crate::icons::EyeOpen;

/// Label rendered after the input inside the field wrapper
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldLabel {
    /// Label text
    pub text: String,
    /// Id of the labelled element, defaults to the field id
    pub html_for: Option<String>,
}

impl FieldLabel {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            html_for: None,
        }
    }

    /// Point the label at an element other than its own field
    pub fn with_for(mut self, html_for: impl Into<String>) -> Self {
        self.html_for = Some(html_for.into());
        self
    }

    /// The `for` attribute when rendered next to `field_id`
    pub fn target(&self, field_id: &str) -> String {
        self.html_for
            .clone()
            .unwrap_or_else(|| field_id.to_string())
    }
}

impl From<&str> for FieldLabel {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Style switches for the `<input>` element.
///
/// Only decides classes; the stylesheet owns the actual rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputAppearance {
    /// A label floats inside the field, so text sits lower
    pub has_label: bool,
    /// Room is kept on the right for the visibility toggle
    pub is_password: bool,
    /// Border switches to the error color
    pub has_error: bool,
}

impl InputAppearance {
    /// Returns the CSS classes for the input element
    pub fn class(&self) -> String {
        let mut class = String::from("ecom-input");
        if self.has_label {
            class.push_str(" ecom-input--labelled");
        }
        if self.is_password {
            class.push_str(" ecom-input--password");
        }
        if self.has_error {
            class.push_str(" ecom-input--invalid");
        }
        class
    }
}

/// Properties for the EcommerceInput component
#[derive(Clone, PartialEq, Props)]
pub struct EcommerceInputProps {
    /// Field id; also used to derive the description and error ids
    pub id: String,
    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Placeholder text; a single space keeps `:placeholder-shown` usable
    #[props(default = " ".to_string())]
    pub placeholder: String,
    /// Text rendered above the field and announced with it
    #[props(default)]
    pub description: Option<String>,
    /// Floating label
    #[props(default)]
    pub label: Option<FieldLabel>,
    /// Error text rendered below the field; non-empty marks the field invalid
    #[props(default)]
    pub error: Option<String>,
    /// Current value; leave unset for an uncontrolled field
    #[props(default)]
    pub value: Option<String>,
    /// Handler called with the new field text on every input event
    #[props(default)]
    pub oninput: Option<EventHandler<String>>,
    /// Handler called when the field gains focus
    #[props(default)]
    pub onfocus: Option<EventHandler<()>>,
    /// Handler called when the field loses focus
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
    #[props(default)]
    pub name: Option<String>,
    #[props(default)]
    pub autocomplete: Option<String>,
    /// Virtual keyboard hint (numeric, email, ...)
    #[props(default)]
    pub inputmode: Option<String>,
    #[props(default)]
    pub maxlength: Option<usize>,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default = false)]
    pub required: bool,
    /// Visual variant
    #[props(default)]
    pub variant: InputVariant,
    /// Optional additional CSS classes on the root element
    #[props(default)]
    pub class: Option<String>,
    /// Any other global or `<input>` attribute, spread onto the input element
    #[props(extends = GlobalAttributes, extends = input)]
    pub attributes: Vec<Attribute>,
}

/// Labelled text input
///
/// # Markup
///
/// ```text
/// div.ecom-input-root
///   div#_{id}-description   (when a description is given)
///   div.ecom-field
///     input#{id}
///     label                 (when a label is given)
///     button                (when input_type is "password")
///   div#_{id}-errormessage  (when an error is given)
/// ```
///
/// The label must follow the input for the floating label selectors.
/// Attributes without a dedicated prop (`readonly`, `tabindex`,
/// `aria_label`, `"data-*"`, ...) land on the input element.
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     EcommerceInput {
///         id: "email".to_string(),
///         input_type: "email".to_string(),
///         description: Some("Where should we send the receipt?".to_string()),
///         label: Some(FieldLabel::new("Email")),
///         value: Some(email()),
///         oninput: move |s| email.set(s),
///     }
/// }
/// ```
#[component]
pub fn EcommerceInput(props: EcommerceInputProps) -> Element {
    let translator = use_translator();
    let mut visibility = use_signal(PasswordVisibility::default);

    let ids = FieldIds::new(&props.id);
    let description = props.description.as_deref().filter(|d| !d.is_empty());
    let error = props.error.as_deref().filter(|e| !e.is_empty());
    let aria = AriaState::new(&ids, description, error);

    let is_password = props.input_type == PASSWORD_TYPE;
    let revealed = visibility().is_revealed();
    let rendered_type = visibility().rendered_type(&props.input_type).to_string();
    let toggle_text = translator.t(visibility().toggle_label_key());

    let input_class = InputAppearance {
        has_label: props.label.is_some(),
        is_password,
        has_error: aria.invalid,
    }
    .class();
    let root_class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("{} {}", props.variant.class(), extra),
        _ => props.variant.class().to_string(),
    };

    let oninput = props.oninput;
    let onfocus = props.onfocus;
    let onblur = props.onblur;
    let field_id = ids.field.clone();

    rsx! {
        div { class: "{root_class}",
            if let Some(description) = description {
                div {
                    id: "{ids.description}",
                    class: "ecom-description",
                    "{description}"
                }
            }

            div { class: "ecom-field",
                input {
                    id: "{ids.field}",
                    class: "{input_class}",
                    r#type: "{rendered_type}",
                    placeholder: "{props.placeholder}",
                    value: props.value.clone(),
                    name: props.name.clone(),
                    autocomplete: props.autocomplete.clone(),
                    "inputmode": props.inputmode.clone(),
                    maxlength: props.maxlength.map(|n| n.to_string()),
                    disabled: props.disabled,
                    required: props.required,
                    "aria-invalid": "{aria.invalid}",
                    "aria-describedby": aria.described_by.clone(),
                    "aria-errormessage": aria.error_message.clone(),
                    oninput: move |e: FormEvent| {
                        if let Some(handler) = &oninput {
                            handler.call(e.value());
                        }
                    },
                    onfocus: move |_| {
                        if let Some(handler) = &onfocus {
                            handler.call(());
                        }
                    },
                    onblur: move |_| {
                        if let Some(handler) = &onblur {
                            handler.call(());
                        }
                    },
                    ..props.attributes,
                }

                if let Some(field_label) = &props.label {
                    label {
                        r#for: field_label.target(&ids.field),
                        "{field_label.text}"
                    }
                }

                if is_password {
                    button {
                        r#type: "button",
                        class: "ecom-visibility-toggle",
                        "aria-controls": "{ids.field}",
                        "aria-pressed": "{revealed}",
                        onclick: move |_| {
                            visibility.with_mut(|v| v.toggle());
                            tracing::debug!(
                                field = %field_id,
                                revealed = visibility.peek().is_revealed(),
                                "Password visibility toggled"
                            );
                        },
                        EyeOpen {}
                        " {toggle_text}"
                    }
                }
            }

            if let Some(error) = error {
                div {
                    id: "{ids.error_message}",
                    class: "ecom-error",
                    "{error}"
                }
            }
        }
    }
}
