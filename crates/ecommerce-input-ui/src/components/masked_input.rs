//! Masked Input Component
//!
//! Wraps [`EcommerceInput`] with a keystroke mask. Every input event is run
//! through [`MaskedValue::apply_input`] and the field shows the conformed
//! text. Rendering and all other props are delegated unchanged.

use dioxus::prelude::*;
use ecommerce_input_core::{Edit, MaskPattern, MaskedValue};

use super::input::{EcommerceInput, EcommerceInputProps, FieldLabel};
use super::variant::InputVariant;

/// Properties for the MaskedInput component
#[derive(Clone, PartialEq, Props)]
pub struct MaskedInputProps {
    /// Pattern every displayed value conforms to
    pub mask: MaskPattern,
    /// Field id; also used to derive the description and error ids
    pub id: String,
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = " ".to_string())]
    pub placeholder: String,
    #[props(default)]
    pub description: Option<String>,
    #[props(default)]
    pub label: Option<FieldLabel>,
    #[props(default)]
    pub error: Option<String>,
    /// Value conformed to the mask on mount and whenever it changes.
    /// Typing does not touch it; feed `oninput` back in for a controlled field.
    #[props(default)]
    pub value: Option<String>,
    /// Handler called with the masked text whenever it changes
    #[props(default)]
    pub oninput: Option<EventHandler<String>>,
    #[props(default)]
    pub onfocus: Option<EventHandler<()>>,
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
    #[props(default)]
    pub name: Option<String>,
    #[props(default)]
    pub autocomplete: Option<String>,
    #[props(default)]
    pub inputmode: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default = false)]
    pub required: bool,
    #[props(default)]
    pub variant: InputVariant,
    #[props(default)]
    pub class: Option<String>,
    /// Forwarded to the input element
    #[props(extends = GlobalAttributes, extends = input)]
    pub attributes: Vec<Attribute>,
}

impl MaskedInputProps {
    /// Masked props carrying everything from `props` except `maxlength`
    pub fn from_input(mask: MaskPattern, props: EcommerceInputProps) -> Self {
        Self {
            mask,
            id: props.id,
            input_type: props.input_type,
            placeholder: props.placeholder,
            description: props.description,
            label: props.label,
            error: props.error,
            value: props.value,
            oninput: props.oninput,
            onfocus: props.onfocus,
            onblur: props.onblur,
            name: props.name,
            autocomplete: props.autocomplete,
            inputmode: props.inputmode,
            disabled: props.disabled,
            required: props.required,
            variant: props.variant,
            class: props.class,
            attributes: props.attributes,
        }
    }

    /// Props for the wrapped input showing `value` and reporting to `oninput`
    fn input_props(&self, value: String, oninput: EventHandler<String>) -> EcommerceInputProps {
        EcommerceInputProps {
            id: self.id.clone(),
            input_type: self.input_type.clone(),
            placeholder: self.placeholder.clone(),
            description: self.description.clone(),
            label: self.label.clone(),
            error: self.error.clone(),
            value: Some(value),
            oninput: Some(oninput),
            onfocus: self.onfocus,
            onblur: self.onblur,
            name: self.name.clone(),
            autocomplete: self.autocomplete.clone(),
            inputmode: self.inputmode.clone(),
            maxlength: None,
            disabled: self.disabled,
            required: self.required,
            variant: self.variant,
            class: self.class.clone(),
            attributes: self.attributes.clone(),
        }
    }
}

/// The caller-owned inputs the masked state was last derived from
#[derive(Clone, Debug, PartialEq)]
struct CallerState {
    mask: MaskPattern,
    value: Option<String>,
}

impl CallerState {
    fn of(props: &MaskedInputProps) -> Self {
        Self {
            mask: props.mask.clone(),
            value: props.value.clone(),
        }
    }

    fn initial(&self) -> MaskedValue {
        MaskedValue::new(self.mask.clone(), self.value.as_deref().unwrap_or_default())
    }

    /// Overwrite `current` with this state; a new mask starts from scratch
    fn apply_to(&self, current: &mut MaskedValue) -> Edit {
        if current.pattern() != &self.mask {
            *current = self.initial();
            return Edit::Changed;
        }
        current.reset(self.value.as_deref().unwrap_or_default())
    }
}

/// Text input constrained by a [`MaskPattern`]
///
/// Characters a placeholder refuses are dropped, literals are inserted
/// automatically and input past the end of the pattern is cut off.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     MaskedInput {
///         id: "phone".to_string(),
///         mask: MaskPattern::parse("(999) 999-9999")?,
///         label: Some(FieldLabel::new("Phone")),
///         oninput: move |s| phone.set(s),
///     }
/// }
/// ```
#[component]
pub fn MaskedInput(props: MaskedInputProps) -> Element {
    let caller = CallerState::of(&props);
    // Plain copy values: the caller sync below runs during render, and
    // edits schedule their own rerender
    let mut masked = use_hook(|| CopyValue::new(caller.initial()));
    let mut synced = use_hook(|| CopyValue::new(caller.clone()));
    let refresh = use_hook(schedule_update);

    if *synced.peek() != caller {
        let edit = masked.with_mut(|value| caller.apply_to(value));
        tracing::debug!(
            field = %props.id,
            value = %masked.peek().as_str(),
            ?edit,
            "Masked input set by caller"
        );
        synced.set(caller);
    }

    let field_id = props.id.clone();
    let on_change = props.oninput;
    let handle_input = move |raw: String| {
        let edit = masked.with_mut(|value| value.apply_input(&raw));
        let current = masked.peek().as_str().to_string();
        tracing::debug!(field = %field_id, raw = %raw, value = %current, ?edit, "Masked input edited");

        // The vdom diff cannot see characters it never rendered
        if current != raw {
            resync_field(&field_id, &current);
        }
        if edit.is_changed() {
            refresh();
            if let Some(handler) = &on_change {
                handler.call(current);
            }
        }
    };

    let input_props = props.input_props(
        masked.read().as_str().to_string(),
        EventHandler::new(handle_input),
    );

    rsx! {
        EcommerceInput { ..input_props }
    }
}

/// Overwrite the DOM value of field `id` with `value`
fn resync_field(id: &str, value: &str) {
    let _ = document::eval(&sync_script(id, value));
}

fn sync_script(id: &str, value: &str) -> String {
    format!(
        "const field = document.getElementById({}); if (field) {{ field.value = {}; }}",
        js_string(id),
        js_string(value)
    )
}

/// Quote `s` as a JavaScript string literal
fn js_string(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}
