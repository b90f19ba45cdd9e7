//! Date Input Component
//!
//! A [`MaskedInput`] fixed to day/month/year (`DD/MM/YYYY`). Only the
//! shape is enforced; `32/13/0000` is accepted and checking it is left to
//! the caller through the `error` prop.

use dioxus::prelude::*;
use ecommerce_input_core::MaskPattern;

use super::input::EcommerceInputProps;
use super::masked_input::{MaskedInput, MaskedInputProps};

/// Masked `DD/MM/YYYY` input
///
/// Takes the same props as [`EcommerceInput`](super::EcommerceInput).
/// Mobile keyboards get a numeric layout unless `inputmode` says otherwise.
/// `maxlength` is ignored; the mask already bounds the length.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     DateInput {
///         id: "dateOfBirth".to_string(),
///         description: Some("What is your date of birth?".to_string()),
///         label: Some(FieldLabel::new("Date of Birth")),
///         error: date_error(),
///         oninput: move |s| birth_date.set(s),
///     }
/// }
/// ```
#[component]
pub fn DateInput(props: EcommerceInputProps) -> Element {
    let mut masked = MaskedInputProps::from_input(MaskPattern::date(), props);
    if masked.inputmode.is_none() {
        masked.inputmode = Some("numeric".to_string());
    }

    rsx! {
        MaskedInput { ..masked }
    }
}
