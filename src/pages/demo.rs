//! Demo page
//!
//! Mounts the three input flavours for manual checking: a plain name field,
//! a password field with the visibility toggle and a masked date of birth.

use chrono::NaiveDate;
use dioxus::prelude::*;
use ecommerce_input_core::Translator;
use ecommerce_input_ui::{use_translator, DateInput, EcommerceInput, FieldLabel, InputVariant};

/// Date format produced by the date mask
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Error for a complete date of birth that is not on the calendar.
///
/// The date input only enforces the `DD/MM/YYYY` shape, so the page does
/// the calendar check itself. Partial input is never an error.
pub(crate) fn birth_date_error(value: &str, translator: &Translator) -> Option<String> {
    if value.chars().count() < 10 {
        return None;
    }
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(value, error = %e, "Date of birth rejected");
            Some(translator.t("Please enter a valid date"))
        }
    }
}

#[component]
pub fn DemoPage(variant: InputVariant) -> Element {
    let translator = use_translator();
    let mut birth_date = use_signal(String::new);

    let date_error = birth_date_error(&birth_date(), &translator);
    let page_class = match variant {
        InputVariant::Default => "demo-page",
        InputVariant::Rounded => "demo-page demo-page--rounded",
    };

    rsx! {
        div { class: "{page_class}",
            div { class: "demo-fields",
                EcommerceInput {
                    id: "name".to_string(),
                    description: Some(translator.t("What is your name?")),
                    label: Some(FieldLabel::new(translator.t("Name"))),
                    autocomplete: Some("name".to_string()),
                    variant: variant,
                }

                EcommerceInput {
                    id: "password".to_string(),
                    input_type: "password".to_string(),
                    description: Some(translator.t("Please input your password")),
                    label: Some(FieldLabel::new(translator.t("Password"))),
                    autocomplete: Some("current-password".to_string()),
                    variant: variant,
                }

                DateInput {
                    id: "dateOfBirth".to_string(),
                    description: Some(translator.t("What is your date of birth?")),
                    label: Some(FieldLabel::new(translator.t("Date of Birth"))),
                    error: date_error,
                    oninput: Some(EventHandler::new(move |value: String| birth_date.set(value))),
                    variant: variant,
                }
            }
        }
    }
}
