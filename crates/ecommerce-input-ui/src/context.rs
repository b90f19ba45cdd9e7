//! Translator context for the input components.
//!
//! ## Usage
//!
//! ```ignore
//! // In the root component
//! provide_translator(Translator::new(catalog));
//!
//! // In child components
//! let translator = use_translator();
//! let label = translator.t("Show");
//! ```

use dioxus::prelude::*;
use ecommerce_input_core::Translator;

/// Make `translator` available to every component below the caller.
pub fn provide_translator(translator: Translator) -> Translator {
    use_context_provider(|| translator)
}

/// Hook to access the translator from context.
///
/// Falls back to the identity translator when none was provided.
pub fn use_translator() -> Translator {
    try_use_context::<Translator>().unwrap_or_default()
}
