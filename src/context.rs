//! Demo configuration context.
//!
//! The configuration is parsed once from the command line and read by the
//! app shell through [`demo_config`].

use ecommerce_input_core::Translator;
use ecommerce_input_ui::InputVariant;

/// Page and window title used when `--title` is not given
pub const DEFAULT_TITLE: &str = "EcommerceInput - demo";

/// Settings chosen on the command line
#[derive(Clone, Debug)]
pub struct DemoConfig {
    /// Window and page title
    pub title: String,
    /// Variant applied to every demo field
    pub variant: InputVariant,
    /// Translator provided to the component tree
    pub translator: Translator,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            variant: InputVariant::default(),
            translator: Translator::identity(),
        }
    }
}

/// Get the demo configuration.
/// Uses the global config set from command line args.
pub fn demo_config() -> DemoConfig {
    crate::get_demo_config()
}
