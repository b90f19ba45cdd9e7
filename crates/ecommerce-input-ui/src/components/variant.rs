//! Visual variants
//!
//! A variant only adds a class to the input root; the stylesheet does the
//! rest. Behavior is identical across variants.

/// Presentation of an input
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputVariant {
    /// Dark filled field with square corners
    #[default]
    Default,
    /// Light field with rounded corners and grey label
    Rounded,
}

impl InputVariant {
    /// Returns the CSS classes for the input root
    pub fn class(&self) -> &'static str {
        match self {
            InputVariant::Default => "ecom-input-root",
            InputVariant::Rounded => "ecom-input-root ecom-input-root--rounded",
        }
    }
}
