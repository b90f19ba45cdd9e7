//! Color and font tokens.
//!
//! Every token is also exposed to CSS as a custom property by
//! [`root_variables`](super::styles::root_variables).

// === TEXT ===
pub const TEXT_VARIANT_9: &str = "#bfbfbf";
pub const TEXT_VARIANT_11: &str = "white";
pub const TEXT_VARIANT_12: &str = "#6f7176";

// === SURFACES ===
pub const SURFACE_2: &str = "#5d5d5d";
pub const BACKGROUND_3: &str = "#f5f6f9";
pub const LIGHT_BORDER: &str = "#e3e5eb";

// === SEMANTIC ===
pub const ERROR_2: &str = "#d47a86";

// === FONTS ===
pub const FONT_REGULAR: &str = "Arial, Helvetica, sans-serif";
pub const FONT_BOLD: &str = "Arial, Helvetica, sans-serif";

/// CSS custom property name and value for each token
pub const TOKENS: &[(&str, &str)] = &[
    ("--text-variant-9", TEXT_VARIANT_9),
    ("--text-variant-11", TEXT_VARIANT_11),
    ("--text-variant-12", TEXT_VARIANT_12),
    ("--surface-2", SURFACE_2),
    ("--background-3", BACKGROUND_3),
    ("--light-border", LIGHT_BORDER),
    ("--error-2", ERROR_2),
    ("--font-regular", FONT_REGULAR),
    ("--font-bold", FONT_BOLD),
];
