//! Ecommerce Input Core Library
//!
//! Framework-free logic behind the ecommerce input components.
//!
//! ## Overview
//!
//! - **Masking**: [`MaskPattern`] and [`MaskedValue`] turn free-form keystrokes
//!   into a fixed pattern such as `DD/MM/YYYY`
//! - **Password visibility**: [`PasswordVisibility`] is the two-state toggle
//!   behind the "Show"/"Hide" button
//! - **Accessibility**: [`FieldIds`] and [`AriaState`] derive the
//!   description/error ids and the `aria-*` attributes of a field
//! - **Translation**: [`Translator`] is an injectable key lookup, identity by
//!   default
//!
//! ## Quick Start
//!
//! ```
//! use ecommerce_input_core::{MaskPattern, MaskedValue};
//!
//! let mut date = MaskedValue::new(MaskPattern::date(), "");
//! date.paste("25122021");
//! assert_eq!(date.as_str(), "25/12/2021");
//! ```

pub mod a11y;
pub mod error;
pub mod i18n;
pub mod mask;
pub mod visibility;

// Re-exports
pub use a11y::{AriaState, FieldIds};
pub use error::InputError;
pub use i18n::{Catalog, Identity, Translate, Translator};
pub use mask::{Conformed, Edit, MaskPattern, MaskSlot, MaskedValue, PlaceholderClass};
pub use visibility::{PasswordVisibility, PASSWORD_TYPE, REVEALED_TYPE};
