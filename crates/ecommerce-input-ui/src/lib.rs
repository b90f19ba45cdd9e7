//! Ecommerce Input UI Components
//!
//! Dioxus components for accessible, styled text inputs:
//!
//! - [`EcommerceInput`]: labelled input with description, error text and an
//!   optional password visibility toggle
//! - [`MaskedInput`]: the same input constrained by a [`MaskPattern`]
//! - [`DateInput`]: a masked input fixed to `DD/MM/YYYY`
//!
//! Mount [`theme::stylesheet`] once near the root of the app, e.g.
//! `style { {theme::stylesheet()} }`, and optionally provide a
//! [`Translator`] with [`provide_translator`].
//!
//! [`MaskPattern`]: ecommerce_input_core::MaskPattern
//! [`Translator`]: ecommerce_input_core::Translator

pub mod components;
pub mod context;
pub mod icons;
pub mod theme;

pub use components::*;
pub use context::{provide_translator, use_translator};
