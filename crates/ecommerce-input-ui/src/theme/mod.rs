//! Theme tokens and stylesheet for the input components.

pub mod colors;
mod styles;

pub use colors::*;
pub use styles::{stylesheet, INPUT_STYLES};
