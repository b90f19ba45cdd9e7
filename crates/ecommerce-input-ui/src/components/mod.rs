//! Input components.
//!
//! All variants render through [`EcommerceInput`]; the masked and date
//! inputs only add keystroke filtering on top of it.

mod date_input;
mod input;
mod masked_input;
mod variant;

pub use date_input::DateInput;
pub use input::{EcommerceInput, EcommerceInputProps, FieldLabel, InputAppearance};
pub use masked_input::{MaskedInput, MaskedInputProps};
pub use variant::InputVariant;
