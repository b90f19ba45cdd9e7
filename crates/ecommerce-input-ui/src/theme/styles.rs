//! CSS for the input components.
//!
//! The floating label relies on sibling selectors (`input ~ label`), so the
//! input must stay in front of its label inside `.ecom-field`.

use std::fmt::Write;

use super::colors::TOKENS;

pub const INPUT_STYLES: &str = r#"
/* === Root === */
.ecom-input-root {
  --disabled-opacity: 0.8;
}

/* === Description === */
.ecom-description {
  font-family: var(--font-regular);
  color: var(--text-variant-9);
  font-size: 15px;
  text-align: center;
  padding: 0 16px;
  margin-bottom: 12px;
}

/* === Field Wrapper & Floating Label === */
.ecom-field {
  position: relative;
}

.ecom-field label {
  color: var(--text-variant-9);
  font-size: 1rem;
  position: absolute;
  left: 0;
  top: 50%;
  transform: translateY(-50%);
  margin: 0 12px;
  transition: 0.2s ease all;
  pointer-events: none;
}

.ecom-field input[disabled] ~ label {
  opacity: var(--disabled-opacity);
}

.ecom-field input:disabled:not([value='']) ~ label,
.ecom-field input:focus ~ label,
.ecom-field input:not(:focus):not(:placeholder-shown) ~ label {
  color: var(--text-variant-11);
  top: 4px;
  transform: translateY(0);
}

/* === Input === */
.ecom-input {
  width: 100%;
  height: 50px;
  border-radius: 2px;
  border-style: solid;
  border-width: 1px;
  font-size: 1rem;
  border-color: var(--surface-2);
  background-color: var(--surface-2);
  color: var(--text-variant-11);
  padding: 0 0 0 11px;
}

.ecom-input--labelled {
  padding: 18px 0 0 11px;
}

.ecom-input--password {
  padding-right: 75px;
}

.ecom-input--invalid {
  border-color: var(--error-2);
}

.ecom-input[disabled] {
  cursor: not-allowed;
  opacity: var(--disabled-opacity);
}

.ecom-input:-webkit-autofill,
.ecom-input:-internal-autofill-selected {
  box-shadow: 0 0 0px 1000px var(--surface-2) inset;
  -webkit-text-fill-color: var(--text-variant-11);
}

/* === Visibility Toggle === */
.ecom-visibility-toggle {
  cursor: pointer;
  border: 0;
  background: 0;
  position: absolute;
  right: 8px;
  top: 50%;
  transform: translateY(-50%);
  display: flex;
  align-items: center;
  gap: 4px;
  color: var(--text-variant-9);
}

.ecom-visibility-toggle svg path {
  fill: var(--text-variant-9);
}

/* === Error Message === */
.ecom-error {
  margin: 6px 3px 0 0;
  font-family: var(--font-regular);
  font-size: 14px;
  font-weight: normal;
  font-stretch: normal;
  font-style: normal;
  line-height: 1.57;
  letter-spacing: normal;
  color: var(--error-2);
}

/* === Rounded Variant === */
.ecom-input-root--rounded .ecom-field label,
.ecom-input-root--rounded .ecom-field input:disabled:not([value='']) ~ label,
.ecom-input-root--rounded .ecom-field input:focus ~ label,
.ecom-input-root--rounded .ecom-field input:not(:focus):not(:placeholder-shown) ~ label {
  color: var(--text-variant-12);
}

.ecom-input-root--rounded .ecom-input {
  background-color: var(--background-3);
  border-color: var(--light-border);
  border-radius: 7px;
  color: var(--text-variant-12);
}

.ecom-input-root--rounded .ecom-input--invalid {
  border-color: var(--error-2);
}

.ecom-input-root--rounded .ecom-input:-webkit-autofill {
  box-shadow: 0 0 0px 1000px var(--background-3) inset;
  -webkit-text-fill-color: var(--text-variant-12);
}
"#;

/// `:root` block declaring every theme token as a CSS custom property
pub(crate) fn root_variables() -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in TOKENS {
        let _ = writeln!(css, "  {}: {};", name, value);
    }
    css.push_str("}\n");
    css
}

/// Full stylesheet: theme tokens followed by the component rules.
pub fn stylesheet() -> String {
    let mut css = root_variables();
    css.push_str(INPUT_STYLES);
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::colors::{ERROR_2, TEXT_VARIANT_9};

    #[test]
    fn root_variables_declare_tokens() {
        let css = root_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains(&format!("--error-2: {};", ERROR_2)));
        assert!(css.contains(&format!("--text-variant-9: {};", TEXT_VARIANT_9)));
    }

    #[test]
    fn stylesheet_uses_declared_variables() {
        let css = stylesheet();
        for (name, _) in TOKENS.iter().filter(|(name, _)| *name != "--font-bold") {
            assert!(
                css.matches(name).count() > 1,
                "{} is declared but never used",
                name
            );
        }
    }

    #[test]
    fn password_padding_follows_label_padding() {
        let labelled = INPUT_STYLES.find(".ecom-input--labelled").unwrap();
        let password = INPUT_STYLES.find(".ecom-input--password").unwrap();
        assert!(labelled < password);
    }
}
