//! Password visibility toggle
//!
//! Two states, [`PasswordVisibility::Masked`] (initial) and
//! [`PasswordVisibility::Revealed`]. The toggle button is the only
//! transition in either direction. Only the rendered input type changes;
//! the field value is never touched.

/// Input type that enables the visibility toggle
pub const PASSWORD_TYPE: &str = "password";

/// Input type used while a password is revealed
pub const REVEALED_TYPE: &str = "text";

/// Visibility of a password field
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PasswordVisibility {
    /// Characters are hidden behind bullets
    #[default]
    Masked,
    /// Characters are shown as plain text
    Revealed,
}

impl PasswordVisibility {
    /// Flip to the other state
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn toggled(self) -> Self {
        match self {
            PasswordVisibility::Masked => PasswordVisibility::Revealed,
            PasswordVisibility::Revealed => PasswordVisibility::Masked,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == PasswordVisibility::Revealed
    }

    /// The `type` attribute to render for a field that asked for `requested`.
    ///
    /// Only password fields are affected; every other type passes through.
    pub fn rendered_type(self, requested: &str) -> &str {
        if requested == PASSWORD_TYPE && self.is_revealed() {
            REVEALED_TYPE
        } else {
            requested
        }
    }

    /// Translation key for the toggle button text
    pub fn toggle_label_key(self) -> &'static str {
        match self {
            PasswordVisibility::Masked => "Show",
            PasswordVisibility::Revealed => "Hide",
        }
    }
}
