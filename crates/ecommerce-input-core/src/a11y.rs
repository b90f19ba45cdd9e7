//! Accessibility wiring for labelled fields.
//!
//! A field with id `x` owns two related element ids:
//! `_x-description` and `_x-errormessage`. The field's `aria-*`
//! attributes point at whichever of them is rendered. Callers must keep
//! field ids unique within a page.

/// Ids of the elements that describe a field
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldIds {
    /// The field's own id
    pub field: String,
    /// Id of the description element rendered before the field
    pub description: String,
    /// Id of the error element rendered after the field
    pub error_message: String,
}

impl FieldIds {
    pub fn new(id: &str) -> Self {
        Self {
            field: id.to_string(),
            description: format!("_{}-description", id),
            error_message: format!("_{}-errormessage", id),
        }
    }
}

/// Accessibility attributes of a field for one render
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AriaState {
    /// `aria-invalid`
    pub invalid: bool,
    /// `aria-describedby`, set when a description is shown
    pub described_by: Option<String>,
    /// `aria-errormessage`, set when an error is shown
    pub error_message: Option<String>,
}

impl AriaState {
    /// Derive the attributes from the caller's description and error.
    ///
    /// Empty strings count as absent. Any non-empty error marks the field
    /// invalid; no validation happens here.
    pub fn new(ids: &FieldIds, description: Option<&str>, error: Option<&str>) -> Self {
        let has_description = description.is_some_and(|d| !d.is_empty());
        let invalid = error.is_some_and(|e| !e.is_empty());

        Self {
            invalid,
            described_by: has_description.then(|| ids.description.clone()),
            error_message: invalid.then(|| ids.error_message.clone()),
        }
    }
}
