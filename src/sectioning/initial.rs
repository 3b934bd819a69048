//! Alphabetical sectioning by the initial of a name field.
//!
//! Letters become their own uppercase section. Everything else, including empty
//! names, is collected under `#`, which sorts after `Z`.

use crate::contact::Contact;
use crate::sectioning::{NameField, Sectioning};

/// Label for contacts whose name does not start with a letter.
pub const OTHER_LABEL: &str = "#";

#[derive(Clone, Copy, Debug)]
/// Sections contacts by the first letter of one name field.
pub struct InitialLetter {
    /// Field whose first character picks the section.
    pub field: NameField,
}

impl InitialLetter {
    #[must_use]
    /// Sections by the initial of `field`.
    pub fn new(field: NameField) -> Self {
        Self { field }
    }
}

impl Sectioning for InitialLetter {
    fn section_value(&self, contact: &Contact) -> String {
        match self.field.value(contact).chars().next() {
            Some(c) if c.is_alphabetic() => c.to_uppercase().collect(),
            _ => OTHER_LABEL.to_string(),
        }
    }

    fn sort_key(&self, contact: &Contact) -> String {
        // Leading with the label keeps each section contiguous even where case
        // mapping does not round-trip
        let label = self.section_value(contact);
        let bucket = if label == OTHER_LABEL { '1' } else { '0' };
        let value = self.field.value(contact).to_lowercase();
        format!("{bucket}{label}\0{value}")
    }
}
