//! Contact records as supplied by the host's data layer.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// A person in the address book.
pub struct Contact {
    #[serde(default)]
    /// Given name.
    pub first_name: String,
    #[serde(default)]
    /// Family name.
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Explicit label overriding the composed name, such as a nickname or company.
    pub display_label: Option<String>,
    #[serde(default)]
    /// Phone numbers in the order they were stored.
    pub phone_numbers: Vec<String>,
    #[serde(default)]
    /// Whether the contact is starred.
    pub favorite: bool,
}

impl Contact {
    #[must_use]
    /// Creates a contact from a first and last name.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    /// Name shown in the list: the explicit label if set, otherwise "first last".
    pub fn display_label(&self) -> String {
        if let Some(label) = self
            .display_label
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
        {
            return label.to_string();
        }
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}
