//! The contact list model a view is bound to.
//!
//! The model owns the contacts and the property they are sectioned by. It may
//! exist before its data does: until contacts are loaded there is no item
//! sequence, and any section index built over it stays empty.

use crate::contact::Contact;
use crate::section_index::SectionSource;
use crate::sectioning::{SectionProperty, Sectioning};

#[derive(Clone, Debug, Default)]
/// Contacts plus the sectioning they are displayed with.
pub struct ContactListModel {
    /// Loaded contacts, or `None` before the data layer has delivered them.
    pub contacts: Option<Vec<Contact>>,
    /// Property contacts are grouped by.
    pub sectioning: SectionProperty,
}

impl ContactListModel {
    #[must_use]
    /// Creates a model that has no contacts yet.
    pub fn pending(sectioning: SectionProperty) -> Self {
        Self {
            contacts: None,
            sectioning,
        }
    }

    #[must_use]
    /// Creates a model over `contacts`, sorted for `sectioning`.
    pub fn new(contacts: Vec<Contact>, sectioning: SectionProperty) -> Self {
        let mut model = Self {
            contacts: Some(contacts),
            sectioning,
        };
        model.sort();
        model
    }

    /// Orders contacts so that every section is contiguous.
    pub fn sort(&mut self) {
        let sectioning = self.sectioning;
        if let Some(contacts) = self.contacts.as_mut() {
            contacts.sort_by_cached_key(|c| (sectioning.sort_key(c), c.display_label()));
        }
    }

    /// Switches the sectioning property and re-sorts.
    pub fn set_sectioning(&mut self, sectioning: SectionProperty) {
        self.sectioning = sectioning;
        self.sort();
    }

    #[must_use]
    /// Number of loaded contacts.
    pub fn len(&self) -> usize {
        self.contacts.as_ref().map_or(0, Vec::len)
    }

    #[must_use]
    /// Whether there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    /// Contact at `position`, if loaded.
    pub fn get(&self, position: usize) -> Option<&Contact> {
        self.contacts.as_ref().and_then(|c| c.get(position))
    }
}

impl SectionSource for ContactListModel {
    type Item = Contact;

    fn items(&self) -> Option<&[Contact]> {
        self.contacts.as_deref()
    }

    fn section_value(&self, item: &Contact) -> String {
        self.sectioning.section_value(item)
    }
}
