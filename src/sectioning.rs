//! Sectioning trait and the strategies a contact list can be grouped by.
//!
//! A strategy supplies two things that must agree with each other: the label of
//! the section a contact belongs to, and a sort key that keeps every contact of a
//! section adjacent. The section index relies on that agreement.

pub mod favorites;
pub mod initial;

use crate::contact::Contact;
use clap::ValueEnum;

/// Groups contacts into labelled sections.
pub trait Sectioning {
    /// Label of the section `contact` belongs to.
    fn section_value(&self, contact: &Contact) -> String;
    /// Key that orders contacts consistently with their section labels.
    fn sort_key(&self, contact: &Contact) -> String;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Contact field an initial-letter strategy reads.
pub enum NameField {
    /// The composed or explicit display label.
    DisplayLabel,
    /// Given name only.
    FirstName,
    /// Family name only.
    LastName,
}

impl NameField {
    #[must_use]
    /// Reads this field from `contact`.
    pub fn value(self, contact: &Contact) -> String {
        match self {
            Self::DisplayLabel => contact.display_label(),
            Self::FirstName => contact.first_name.trim().to_string(),
            Self::LastName => contact.last_name.trim().to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
/// Which property a contact list is sectioned by.
pub enum SectionProperty {
    #[default]
    /// Initial of the display label.
    DisplayLabel,
    /// Initial of the given name.
    FirstName,
    /// Initial of the family name.
    LastName,
    /// Favorites first, then initials of the display label.
    Favorites,
}

impl SectionProperty {
    #[must_use]
    /// Parses a property name such as `last-name`, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name.trim(), true).ok()
    }

    fn initial_letter(self) -> initial::InitialLetter {
        match self {
            Self::FirstName => initial::InitialLetter::new(NameField::FirstName),
            Self::LastName => initial::InitialLetter::new(NameField::LastName),
            Self::DisplayLabel | Self::Favorites => {
                initial::InitialLetter::new(NameField::DisplayLabel)
            }
        }
    }
}

impl Sectioning for SectionProperty {
    fn section_value(&self, contact: &Contact) -> String {
        match self {
            Self::Favorites => favorites::Favorites.section_value(contact),
            _ => self.initial_letter().section_value(contact),
        }
    }

    fn sort_key(&self, contact: &Contact) -> String {
        match self {
            Self::Favorites => favorites::Favorites.sort_key(contact),
            _ => self.initial_letter().sort_key(contact),
        }
    }
}

#[cfg(test)]
#[path = "tests/sectioning.rs"]
mod tests;
