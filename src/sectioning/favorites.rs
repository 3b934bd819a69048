//! Favorites-first sectioning.
//!
//! Starred contacts share one leading section. The rest are grouped alphabetically
//! by display label.

use crate::contact::Contact;
use crate::sectioning::initial::InitialLetter;
use crate::sectioning::{NameField, Sectioning};

/// Label of the favorites section.
pub const FAVORITES_LABEL: &str = "★";

#[derive(Clone, Copy, Debug)]
/// Puts favorites in their own section ahead of the alphabet.
pub struct Favorites;

impl Sectioning for Favorites {
    fn section_value(&self, contact: &Contact) -> String {
        if contact.favorite {
            FAVORITES_LABEL.to_string()
        } else {
            InitialLetter::new(NameField::DisplayLabel).section_value(contact)
        }
    }

    fn sort_key(&self, contact: &Contact) -> String {
        let rest = InitialLetter::new(NameField::DisplayLabel).sort_key(contact);
        let rank = if contact.favorite { '0' } else { '1' };
        format!("{rank}{rest}")
    }
}
