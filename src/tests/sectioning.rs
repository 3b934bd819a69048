use super::favorites::{Favorites, FAVORITES_LABEL};
use super::initial::{InitialLetter, OTHER_LABEL};
use super::{NameField, SectionProperty, Sectioning};
use crate::contact::Contact;

fn named(first: &str, last: &str) -> Contact {
    Contact::new(first, last)
}

#[test]
fn test_initial_is_uppercased() {
    let by_first = InitialLetter::new(NameField::FirstName);

    assert_eq!(by_first.section_value(&named("alice", "Zed")), "A");
    assert_eq!(by_first.section_value(&named("Émile", "Zola")), "É");
}

#[test]
fn test_non_letters_fall_into_other_section() {
    let by_label = InitialLetter::new(NameField::DisplayLabel);

    assert_eq!(by_label.section_value(&named("", "")), OTHER_LABEL);
    assert_eq!(by_label.section_value(&named("3M", "")), OTHER_LABEL);
    assert_eq!(by_label.section_value(&named("+44", "")), OTHER_LABEL);
}

#[test]
fn test_other_section_sorts_after_letters() {
    let by_label = InitialLetter::new(NameField::DisplayLabel);

    assert!(by_label.sort_key(&named("Zoe", "")) < by_label.sort_key(&named("1st", "")));
    assert!(by_label.sort_key(&named("adam", "")) < by_label.sort_key(&named("Bea", "")));
}

#[test]
fn test_last_name_field() {
    let by_last = InitialLetter::new(NameField::LastName);

    assert_eq!(by_last.section_value(&named("Ada", "Lovelace")), "L");
    assert_eq!(by_last.section_value(&named("Cher", "")), OTHER_LABEL);
}

#[test]
fn test_explicit_display_label_wins() {
    let mut contact = named("Robert", "Paulson");
    contact.display_label = Some("  Bob  ".to_string());

    assert_eq!(contact.display_label(), "Bob");
    assert_eq!(SectionProperty::DisplayLabel.section_value(&contact), "B");
    assert_eq!(SectionProperty::FirstName.section_value(&contact), "R");

    contact.display_label = Some("   ".to_string());
    assert_eq!(contact.display_label(), "Robert Paulson");
}

#[test]
fn test_favorites_lead() {
    let mut starred = named("Zed", "");
    starred.favorite = true;
    let plain = named("Amy", "");

    assert_eq!(Favorites.section_value(&starred), FAVORITES_LABEL);
    assert_eq!(Favorites.section_value(&plain), "A");
    assert!(Favorites.sort_key(&starred) < Favorites.sort_key(&plain));
}

#[test]
fn test_property_from_name() {
    assert_eq!(
        SectionProperty::from_name("last-name"),
        Some(SectionProperty::LastName)
    );
    assert_eq!(
        SectionProperty::from_name(" Favorites "),
        Some(SectionProperty::Favorites)
    );
    assert_eq!(SectionProperty::from_name("birthday"), None);
}

#[test]
fn test_sections_stay_contiguous_when_case_mapping_differs() {
    use crate::model::ContactListModel;
    use crate::section_index::SectionIndex;

    // U+212A KELVIN SIGN lowercases to an ASCII 'k' but is its own uppercase
    let contacts = vec![
        named("Karl", ""),
        named("\u{212A}im", ""),
        named("Kyle", ""),
    ];
    let model = ContactListModel::new(contacts, SectionProperty::FirstName);
    let mut index = SectionIndex::new();
    index.build(Some(&model));

    assert_eq!(index.labels(), &["K", "\u{212A}"]);
    assert_eq!(index.index_for("K"), 0);
    assert_eq!(index.index_for("\u{212A}"), 2);
}

#[test]
fn test_favorites_section_is_contiguous() {
    use crate::model::ContactListModel;
    use crate::section_index::SectionIndex;

    let mut zed = named("Zed", "");
    zed.favorite = true;
    let mut amy = named("Amy", "");
    amy.favorite = true;
    let contacts = vec![zed, named("Bob", ""), amy, named("#1 Pizza", "")];
    let model = ContactListModel::new(contacts, SectionProperty::Favorites);
    let mut index = SectionIndex::new();
    index.build(Some(&model));

    assert_eq!(index.labels(), &[FAVORITES_LABEL, "B", "#"]);
    assert_eq!(index.index_for("B"), 2);
}
