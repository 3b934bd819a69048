use super::{find_contact_files, load_all, load_contacts, parse_contacts};
use crate::error::Error;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_parse_array_and_single_object() {
    let path = Path::new("inline.json");

    let many = parse_contacts(
        r#"[{"first_name":"Ada","last_name":"Lovelace"},{"first_name":"Alan","favorite":true}]"#,
        path,
    )
    .unwrap();
    assert_eq!(many.len(), 2);
    assert_eq!(many[0].last_name, "Lovelace");
    assert!(many[1].favorite);
    assert!(many[1].last_name.is_empty());

    let one = parse_contacts(
        r#"{"first_name":"Grace","phone_numbers":["+1 555 0100"]}"#,
        path,
    )
    .unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].phone_numbers, vec!["+1 555 0100".to_string()]);
}

#[test]
fn test_invalid_json_reports_path() {
    let err = parse_contacts("not json", Path::new("broken.json")).unwrap_err();

    match err {
        Error::Json { path, .. } => assert_eq!(path, Path::new("broken.json")),
        Error::Io(e) => panic!("expected a parse error, got {e}"),
    }
}

#[test]
fn test_load_contacts_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"[{{"first_name":"Linus","last_name":"Torvalds"}}]"#).unwrap();

    let contacts = load_contacts(file.path()).unwrap();

    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].display_label(), "Linus Torvalds");
}

#[test]
fn test_find_contact_files_walks_directories() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("work");
    fs::create_dir(&nested).unwrap();
    fs::write(dir.path().join("family.json"), "[]").unwrap();
    fs::write(nested.join("team.JSON"), "[]").unwrap();
    fs::write(nested.join("notes.txt"), "ignored").unwrap();

    let files = find_contact_files(vec![dir.path().to_path_buf()], &["json".to_string()]).unwrap();

    assert_eq!(files.len(), 2);
    assert!(files.iter().any(|f| f.ends_with("family.json")));
    assert!(files.iter().any(|f| f.ends_with("team.JSON")));
}

#[test]
fn test_load_all_skips_bad_files() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.json");
    let bad = dir.path().join("bad.json");
    fs::write(&good, r#"{"first_name":"Margaret","last_name":"Hamilton"}"#).unwrap();
    fs::write(&bad, "{").unwrap();

    let contacts = load_all(&[bad, good, dir.path().join("missing.json")]);

    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].first_name, "Margaret");
}

#[cfg(unix)]
#[test]
fn test_directory_symlink_cycle_is_not_followed() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("family.json"),
        r#"{"first_name":"Mary","last_name":"Somerville"}"#,
    )
    .unwrap();
    std::os::unix::fs::symlink(dir.path(), dir.path().join("loop")).unwrap();

    let files = find_contact_files(vec![dir.path().to_path_buf()], &["json".to_string()]).unwrap();
    let contacts = load_all(&files);

    assert_eq!(files.len(), 1);
    assert_eq!(contacts.len(), 1);
}
