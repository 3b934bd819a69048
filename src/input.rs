//! Contact discovery and loading.
//!
//! Paths given on the command line may be files or directories. Directories are
//! walked recursively and files are kept when their extension is one of the
//! configured suffixes. Each file holds either a JSON array of contacts or a
//! single contact object.

use crate::contact::Contact;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Deserialize)]
#[serde(untagged)]
enum ContactFile {
    Many(Vec<Contact>),
    One(Contact),
}

/// Expands `paths` into the sorted list of contact files they contain.
///
/// An empty `paths` searches the current directory.
///
/// # Errors
///
/// Returns an error if a directory cannot be read.
pub fn find_contact_files(paths: Vec<PathBuf>, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let roots = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths
    };

    let mut files = Vec::new();
    for root in roots {
        if root.is_dir() {
            walk(&root, extensions, &mut files)?;
        } else if root.is_file() {
            files.push(root);
        } else {
            warn!(path = %root.display(), "skipping missing path");
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn walk(dir: &Path, extensions: &[String], files: &mut Vec<PathBuf>) -> Result<()> {
    // Directory symlinks are not followed, so a link cycle cannot repeat files
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_dir() && has_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }
    Ok(())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
}

/// Parses contacts from a JSON string.
///
/// # Errors
///
/// Returns an error if the text is neither a contact nor an array of contacts.
pub fn parse_contacts(json: &str, path: &Path) -> Result<Vec<Contact>> {
    let parsed: ContactFile = serde_json::from_str(json).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match parsed {
        ContactFile::Many(contacts) => contacts,
        ContactFile::One(contact) => vec![contact],
    })
}

/// Reads the contacts stored in one file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_contacts(path: &Path) -> Result<Vec<Contact>> {
    let text = fs::read_to_string(path)?;
    let contacts = parse_contacts(&text, path)?;
    debug!(path = %path.display(), count = contacts.len(), "loaded contacts");
    Ok(contacts)
}

/// Loads every readable file, logging and skipping the ones that fail.
#[must_use]
pub fn load_all(files: &[PathBuf]) -> Vec<Contact> {
    let mut contacts = Vec::new();
    for file in files {
        match load_contacts(file) {
            Ok(loaded) => contacts.extend(loaded),
            Err(e) => warn!(path = %file.display(), error = %e, "skipping contact file"),
        }
    }
    contacts
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
