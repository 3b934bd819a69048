//! Errors raised while loading contacts.
//!
//! The section index itself never fails; only the host's I/O can.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read or parse contact data.
#[derive(Debug, Error)]
pub enum Error {
    /// Filesystem access failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A contact file held invalid JSON.
    #[error("invalid contact data in {}: {source}", .path.display())]
    Json {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },
}

/// Result alias for contact loading.
pub type Result<T> = std::result::Result<T, Error>;
