//! sectionjump: jump-to-section navigation for sorted contact lists.
//!
//! The heart of the crate is [`section_index::SectionIndex`], which scans an already-sorted
//! collection once and records where each run of equally-labelled items begins. The remaining
//! modules are the host around it: the contact model and its sectioning strategies, contact
//! loading, configuration, and a terminal list view.
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod contact;
pub mod error;
pub mod input;
pub mod model;
pub mod section;
pub mod section_index;
pub mod sectioning;
pub mod ui;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Only installs a subscriber if `RUST_LOG` is set, e.g. `RUST_LOG=sectionjump=debug`.
/// Output goes to stderr. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
