//! Section representation for sorted contact lists.
//!
//! A section is a contiguous run of contacts sharing the same label, typically
//! the first letter of a name. The descriptor only remembers where the run begins
//! in the underlying list, which is all a "jump to section" control needs.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Label of a contiguous run of items and the position of its first item.
pub struct SectionDescriptor {
    /// Position of the first item of the run in the source collection.
    pub start_index: usize,
    /// Section label shared by every item in the run.
    pub label: String,
}

impl SectionDescriptor {
    #[must_use]
    /// Pairs a label with the position where its run starts.
    pub fn new(start_index: usize, label: impl Into<String>) -> Self {
        Self {
            start_index,
            label: label.into(),
        }
    }
}
