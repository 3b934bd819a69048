//! Section index over an already-sorted collection.
//!
//! The index is rebuilt from scratch on every call to [`SectionIndex::build`]. It
//! keeps two aligned sequences: the section descriptors, and their labels for
//! lookup. Neither operation fails. A missing collection yields an empty index and
//! an unknown label yields [`NOT_FOUND`], so host UI code can treat `-1` as the one
//! "nothing to jump to" value.

use crate::section::SectionDescriptor;
use tracing::debug;

/// Sentinel returned by [`SectionIndex::index_for`] when a label has no section.
pub const NOT_FOUND: isize = -1;

/// An ordered collection that knows how to label its own items.
///
/// The labelling must agree with the collection's sort order, otherwise equal
/// labels will not be contiguous and the index will split them into several
/// sections.
pub trait SectionSource {
    /// Item type held by the collection.
    type Item;

    /// The ordered item sequence, or `None` if it is not available yet.
    fn items(&self) -> Option<&[Self::Item]>;

    /// Section label for one item.
    fn section_value(&self, item: &Self::Item) -> String;
}

#[derive(Clone, Debug, Default)]
/// Maps section labels to the position of each section's first item.
pub struct SectionIndex {
    descriptors: Vec<SectionDescriptor>,
    labels: Vec<String>,
}

impl SectionIndex {
    #[must_use]
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the index from a collection, discarding any previous state.
    ///
    /// An absent collection, or one without an item sequence, leaves the index empty.
    pub fn build<S: SectionSource>(&mut self, collection: Option<&S>) {
        match collection.and_then(|source| source.items().map(|items| (source, items))) {
            Some((source, items)) => self.build_with(items, |item| source.section_value(item)),
            None => {
                self.clear();
                debug!("section index cleared: no item sequence");
            }
        }
    }

    /// Rebuilds the index from a slice, labelling each item with `label_of`.
    ///
    /// A new section starts whenever an item's label differs from the previous
    /// item's. The label cursor starts unset rather than at `""`, so the first item
    /// always starts a section, even when its label is empty.
    pub fn build_with<T, F>(&mut self, items: &[T], label_of: F)
    where
        F: Fn(&T) -> String,
    {
        self.clear();

        let mut current: Option<String> = None;
        for (i, item) in items.iter().enumerate() {
            let label = label_of(item);
            if current.as_deref() != Some(label.as_str()) {
                self.labels.push(label.clone());
                self.descriptors.push(SectionDescriptor::new(i, label.clone()));
                current = Some(label);
            }
        }

        debug!(
            items = items.len(),
            sections = self.descriptors.len(),
            "section index rebuilt"
        );
    }

    #[must_use]
    /// Start position of the first section labelled `label`.
    pub fn position_of(&self, label: &str) -> Option<usize> {
        let slot = self.labels.iter().position(|l| l == label)?;
        self.descriptors.get(slot).map(|d| d.start_index)
    }

    #[must_use]
    /// Start position of the first section labelled `label`, or [`NOT_FOUND`].
    pub fn index_for(&self, label: &str) -> isize {
        self.position_of(label)
            .and_then(|position| isize::try_from(position).ok())
            .unwrap_or(NOT_FOUND)
    }

    #[must_use]
    /// Section containing the item at `position`.
    pub fn section_at(&self, position: usize) -> Option<&SectionDescriptor> {
        let after = self
            .descriptors
            .partition_point(|d| d.start_index <= position);
        after.checked_sub(1).map(|slot| &self.descriptors[slot])
    }

    /// Section descriptors as a pretty-printed JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.descriptors)
    }

    #[must_use]
    /// Section descriptors ordered by start position.
    pub fn descriptors(&self) -> &[SectionDescriptor] {
        &self.descriptors
    }

    #[must_use]
    /// Section labels, aligned with [`SectionIndex::descriptors`].
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    /// Number of sections.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    /// Whether the index holds no sections.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    fn clear(&mut self) {
        self.descriptors.clear();
        self.labels.clear();
    }
}

#[cfg(test)]
#[path = "tests/section_index.rs"]
mod tests;
