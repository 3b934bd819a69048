//! The state machine bridging the contact list model and its section index.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated as the user
//! navigates. The state owns the model, the section index built over it, and the selection.
//! The index is rebuilt from the model whenever the model changes, and never updated in place.

use crate::model::ContactListModel;
use crate::section::SectionDescriptor;
use crate::section_index::SectionIndex;
use crate::sectioning::favorites::FAVORITES_LABEL;
use crate::sectioning::initial::OTHER_LABEL;
use crate::sectioning::SectionProperty;
use tracing::debug;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Determines which UI screen renders and how input is interpreted.
pub enum View {
    /// Sectioned contact list with the fast-scroll rail.
    List,
    /// Captures vim-style command input after ':' keystroke.
    Command,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// What the event loop should do after a command runs.
pub enum CommandOutcome {
    /// Keep running.
    Continue,
    /// Leave the application.
    Quit,
}

/// Contact list session state: model, index, and selection.
pub struct AppState {
    /// Contacts being browsed.
    pub model: ContactListModel,
    /// Section index over `model`, rebuilt on every model change.
    pub index: SectionIndex,
    /// Position of the highlighted contact.
    pub selected: usize,
    /// Active UI screen determining input handling.
    pub current_view: View,
    /// Accumulates command input after ':' is pressed.
    pub command_buffer: String,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
}

impl AppState {
    #[must_use]
    /// Initialises state over `model` and builds its section index.
    pub fn new(model: ContactListModel) -> Self {
        let mut state = Self {
            model,
            index: SectionIndex::new(),
            selected: 0,
            current_view: View::List,
            command_buffer: String::new(),
            message: None,
        };
        state.rebuild_index();
        state
    }

    /// Rebuilds the section index from the model and keeps the selection in range.
    pub fn rebuild_index(&mut self) {
        self.index.build(Some(&self.model));
        self.selected = self.selected.min(self.model.len().saturating_sub(1));
    }

    /// Regroups the list by `property`.
    pub fn set_sectioning(&mut self, property: SectionProperty) {
        self.model.set_sectioning(property);
        self.selected = 0;
        self.rebuild_index();
        self.message = Some(format!("Sectioned by {property:?}"));
    }

    /// Moves the selection to the first contact of the section labelled `label`.
    ///
    /// Returns `false`, leaving the selection alone, if there is no such section.
    pub fn jump_to_section(&mut self, label: &str) -> bool {
        let target = self.index.index_for(label);
        debug!(label, target, "jump to section");
        let Ok(position) = usize::try_from(target) else {
            self.message = Some(format!("No contacts under {label}"));
            return false;
        };
        self.selected = position;
        self.message = None;
        true
    }

    #[must_use]
    /// Section containing the selected contact.
    pub fn current_section(&self) -> Option<&SectionDescriptor> {
        self.index.section_at(self.selected)
    }

    #[must_use]
    /// Start of the section after the current one.
    pub fn navigate_to_next_section(&self) -> Option<usize> {
        self.index
            .descriptors()
            .iter()
            .map(|d| d.start_index)
            .find(|&start| start > self.selected)
    }

    #[must_use]
    /// Start of the current section, or of the previous one when already at a start.
    pub fn navigate_to_prev_section(&self) -> Option<usize> {
        self.index
            .descriptors()
            .iter()
            .rev()
            .map(|d| d.start_index)
            .find(|&start| start < self.selected)
    }

    #[must_use]
    /// First contact, if any.
    pub fn navigate_to_first(&self) -> Option<usize> {
        (!self.model.is_empty()).then_some(0)
    }

    #[must_use]
    /// Last contact, if any.
    pub fn navigate_to_last(&self) -> Option<usize> {
        self.model.len().checked_sub(1)
    }

    /// Moves the selection down one contact.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.model.len() {
            self.selected += 1;
        }
    }

    /// Moves the selection up one contact.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    #[must_use]
    /// Fast-scroll rail entries and whether each one has a section to jump to.
    ///
    /// The rail is the alphabet followed by `#`, led by the favorites star when the
    /// list is sectioned by favorites. Labels present in the index but outside the
    /// alphabet, such as accented initials, are listed before `#`.
    pub fn rail(&self) -> Vec<(String, bool)> {
        let mut labels: Vec<String> = Vec::new();
        if self.model.sectioning == SectionProperty::Favorites {
            labels.push(FAVORITES_LABEL.to_string());
        }
        labels.extend(('A'..='Z').map(String::from));
        for label in self.index.labels() {
            if !labels.contains(label) && label != OTHER_LABEL {
                labels.push(label.clone());
            }
        }
        labels.push(OTHER_LABEL.to_string());

        labels
            .into_iter()
            .map(|label| {
                let present = self.index.position_of(&label).is_some();
                (label, present)
            })
            .collect()
    }

    /// Runs a command typed after ':'.
    ///
    /// `q` quits, `s <property>` regroups the list, and anything else is taken as a
    /// section label to jump to.
    pub fn run_command(&mut self, cmd: &str) -> CommandOutcome {
        let cmd = cmd.trim();
        match cmd.split_once(' ') {
            _ if cmd == "q" || cmd == "q!" => return CommandOutcome::Quit,
            Some(("s", name)) => match SectionProperty::from_name(name) {
                Some(property) => self.set_sectioning(property),
                None => self.message = Some(format!("Unknown section property: {name}")),
            },
            _ if cmd.is_empty() => {}
            _ => {
                let label = cmd.to_uppercase();
                if !self.jump_to_section(&label) {
                    self.jump_to_section(cmd);
                }
            }
        }
        CommandOutcome::Continue
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
