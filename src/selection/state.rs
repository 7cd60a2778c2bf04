//! Selection state and its transition function
//!
//! # Workflow
//!
//! ```text
//! Browsing ──Select(id)──→ Editing(id)
//!    ↑                         │
//!    ├──── Commit / ConfirmMultiSelect (on success)
//!    ├──── Cancel
//!    └──── CloseBrowse
//! ```
//!
//! `reduce` is pure: it takes the current state and an action and returns
//! the next state plus the filter to commit, if any.

use super::commit::{DisplayOptions, commit_draft, commit_staged};
use crate::catalog::{Catalog, FilterDefinition, FilterKind, Scalar};
use crate::filters::{AppliedFilter, FilterValue};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Behavior switches of the selection state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionOptions {
    /// Opening the browse surface on a one-definition catalog selects it
    pub auto_select_single: bool,

    /// Grace delay before a blur resets the selection
    pub blur_delay: Duration,

    /// Display value formatting
    pub display: DisplayOptions,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            auto_select_single: true,
            blur_delay: Duration::from_millis(100),
            display: DisplayOptions::default(),
        }
    }
}

/// Phase of the selection state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase<'a> {
    /// Catalog visible, no definition chosen
    Browsing,
    /// A draft is being built for the definition
    Editing(&'a str),
}

/// Ephemeral selection state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    /// Definition being edited
    pub active_option_id: Option<String>,

    /// In-progress value for single-valued kinds
    pub draft: FilterValue,

    /// Multi-choice staging buffer, ordered and duplicate free
    pub staged: Vec<Scalar>,

    /// Keyword typed into the browse search box
    pub search_keyword: String,

    /// Whether the browse surface is open
    pub browse_open: bool,
}

impl SelectionState {
    /// Current phase
    #[must_use]
    pub fn phase(&self) -> Phase<'_> {
        self.active_option_id
            .as_deref()
            .map_or(Phase::Browsing, Phase::Editing)
    }

    /// Whether a definition is being edited
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.active_option_id.is_some()
    }

    /// Definition being edited, looked up in `catalog`
    #[must_use]
    pub fn active_definition<'c>(&self, catalog: &'c Catalog) -> Option<&'c FilterDefinition> {
        self.active_option_id.as_deref().and_then(|id| catalog.get(id))
    }

    fn begin_editing(&mut self, id: &str) {
        self.active_option_id = Some(id.to_string());
        self.draft = FilterValue::Absent;
        self.staged.clear();
        self.search_keyword.clear();
    }

    fn clear_editing(&mut self) {
        self.active_option_id = None;
        self.draft = FilterValue::Absent;
        self.staged.clear();
        self.search_keyword.clear();
    }
}

/// User intent fed into the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    /// Open the browse surface
    OpenBrowse,
    /// Close the browse surface, discarding the selection
    CloseBrowse,
    /// Update the browse search keyword
    SetSearchKeyword(String),
    /// Start editing a definition
    Select(String),
    /// Return to browsing, discarding the selection
    Cancel,
    /// Replace the draft (single-valued kinds)
    SetDraft(FilterValue),
    /// Add a value to the staging buffer
    Stage(Scalar),
    /// Remove a value from the staging buffer
    Unstage(Scalar),
    /// Stage or unstage a value
    ToggleStaged(Scalar),
    /// Replace the staging buffer
    SetStaged(Vec<Scalar>),
    /// Empty the staging buffer
    ClearStaged,
    /// Commit the draft
    Commit,
    /// Commit the staging buffer
    ConfirmMultiSelect,
}

/// Result of one transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Next state
    pub state: SelectionState,
    /// Filter to upsert, when the action committed
    pub commit: Option<AppliedFilter>,
}

/// Apply `action` to `state`
#[must_use]
pub fn reduce(
    state: &SelectionState,
    catalog: &Catalog,
    options: &SelectionOptions,
    action: SelectionAction,
) -> Transition {
    let mut next = state.clone();
    let mut commit = None;
    let active = state.active_definition(catalog);
    let staging = active.is_some_and(|def| def.kind == FilterKind::MultiChoice);

    match action {
        SelectionAction::OpenBrowse => {
            next.browse_open = true;
            if options.auto_select_single
                && !state.is_editing()
                && let Some(only) = catalog.single()
            {
                debug!(option_id = %only.id, "auto-selecting the only definition");
                next.begin_editing(&only.id);
            }
        }
        SelectionAction::CloseBrowse => {
            next = SelectionState::default();
        }
        SelectionAction::SetSearchKeyword(keyword) => {
            next.search_keyword = keyword;
        }
        SelectionAction::Select(id) => {
            if catalog.contains(&id) {
                next.begin_editing(&id);
            } else {
                debug!(option_id = %id, "ignoring selection of unknown definition");
            }
        }
        SelectionAction::Cancel => {
            next.clear_editing();
        }
        SelectionAction::SetDraft(value) => match active {
            Some(def) if value.is_absent() || value.fits(def.kind) => next.draft = value,
            Some(def) => debug!(option_id = %def.id, kind = %def.kind, "draft does not fit definition"),
            None => debug!("draft set without an active definition"),
        },
        SelectionAction::Stage(value) if staging => {
            if !next.staged.contains(&value) {
                next.staged.push(value);
            }
        }
        SelectionAction::Unstage(value) if staging => {
            next.staged.retain(|v| v != &value);
        }
        SelectionAction::ToggleStaged(value) if staging => {
            if let Some(pos) = next.staged.iter().position(|v| v == &value) {
                next.staged.remove(pos);
            } else {
                next.staged.push(value);
            }
        }
        SelectionAction::SetStaged(values) if staging => {
            next.staged.clear();
            for value in values {
                if !next.staged.contains(&value) {
                    next.staged.push(value);
                }
            }
        }
        SelectionAction::ClearStaged if staging => {
            next.staged.clear();
        }
        SelectionAction::Stage(_)
        | SelectionAction::Unstage(_)
        | SelectionAction::ToggleStaged(_)
        | SelectionAction::SetStaged(_)
        | SelectionAction::ClearStaged => {
            debug!("staging outside a multi-choice definition");
        }
        SelectionAction::Commit => {
            commit = active.and_then(|def| commit_draft(def, &state.draft, &options.display));
            if commit.is_none() {
                debug!("commit without a committable draft");
            }
        }
        SelectionAction::ConfirmMultiSelect => {
            commit = active.and_then(|def| commit_staged(def, &state.staged));
            if commit.is_none() {
                debug!("multi-select confirmed with nothing staged");
            }
        }
    }

    if commit.is_some() {
        next = SelectionState::default();
    }
    Transition { state: next, commit }
}
