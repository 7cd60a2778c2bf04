//! Filter selection state machine
//!
//! Tracks which definition is being edited and its in-progress value, and
//! turns a finished selection into an `AppliedFilter`.
//!
//! # Architecture
//!
//! - **`SelectionState`**: explicit, cloneable state object
//! - **`reduce`**: pure transition function over `SelectionAction`s
//! - **`SelectionController`**: owns the state and the blur guard
//! - **`commit`**: kind-specific display values for committed filters

pub mod blur;
pub mod commit;
pub mod state;

pub use blur::{BlurAction, BlurGuard};
pub use commit::{DisplayOptions, MULTI_SEPARATOR, commit_draft, commit_staged};
pub use state::{Phase, SelectionAction, SelectionOptions, SelectionState, Transition, reduce};

use crate::catalog::Catalog;
use crate::filters::AppliedFilter;
use std::time::{Duration, Instant};
use tracing::debug;

/// Outcome of dispatching one action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// Whether the selection state changed
    pub changed: bool,
    /// Filter to upsert, when the action committed
    pub commit: Option<AppliedFilter>,
}

/// Owner of the selection state
#[derive(Debug, Clone)]
pub struct SelectionController {
    state: SelectionState,
    options: SelectionOptions,
    blur: BlurGuard,
}

impl SelectionController {
    /// Create a controller in the `Browsing` phase
    #[must_use]
    pub fn new(options: SelectionOptions) -> Self {
        Self {
            state: SelectionState::default(),
            blur: BlurGuard::new(options.blur_delay),
            options,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Behavior switches
    #[must_use]
    pub const fn options(&self) -> &SelectionOptions {
        &self.options
    }

    /// Apply an action
    pub fn dispatch(&mut self, catalog: &Catalog, action: SelectionAction) -> Dispatch {
        let Transition { state, commit } = reduce(&self.state, catalog, &self.options, action);
        let changed = state != self.state;
        self.state = state;
        Dispatch { changed, commit }
    }

    /// Schedule the blur reset
    pub fn blur_at(&mut self, now: Instant) {
        self.blur.handle_blur_at(now);
    }

    /// Fire the blur reset if its delay has elapsed
    ///
    /// Returns `true` when the state changed.
    pub fn tick_at(&mut self, catalog: &Catalog, now: Instant) -> bool {
        match self.blur.tick_at(now, self.state.browse_open) {
            BlurAction::Reset => self.dispatch(catalog, SelectionAction::Cancel).changed,
            BlurAction::Skipped => {
                debug!("blur reset skipped, browse surface is open");
                false
            }
            BlurAction::None => false,
        }
    }

    /// Time left before a pending blur reset fires
    #[must_use]
    pub fn time_until_blur(&self, now: Instant) -> Option<Duration> {
        self.blur.time_until_fire(now)
    }

    /// Return to the initial state and drop any pending blur
    ///
    /// Returns `true` when the state changed.
    pub fn reset(&mut self) -> bool {
        self.blur.cancel();
        let changed = self.state != SelectionState::default();
        self.state = SelectionState::default();
        changed
    }
}
