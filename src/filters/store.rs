//! Applied filter store
//!
//! Ordered, key-unique collection of committed filters. Ordering is
//! most-recent-commit-last: an upsert moves the entry to the tail.
//!
//! Every mutation builds the complete next sequence and swaps it in, so
//! listeners only ever observe whole snapshots.

use super::error::StoreError;
use super::types::AppliedFilter;
use tracing::debug;

/// Identifier returned by `subscribe`
pub type ListenerId = usize;

type Listener = Box<dyn FnMut(&[AppliedFilter])>;

/// How the store's content is owned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMode {
    /// The store is authoritative, seeded once from initial filters
    Uncontrolled,
    /// An external value is authoritative and is mirrored on every change
    Controlled,
}

/// Ordered collection of applied filters, unique per `option_id`
pub struct AppliedFilterStore {
    filters: Vec<AppliedFilter>,
    mode: StoreMode,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: ListenerId,
}

impl AppliedFilterStore {
    /// Create an uncontrolled store seeded from `initial`
    #[must_use]
    pub fn uncontrolled(initial: Vec<AppliedFilter>) -> Self {
        Self::with_mode(StoreMode::Uncontrolled, initial)
    }

    /// Create a controlled store mirroring `value`
    #[must_use]
    pub fn controlled(value: Vec<AppliedFilter>) -> Self {
        Self::with_mode(StoreMode::Controlled, value)
    }

    fn with_mode(mode: StoreMode, filters: Vec<AppliedFilter>) -> Self {
        Self {
            filters: normalize(filters),
            mode,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Ownership mode chosen at construction
    #[must_use]
    pub const fn mode(&self) -> StoreMode {
        self.mode
    }

    /// Current snapshot in store order
    #[must_use]
    pub fn filters(&self) -> &[AppliedFilter] {
        &self.filters
    }

    /// Look up the filter committed for `option_id`
    #[must_use]
    pub fn get(&self, option_id: &str) -> Option<&AppliedFilter> {
        self.filters.iter().find(|f| f.option_id == option_id)
    }

    /// Check whether a filter is committed for `option_id`
    #[must_use]
    pub fn contains(&self, option_id: &str) -> bool {
        self.get(option_id).is_some()
    }

    /// Number of applied filters
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether no filter is applied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Insert or replace the filter for its `option_id`, moving it to the tail
    ///
    /// Filters with an absent or null value are ignored.
    pub fn upsert(&mut self, filter: AppliedFilter) {
        if filter.value.is_null() {
            debug!(option_id = %filter.option_id, "ignoring upsert of null value");
            return;
        }
        let mut next: Vec<AppliedFilter> = self
            .filters
            .iter()
            .filter(|f| f.option_id != filter.option_id)
            .cloned()
            .collect();
        debug!(option_id = %filter.option_id, "upsert filter");
        next.push(filter);
        self.replace(next);
    }

    /// Remove the filter for `option_id`, if present
    ///
    /// The snapshot is emitted either way.
    pub fn remove(&mut self, option_id: &str) {
        let next: Vec<AppliedFilter> = self
            .filters
            .iter()
            .filter(|f| f.option_id != option_id)
            .cloned()
            .collect();
        debug!(option_id, removed = next.len() != self.filters.len(), "remove filter");
        self.replace(next);
    }

    /// Remove every filter
    pub fn reset_all(&mut self) {
        debug!("reset all filters");
        self.replace(Vec::new());
    }

    /// Mirror an externally owned value (controlled mode only)
    ///
    /// Listeners are not notified: the value came from the owner.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotControlled` for an uncontrolled store.
    pub fn mirror(&mut self, value: Vec<AppliedFilter>) -> Result<(), StoreError> {
        if self.mode != StoreMode::Controlled {
            return Err(StoreError::NotControlled);
        }
        self.filters = normalize(value);
        Ok(())
    }

    /// Replace the content from a location change, without notifying listeners
    pub fn rehydrate(&mut self, filters: Vec<AppliedFilter>) {
        self.filters = normalize(filters);
    }

    /// Register a change listener
    pub fn subscribe(&mut self, listener: impl FnMut(&[AppliedFilter]) + 'static) -> ListenerId {
        let id = self.next_listener;
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a change listener
    ///
    /// Returns `true` if the listener was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Drop every listener
    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    fn replace(&mut self, next: Vec<AppliedFilter>) {
        self.filters = next;
        for (_, listener) in &mut self.listeners {
            listener(&self.filters);
        }
    }
}

impl std::fmt::Debug for AppliedFilterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppliedFilterStore")
            .field("filters", &self.filters)
            .field("mode", &self.mode)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Enforce the store invariants on externally supplied filters
///
/// Null values are dropped and later duplicates win, at their later position.
fn normalize(filters: Vec<AppliedFilter>) -> Vec<AppliedFilter> {
    let mut out: Vec<AppliedFilter> = Vec::with_capacity(filters.len());
    for filter in filters {
        if filter.value.is_null() {
            continue;
        }
        out.retain(|f| f.option_id != filter.option_id);
        out.push(filter);
    }
    out
}
