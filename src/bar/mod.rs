//! Filter bar component
//!
//! Ties the selection state machine, the applied filter store and the
//! optional URL sync together behind one surface. A rendering layer drives it
//! with the operations below and redraws from [`Snapshot`]s.
//!
//! # Architecture
//!
//! - **`FilterBarProps`**: construction contract, controlled or uncontrolled
//! - **`SelectionController`**: browse and edit phases, blur timing
//! - **`AppliedFilterStore`**: committed filters, `on_change` notifications
//! - **`UrlSync`**: filters and pagination mirrored into a [`Location`]
//!
//! # Example
//!
//! ```
//! use filterbar::bar::FilterBar;
//! use filterbar::catalog::{Catalog, FilterDefinition};
//! use filterbar::filters::FilterValue;
//!
//! let catalog = Catalog::new(vec![FilterDefinition::text("name", "Name")]).unwrap();
//! let mut bar = FilterBar::builder(catalog).build();
//!
//! bar.select_option("name");
//! bar.set_draft(FilterValue::Text("foo".into()));
//! assert!(bar.commit());
//! assert_eq!(bar.filters()[0].display_value, "foo");
//! ```

pub mod props;

pub use props::{ChangeHandler, DEFAULT_PLACEHOLDER, FilterBarOptions, FilterBarProps};

use crate::catalog::{Catalog, ChoiceOption, FilterDefinition, FilterKind, Scalar};
use crate::filters::{AppliedFilter, AppliedFilterStore, FilterValue, ListenerId, StoreError, StoreMode};
use crate::search::{filter_catalog, filter_choices};
use crate::selection::{Dispatch, SelectionAction, SelectionController, SelectionState};
use crate::url::{Location, MemoryLocation, Pagination, UrlSync, filter_params};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

type SnapshotListener = Box<dyn FnMut(&Snapshot)>;

/// Everything a rendering layer needs to draw the bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Committed filters in display order
    pub filters: Vec<AppliedFilter>,
    /// Ephemeral selection state
    pub selection: SelectionState,
    /// Pagination cursor
    pub pagination: Pagination,
    /// Whether user operations are ignored
    pub disabled: bool,
}

/// Filter bar component
pub struct FilterBar<L: Location = MemoryLocation> {
    catalog: Arc<Catalog>,
    store: AppliedFilterStore,
    selection: SelectionController,
    initial_filters: Vec<AppliedFilter>,
    placeholder: String,
    disabled: bool,
    disposed: bool,
    pagination: Pagination,
    url: Option<UrlSync<L>>,
    listeners: Vec<(ListenerId, SnapshotListener)>,
    next_listener: ListenerId,
}

impl FilterBar<MemoryLocation> {
    /// Start building a bar over `catalog`
    pub fn builder(catalog: impl Into<Arc<Catalog>>) -> FilterBarProps<MemoryLocation> {
        FilterBarProps::new(catalog)
    }
}

impl<L: Location> FilterBar<L> {
    /// Build a bar from its properties
    ///
    /// With URL sync the location is read once here: its filters seed an
    /// uncontrolled store and its pagination becomes the current cursor.
    pub fn new(props: FilterBarProps<L>) -> Self {
        let FilterBarProps {
            catalog,
            initial_filters,
            value,
            on_change,
            placeholder,
            disabled,
            options,
            url,
        } = props;

        let mut seed = initial_filters.clone();
        let mut pagination = Pagination::default();
        let url = url.map(|(location, url_options)| {
            let mut sync = UrlSync::new(Arc::clone(&catalog), location, url_options);
            let hydrated = sync.hydrate(&initial_filters);
            seed = hydrated.filters;
            pagination = hydrated.pagination;
            sync
        });

        let mut store = match value {
            Some(value) => AppliedFilterStore::controlled(value),
            None => AppliedFilterStore::uncontrolled(seed),
        };
        if let Some(handler) = on_change {
            store.subscribe(handler);
        }
        debug!(mode = ?store.mode(), filters = store.len(), "filter bar created");

        Self {
            catalog,
            store,
            selection: SelectionController::new(options.into()),
            initial_filters,
            placeholder,
            disabled,
            disposed: false,
            pagination,
            url,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    // Reads

    /// Catalog the bar offers
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Text shown while the bar is empty
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Committed filters in display order
    pub fn filters(&self) -> &[AppliedFilter] {
        self.store.filters()
    }

    /// Ownership mode of the filter set
    pub const fn mode(&self) -> StoreMode {
        self.store.mode()
    }

    /// Selection state
    pub const fn selection(&self) -> &SelectionState {
        self.selection.state()
    }

    /// Pagination cursor
    pub const fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Whether user operations are ignored
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether [`Self::dispose`] has run
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Bound location, if URL sync is enabled
    pub fn location(&self) -> Option<&L> {
        self.url.as_ref().map(UrlSync::location)
    }

    /// Bound location, mutably
    ///
    /// Call [`Self::handle_navigation`] after changing it.
    pub fn location_mut(&mut self) -> Option<&mut L> {
        self.url.as_mut().map(UrlSync::location_mut)
    }

    /// Current state as one value
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            filters: self.store.filters().to_vec(),
            selection: self.selection.state().clone(),
            pagination: self.pagination,
            disabled: self.disabled,
        }
    }

    /// Definitions matching the browse keyword, in catalog order
    pub fn visible_options(&self) -> Vec<&FilterDefinition> {
        filter_catalog(&self.catalog, &self.selection.state().search_keyword)
    }

    /// Choices of the active definition matching the keyword
    pub fn visible_choices(&self) -> Vec<&ChoiceOption> {
        let state = self.selection.state();
        state
            .active_definition(&self.catalog)
            .map(|def| filter_choices(def, &state.search_keyword))
            .unwrap_or_default()
    }

    /// Flat `optionId → value` parameters for data fetching
    pub fn filter_params(&self) -> Map<String, Value> {
        filter_params(self.store.filters())
    }

    // Browse

    /// Open the browse surface
    pub fn open_browse(&mut self) -> bool {
        self.run([SelectionAction::OpenBrowse])
    }

    /// Close the browse surface, discarding the selection
    pub fn close_browse(&mut self) -> bool {
        self.run([SelectionAction::CloseBrowse])
    }

    /// Update the search keyword
    pub fn set_search_keyword(&mut self, keyword: impl Into<String>) -> bool {
        self.run([SelectionAction::SetSearchKeyword(keyword.into())])
    }

    // Selection

    /// Start editing the definition `option_id`
    pub fn select_option(&mut self, option_id: &str) -> bool {
        self.run([SelectionAction::Select(option_id.to_string())])
    }

    /// Return to browsing, discarding the selection
    pub fn cancel(&mut self) -> bool {
        self.run([SelectionAction::Cancel])
    }

    /// Replace the draft of a single-valued definition
    pub fn set_draft(&mut self, value: FilterValue) -> bool {
        self.run([SelectionAction::SetDraft(value)])
    }

    /// Add a multi-choice value to the staging buffer
    pub fn stage(&mut self, value: impl Into<Scalar>) -> bool {
        self.run([SelectionAction::Stage(value.into())])
    }

    /// Remove a multi-choice value from the staging buffer
    pub fn unstage(&mut self, value: impl Into<Scalar>) -> bool {
        self.run([SelectionAction::Unstage(value.into())])
    }

    /// Stage or unstage a multi-choice value
    pub fn toggle_staged(&mut self, value: impl Into<Scalar>) -> bool {
        self.run([SelectionAction::ToggleStaged(value.into())])
    }

    /// Replace the staging buffer
    pub fn set_staged(&mut self, values: Vec<Scalar>) -> bool {
        self.run([SelectionAction::SetStaged(values)])
    }

    /// Empty the staging buffer
    pub fn clear_staged(&mut self) -> bool {
        self.run([SelectionAction::ClearStaged])
    }

    /// Commit the draft
    ///
    /// Returns `true` when a filter was committed or the state changed.
    pub fn commit(&mut self) -> bool {
        self.run([SelectionAction::Commit])
    }

    /// Commit the staging buffer
    pub fn confirm_multi_select(&mut self) -> bool {
        self.run([SelectionAction::ConfirmMultiSelect])
    }

    /// Pick a choice of the active definition
    ///
    /// Single-choice definitions commit immediately; multi-choice definitions
    /// toggle the value in the staging buffer.
    pub fn choose(&mut self, value: impl Into<Scalar>) -> bool {
        let value = value.into();
        let kind = self
            .selection
            .state()
            .active_definition(&self.catalog)
            .map(|def| def.kind);
        match kind {
            Some(FilterKind::SingleChoice) => self.run([
                SelectionAction::SetDraft(FilterValue::Choice(value)),
                SelectionAction::Commit,
            ]),
            Some(FilterKind::MultiChoice) => self.run([SelectionAction::ToggleStaged(value)]),
            Some(kind) => {
                debug!(%kind, "choose on a definition without choices");
                false
            }
            None => {
                debug!("choose without an active definition");
                false
            }
        }
    }

    // Store

    /// Remove the filter for `option_id`
    pub fn remove(&mut self, option_id: &str) -> bool {
        if !self.is_interactive() {
            return false;
        }
        self.store.remove(option_id);
        self.filters_changed();
        self.notify();
        true
    }

    /// Remove every filter
    pub fn reset_all(&mut self) -> bool {
        if !self.is_interactive() {
            return false;
        }
        self.store.reset_all();
        self.filters_changed();
        self.notify();
        true
    }

    /// Mirror the owner's value into a controlled bar
    ///
    /// Does not fire `on_change` or write the location.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotControlled` for an uncontrolled bar.
    pub fn set_value(&mut self, value: Vec<AppliedFilter>) -> Result<(), StoreError> {
        if self.disposed {
            return Ok(());
        }
        self.store.mirror(value)?;
        self.notify();
        Ok(())
    }

    // Timing

    /// Input lost focus at `now`
    pub fn blur_at(&mut self, now: Instant) {
        if self.is_interactive() {
            self.selection.blur_at(now);
        }
    }

    /// Input lost focus
    pub fn blur(&mut self) {
        self.blur_at(Instant::now());
    }

    /// Fire a pending blur reset whose delay has elapsed at `now`
    pub fn tick_at(&mut self, now: Instant) -> bool {
        if !self.is_interactive() {
            return false;
        }
        let changed = self.selection.tick_at(&self.catalog, now);
        if changed {
            self.notify();
        }
        changed
    }

    /// Fire a pending blur reset whose delay has elapsed
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Time left before a pending blur reset fires
    pub fn time_until_blur(&self, now: Instant) -> Option<Duration> {
        self.selection.time_until_blur(now)
    }

    // URL

    /// Re-derive state after navigation the bar did not cause
    ///
    /// Returns `true` when the state was re-derived. Controlled bars only
    /// take the pagination from the location.
    pub fn handle_navigation(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        let Some(sync) = self.url.as_mut() else {
            return false;
        };
        let Some(rehydrated) = sync.location_changed(&self.initial_filters) else {
            return false;
        };
        self.pagination = rehydrated.pagination;
        if self.store.mode() == StoreMode::Uncontrolled {
            self.store.rehydrate(rehydrated.filters);
        }
        self.selection.reset();
        self.notify();
        true
    }

    /// Move to another page
    pub fn update_pagination(&mut self, pagination: Pagination) -> bool {
        if self.disposed || pagination == self.pagination {
            return false;
        }
        self.pagination = pagination;
        if let Some(sync) = self.url.as_mut() {
            sync.update_pagination(pagination);
        }
        self.notify();
        true
    }

    // Lifecycle

    /// Enable or disable user operations; disabling drops the selection
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.disposed || self.disabled == disabled {
            return;
        }
        self.disabled = disabled;
        if disabled {
            self.selection.reset();
        }
        self.notify();
    }

    /// Register a render listener
    pub fn subscribe(&mut self, listener: impl FnMut(&Snapshot) + 'static) -> ListenerId {
        let id = self.next_listener;
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a render listener
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Tear down: drop listeners and the pending blur, detach the location
    ///
    /// Every later operation is a no-op.
    pub fn dispose(&mut self) -> Option<L> {
        if self.disposed {
            return None;
        }
        debug!("disposing filter bar");
        self.disposed = true;
        self.selection.reset();
        self.store.clear_listeners();
        self.listeners.clear();
        self.url.take().map(UrlSync::into_location)
    }

    const fn is_interactive(&self) -> bool {
        !self.disabled && !self.disposed
    }

    fn run(&mut self, actions: impl IntoIterator<Item = SelectionAction>) -> bool {
        if !self.is_interactive() {
            debug!(disabled = self.disabled, "ignoring operation on inactive filter bar");
            return false;
        }
        let mut changed = false;
        let mut committed = false;
        for action in actions {
            let Dispatch { changed: moved, commit } = self.selection.dispatch(&self.catalog, action);
            changed |= moved;
            if let Some(filter) = commit {
                self.store.upsert(filter);
                committed = true;
            }
        }
        if committed {
            self.filters_changed();
        }
        if changed || committed {
            self.notify();
        }
        changed || committed
    }

    fn filters_changed(&mut self) {
        self.pagination = self.pagination.first_page();
        if let Some(sync) = self.url.as_mut() {
            sync.filters_changed(self.store.filters());
        }
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }
}

impl<L: Location> std::fmt::Debug for FilterBar<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterBar")
            .field("store", &self.store)
            .field("selection", self.selection.state())
            .field("pagination", &self.pagination)
            .field("disabled", &self.disabled)
            .field("disposed", &self.disposed)
            .field("url_sync", &self.url.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_catalog, text_filter};
    use crate::url::{QueryParams, UrlSyncOptions};
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<Vec<String>>>>;

    fn recording_bar() -> (FilterBar, Log) {
        let log: Log = Rc::default();
        let sink = Rc::clone(&log);
        let bar = FilterBar::builder(sample_catalog())
            .on_change(move |filters| {
                sink.borrow_mut()
                    .push(filters.iter().map(|f| f.option_id.clone()).collect());
            })
            .build();
        (bar, log)
    }

    fn commit_text(bar: &mut FilterBar<impl Location>, id: &str, text: &str) -> bool {
        bar.select_option(id);
        bar.set_draft(FilterValue::Text(text.into()));
        bar.commit()
    }

    #[test]
    fn test_commit_order_and_change_count() {
        let (mut bar, log) = recording_bar();

        assert!(commit_text(&mut bar, "name", "foo"));
        bar.select_option("status");
        assert!(bar.choose("running"));
        assert!(commit_text(&mut bar, "name", "bar"));

        let ids: Vec<&str> = bar.filters().iter().map(|f| f.option_id.as_str()).collect();
        assert_eq!(ids, vec!["status", "name"]);
        assert_eq!(bar.filters()[1].value, FilterValue::Text("bar".into()));
        assert_eq!(log.borrow().len(), 3);
        assert_eq!(log.borrow()[1], vec!["name", "status"]);
    }

    #[test]
    fn test_multi_select_labels() {
        let (mut bar, log) = recording_bar();
        bar.select_option("tags");
        bar.stage("a");
        bar.choose("b");
        assert!(bar.confirm_multi_select());

        let filter = &bar.filters()[0];
        assert_eq!(
            filter.value,
            FilterValue::MultiChoice(vec![Scalar::from("a"), Scalar::from("b")])
        );
        assert_eq!(filter.display_value, "Alpha, Beta");
        assert_eq!(log.borrow().len(), 1);
        assert!(!bar.selection().is_editing());
    }

    #[test]
    fn test_empty_commits_are_silent() {
        let (mut bar, log) = recording_bar();
        assert!(!bar.commit());
        bar.select_option("tags");
        assert!(!bar.confirm_multi_select());
        bar.select_option("name");
        bar.commit();
        assert!(log.borrow().is_empty());
        assert!(bar.filters().is_empty());
    }

    #[test]
    fn test_remove_and_reset_fire_change() {
        let (mut bar, log) = recording_bar();
        commit_text(&mut bar, "name", "foo");
        assert!(bar.remove("name"));
        assert!(bar.filters().is_empty());
        assert!(bar.reset_all());
        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn test_choose_outside_choice_kinds() {
        let (mut bar, _) = recording_bar();
        assert!(!bar.choose("x"));
        bar.select_option("name");
        assert!(!bar.choose("x"));
        assert!(bar.filters().is_empty());
    }

    #[test]
    fn test_visible_options_and_choices() {
        let (mut bar, _) = recording_bar();
        assert_eq!(bar.visible_options().len(), 6);
        bar.set_search_keyword("TA");
        let ids: Vec<&str> = bar.visible_options().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["status", "tags"]);

        bar.select_option("tags");
        bar.set_search_keyword("be");
        let labels: Vec<&str> = bar.visible_choices().iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Beta"]);
    }

    #[test]
    fn test_auto_select_single_definition() {
        let catalog = Catalog::new(vec![crate::catalog::FilterDefinition::text("q", "Query")]).unwrap();
        let mut bar = FilterBar::builder(catalog.clone()).build();
        bar.open_browse();
        assert_eq!(bar.selection().active_option_id.as_deref(), Some("q"));

        let mut bar = FilterBar::builder(catalog)
            .options(FilterBarOptions {
                auto_select_single: false,
                ..FilterBarOptions::default()
            })
            .build();
        bar.open_browse();
        assert!(!bar.selection().is_editing());
    }

    #[test]
    fn test_disabled_ignores_operations() {
        let (mut bar, log) = recording_bar();
        bar.select_option("name");
        bar.set_disabled(true);
        assert!(!bar.selection().is_editing());

        assert!(!commit_text(&mut bar, "name", "foo"));
        assert!(!bar.reset_all());
        assert!(!bar.open_browse());
        assert!(log.borrow().is_empty());

        bar.set_disabled(false);
        assert!(commit_text(&mut bar, "name", "foo"));
    }

    #[test]
    fn test_controlled_mirrors_owner_value() {
        let changes: Rc<RefCell<Vec<Vec<AppliedFilter>>>> = Rc::default();
        let sink = Rc::clone(&changes);
        let mut bar = FilterBar::builder(sample_catalog())
            .initial_filters(vec![text_filter("name", "Name", "ignored")])
            .value(vec![text_filter("name", "Name", "owned")])
            .on_change(move |filters| sink.borrow_mut().push(filters.to_vec()))
            .build();
        assert_eq!(bar.mode(), StoreMode::Controlled);
        assert_eq!(bar.filters()[0].display_value, "owned");

        commit_text(&mut bar, "name", "next");
        let proposed = changes.borrow()[0].clone();
        assert_eq!(proposed[0].display_value, "next");

        bar.set_value(vec![text_filter("name", "Name", "owner-choice")]).unwrap();
        assert_eq!(bar.filters()[0].display_value, "owner-choice");
        assert_eq!(changes.borrow().len(), 1);
    }

    #[test]
    fn test_uncontrolled_rejects_set_value() {
        let (mut bar, _) = recording_bar();
        assert_eq!(bar.set_value(Vec::new()), Err(StoreError::NotControlled));
    }

    #[test]
    fn test_blur_reset_and_dispose() {
        let (mut bar, _) = recording_bar();
        bar.select_option("name");
        let start = Instant::now();
        bar.blur_at(start);
        assert!(bar.time_until_blur(start).is_some());
        assert!(bar.tick_at(start + Duration::from_millis(120)));
        assert!(!bar.selection().is_editing());

        bar.select_option("name");
        bar.blur_at(start);
        assert!(bar.dispose().is_none());
        assert!(bar.time_until_blur(start).is_none());
        assert!(!bar.tick_at(start + Duration::from_millis(120)));
        assert!(!bar.select_option("status"));
        assert!(bar.dispose().is_none());
    }

    #[test]
    fn test_snapshots_follow_changes() {
        let (mut bar, _) = recording_bar();
        let seen: Rc<RefCell<Vec<Snapshot>>> = Rc::default();
        let sink = Rc::clone(&seen);
        let id = bar.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));

        bar.open_browse();
        commit_text(&mut bar, "name", "foo");
        let last = seen.borrow().last().cloned().unwrap();
        assert_eq!(last.filters.len(), 1);
        assert!(!last.selection.browse_open);

        let count = seen.borrow().len();
        bar.cancel();
        assert_eq!(seen.borrow().len(), count);

        assert!(bar.unsubscribe(id));
        bar.open_browse();
        assert_eq!(seen.borrow().len(), count);
    }

    #[test]
    fn test_commit_resets_page_in_location() {
        let location = MemoryLocation::new("pageNum=5&pageSize=50");
        let mut bar = FilterBar::builder(sample_catalog())
            .with_url_sync(location, UrlSyncOptions::default())
            .build();
        assert_eq!(bar.pagination(), Pagination::new(5, 50));

        commit_text(&mut bar, "name", "foo");
        assert_eq!(bar.pagination(), Pagination::new(1, 50));

        let location = bar.location().unwrap();
        assert_eq!(location.history_len(), 1);
        let params = QueryParams::parse(&location.search()).unwrap();
        assert_eq!(params.get("pageNum"), Some("1"));
        assert_eq!(params.get("pageSize"), Some("50"));
        assert_eq!(bar.filter_params().get("name"), Some(&Value::from("foo")));
    }

    #[test]
    fn test_navigation_rehydrates() {
        let mut bar = FilterBar::builder(sample_catalog())
            .with_url_sync(MemoryLocation::default(), UrlSyncOptions::default())
            .build();
        commit_text(&mut bar, "name", "foo");
        assert!(!bar.handle_navigation());

        bar.location_mut()
            .unwrap()
            .navigate(r#"filters={"status":"stopped"}&pageNum=3"#);
        let search = bar.location().unwrap().search();
        assert!(bar.handle_navigation());
        assert_eq!(bar.filters().len(), 1);
        assert_eq!(bar.filters()[0].option_id, "status");
        assert_eq!(bar.pagination().page_num, 3);
        assert_eq!(bar.location().unwrap().history_len(), 2);
        assert_eq!(bar.location().unwrap().search(), search);

        bar.location_mut().unwrap().back();
        let search = bar.location().unwrap().search();
        assert!(bar.handle_navigation());
        assert_eq!(bar.filters()[0].display_value, "foo");
        assert_eq!(bar.location().unwrap().search(), search);
    }

    #[test]
    fn test_update_pagination_writes_location() {
        let mut bar = FilterBar::builder(sample_catalog())
            .with_url_sync(MemoryLocation::default(), UrlSyncOptions::default())
            .build();
        assert!(bar.update_pagination(Pagination::new(2, 20)));
        assert!(!bar.update_pagination(Pagination::new(2, 20)));
        let params = QueryParams::parse(&bar.location().unwrap().search()).unwrap();
        assert_eq!(params.get("pageNum"), Some("2"));

        let location = bar.dispose().unwrap();
        assert_eq!(location.history_len(), 1);
        assert!(bar.location().is_none());
    }
}
