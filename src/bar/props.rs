//! Construction contract of the filter bar

use super::FilterBar;
use crate::catalog::Catalog;
use crate::filters::AppliedFilter;
use crate::selection::{DisplayOptions, SelectionOptions};
use crate::url::{Location, MemoryLocation, UrlSyncOptions};
use std::sync::Arc;
use std::time::Duration;

/// Placeholder shown by an empty bar
pub const DEFAULT_PLACEHOLDER: &str = "Add filter";

/// Change callback receiving the complete ordered filter set
pub type ChangeHandler = Box<dyn FnMut(&[AppliedFilter])>;

/// Behavior switches of the filter bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarOptions {
    /// Opening the browse surface on a one-definition catalog selects it
    pub auto_select_single: bool,

    /// Grace delay before a blur resets the selection
    pub blur_delay: Duration,

    /// Display value formatting
    pub display: DisplayOptions,
}

impl Default for FilterBarOptions {
    fn default() -> Self {
        SelectionOptions::default().into()
    }
}

impl From<SelectionOptions> for FilterBarOptions {
    fn from(options: SelectionOptions) -> Self {
        Self {
            auto_select_single: options.auto_select_single,
            blur_delay: options.blur_delay,
            display: options.display,
        }
    }
}

impl From<FilterBarOptions> for SelectionOptions {
    fn from(options: FilterBarOptions) -> Self {
        Self {
            auto_select_single: options.auto_select_single,
            blur_delay: options.blur_delay,
            display: options.display,
        }
    }
}

/// Properties of a filter bar
///
/// Supplying [`Self::value`] makes the bar controlled: the owner holds the
/// filter set and mirrors it back with [`FilterBar::set_value`]. Otherwise
/// the bar is seeded once from [`Self::initial_filters`].
pub struct FilterBarProps<L: Location = MemoryLocation> {
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) initial_filters: Vec<AppliedFilter>,
    pub(crate) value: Option<Vec<AppliedFilter>>,
    pub(crate) on_change: Option<ChangeHandler>,
    pub(crate) placeholder: String,
    pub(crate) disabled: bool,
    pub(crate) options: FilterBarOptions,
    pub(crate) url: Option<(L, UrlSyncOptions)>,
}

impl FilterBarProps<MemoryLocation> {
    /// Start from a catalog with every other property at its default
    pub fn new(catalog: impl Into<Arc<Catalog>>) -> Self {
        Self {
            catalog: catalog.into(),
            initial_filters: Vec::new(),
            value: None,
            on_change: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            disabled: false,
            options: FilterBarOptions::default(),
            url: None,
        }
    }
}

impl<L: Location> FilterBarProps<L> {
    /// Seed an uncontrolled bar
    #[must_use]
    pub fn initial_filters(mut self, filters: Vec<AppliedFilter>) -> Self {
        self.initial_filters = filters;
        self
    }

    /// Make the bar controlled with `value` as the current filter set
    #[must_use]
    pub fn value(mut self, value: Vec<AppliedFilter>) -> Self {
        self.value = Some(value);
        self
    }

    /// Called with the complete set after every committed mutation
    #[must_use]
    pub fn on_change(mut self, handler: impl FnMut(&[AppliedFilter]) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Text shown while the bar is empty
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Start disabled
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Behavior switches
    #[must_use]
    pub fn options(mut self, options: FilterBarOptions) -> Self {
        self.options = options;
        self
    }

    /// Keep filters and pagination in `location`
    #[must_use]
    pub fn with_url_sync<M: Location>(self, location: M, options: UrlSyncOptions) -> FilterBarProps<M> {
        FilterBarProps {
            catalog: self.catalog,
            initial_filters: self.initial_filters,
            value: self.value,
            on_change: self.on_change,
            placeholder: self.placeholder,
            disabled: self.disabled,
            options: self.options,
            url: Some((location, options)),
        }
    }

    /// Build the bar
    pub fn build(self) -> FilterBar<L> {
        FilterBar::new(self)
    }
}
