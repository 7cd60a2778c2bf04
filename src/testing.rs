//! Testing utilities for filterbar
//!
//! Shared fixtures for unit tests: a catalog covering every filter kind and
//! helpers for building applied filters.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Catalog, ChoiceOption, FilterDefinition};
use crate::filters::{AppliedFilter, FilterValue};

/// Catalog with one definition of each kind
///
/// | id | kind | choices |
/// |---|---|---|
/// | `name` | text | |
/// | `status` | single choice | `running` → Running, `stopped` → Stopped |
/// | `tags` | multi choice | `a` → Alpha, `b` → Beta, `c` → Gamma |
/// | `created` | date | |
/// | `period` | date range | |
/// | `score` | custom | |
///
/// # Panics
/// Never in practice; the ids are unique.
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        FilterDefinition::text("name", "Name"),
        FilterDefinition::single_choice(
            "status",
            "Status",
            vec![
                ChoiceOption::new("running", "Running"),
                ChoiceOption::new("stopped", "Stopped"),
            ],
        ),
        FilterDefinition::multi_choice(
            "tags",
            "Tags",
            vec![
                ChoiceOption::new("a", "Alpha"),
                ChoiceOption::new("b", "Beta"),
                ChoiceOption::new("c", "Gamma"),
            ],
        ),
        FilterDefinition::date("created", "Created"),
        FilterDefinition::date_range("period", "Period"),
        FilterDefinition::custom("score", "Score"),
    ])
    .expect("sample catalog ids are unique")
}

/// Applied text filter whose display value is the text itself
#[must_use]
pub fn text_filter(option_id: &str, label: &str, text: &str) -> AppliedFilter {
    AppliedFilter::new(option_id, label, FilterValue::Text(text.to_string()), text)
}

/// Applied single-choice filter
#[must_use]
pub fn choice_filter(option_id: &str, label: &str, value: &str, display: &str) -> AppliedFilter {
    AppliedFilter::new(option_id, label, FilterValue::Choice(value.into()), display)
}
