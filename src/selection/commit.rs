//! Building applied filters from a finished selection

use crate::catalog::{FilterDefinition, FilterKind, Scalar};
use crate::filters::{AppliedFilter, FilterValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Fallback when a configured date format cannot be rendered
const ISO_DATE: &str = "%Y-%m-%d";

/// Separator between multi-choice labels in the display value
pub const MULTI_SEPARATOR: &str = ", ";

/// How display values are formatted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// `chrono` format string for dates
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Text between the start and end of a date range
    #[serde(default = "default_range_separator")]
    pub range_separator: String,
}

fn default_date_format() -> String {
    ISO_DATE.to_string()
}

fn default_range_separator() -> String {
    " ~ ".to_string()
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            range_separator: default_range_separator(),
        }
    }
}

impl DisplayOptions {
    /// Render a date with the configured format
    #[must_use]
    pub fn format_date(&self, date: &DateTime<Utc>) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_ok() {
            return out;
        }
        date.format(ISO_DATE).to_string()
    }
}

/// Build the applied filter for a single-valued draft
///
/// Returns `None` when the draft is empty, does not fit the definition, is
/// a choice the definition does not offer, or belongs to a multi-choice
/// definition (those commit through the staging buffer).
#[must_use]
pub fn commit_draft(
    definition: &FilterDefinition,
    draft: &FilterValue,
    display: &DisplayOptions,
) -> Option<AppliedFilter> {
    if draft.is_empty() || !draft.fits(definition.kind) {
        return None;
    }
    let shown = match draft {
        FilterValue::Text(text) => text.clone(),
        FilterValue::Choice(value) => definition.choice_label(value)?.to_string(),
        FilterValue::Date(date) => display.format_date(date),
        FilterValue::DateRange(start, end) => format!(
            "{}{}{}",
            display.format_date(start),
            display.range_separator,
            display.format_date(end)
        ),
        FilterValue::Custom(value) => match &definition.display {
            Some(hook) => hook.render(value),
            None => draft.display_text(),
        },
        FilterValue::MultiChoice(_) | FilterValue::Absent => return None,
    };
    Some(AppliedFilter::new(
        definition.id.clone(),
        definition.label.clone(),
        draft.clone(),
        shown,
    ))
}

/// Build the applied filter for a confirmed multi-choice staging buffer
///
/// The display value joins each staged value's catalog label (the raw value
/// when the catalog has no label for it) with `", "`.
#[must_use]
pub fn commit_staged(definition: &FilterDefinition, staged: &[Scalar]) -> Option<AppliedFilter> {
    if definition.kind != FilterKind::MultiChoice || staged.is_empty() {
        return None;
    }
    let shown = staged
        .iter()
        .map(|v| {
            definition
                .choice_label(v)
                .map_or_else(|| v.to_string(), str::to_string)
        })
        .collect::<Vec<_>>()
        .join(MULTI_SEPARATOR);
    Some(AppliedFilter::new(
        definition.id.clone(),
        definition.label.clone(),
        FilterValue::MultiChoice(staged.to_vec()),
        shown,
    ))
}
