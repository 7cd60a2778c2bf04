//! Apply command - edit the filters of a query string
//!
//! The query string is loaded into a URL-synced [`FilterBar`] and the
//! mutations are replayed through it: `--reset` first, then every
//! `--remove`, then every `--set`, each in the order given.

use crate::{
    FilterbarError,
    bar::FilterBar,
    catalog::{Catalog, FilterDefinition, FilterKind, Scalar},
    cli::Assignment,
    config::FilterbarConfig,
    filters::FilterValue,
    output,
    url::{Location, MemoryLocation},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use std::sync::Arc;

type Result<T> = std::result::Result<T, FilterbarError>;

/// Mutations requested on the command line
#[derive(Debug, Clone, Default)]
pub struct Mutations<'a> {
    /// Remove every filter first
    pub reset: bool,
    /// Filters to remove
    pub remove: &'a [String],
    /// Filters to commit
    pub set: &'a [Assignment],
}

/// Execute the apply command
///
/// # Errors
/// Returns `FilterbarError::InvalidInput` for an unknown filter id or a value
/// that does not fit its definition.
pub fn execute(
    catalog: Arc<Catalog>,
    query: &str,
    mutations: &Mutations<'_>,
    config: &FilterbarConfig,
    quiet: bool,
) -> Result<()> {
    let (query, filters) = apply_mutations(catalog, query, mutations, config)?;
    if !quiet {
        for line in &filters {
            eprintln!("{line}");
        }
    }
    println!("?{query}");
    Ok(())
}

/// Replay `mutations` on `query`
///
/// Returns the resulting query string and the formatted filters.
///
/// # Errors
/// Returns `FilterbarError::InvalidInput` for an unknown filter id or a value
/// that does not fit its definition.
pub fn apply_mutations(
    catalog: Arc<Catalog>,
    query: &str,
    mutations: &Mutations<'_>,
    config: &FilterbarConfig,
) -> Result<(String, Vec<String>)> {
    let url_options = config.url_options().unwrap_or_default();
    let mut bar = FilterBar::builder(Arc::clone(&catalog))
        .placeholder(config.placeholder.clone())
        .options(config.bar_options())
        .with_url_sync(MemoryLocation::new(query), url_options)
        .build();

    if mutations.reset {
        bar.reset_all();
    }
    for option_id in mutations.remove {
        bar.remove(option_id);
    }
    for assignment in mutations.set {
        apply_assignment(&mut bar, &catalog, assignment)?;
    }

    let filters = bar
        .filters()
        .iter()
        .map(|f| output::applied_filter(f, false))
        .collect();
    let query = bar.location().map(Location::search).unwrap_or_default();
    Ok((query, filters))
}

fn apply_assignment(
    bar: &mut FilterBar<MemoryLocation>,
    catalog: &Catalog,
    assignment: &Assignment,
) -> Result<()> {
    let definition = catalog.get(&assignment.option_id).ok_or_else(|| {
        FilterbarError::InvalidInput(format!("Unknown filter '{}'", assignment.option_id))
    })?;

    bar.select_option(&definition.id);
    let committed = if definition.kind == FilterKind::MultiChoice {
        bar.set_staged(parse_list(definition, &assignment.value));
        bar.confirm_multi_select()
    } else {
        bar.set_draft(parse_value(definition, &assignment.value)?);
        bar.commit()
    };

    if committed {
        Ok(())
    } else {
        bar.cancel();
        Err(FilterbarError::InvalidInput(format!(
            "'{}' is not a valid value for {}",
            assignment.value, definition.label
        )))
    }
}

/// Parse a command-line value according to the definition kind
///
/// # Errors
/// Returns `FilterbarError::InvalidInput` for malformed dates or ranges.
pub fn parse_value(definition: &FilterDefinition, raw: &str) -> Result<FilterValue> {
    match definition.kind {
        FilterKind::Text => Ok(FilterValue::Text(raw.to_string())),
        FilterKind::SingleChoice => Ok(FilterValue::Choice(choice_value(definition, raw))),
        FilterKind::MultiChoice => Ok(FilterValue::MultiChoice(parse_list(definition, raw))),
        FilterKind::Date => parse_date(raw).map(FilterValue::Date),
        FilterKind::DateRange => {
            let (start, end) = raw.split_once("..").ok_or_else(|| {
                FilterbarError::InvalidInput(format!("Expected START..END, got '{raw}'"))
            })?;
            Ok(FilterValue::DateRange(parse_date(start)?, parse_date(end)?))
        }
        FilterKind::Custom => Ok(FilterValue::Custom(
            serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string())),
        )),
    }
}

fn parse_list(definition: &FilterDefinition, raw: &str) -> Vec<Scalar> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| choice_value(definition, s))
        .collect()
}

/// Catalog value whose text form is `raw`, keeping its numeric type
fn choice_value(definition: &FilterDefinition, raw: &str) -> Scalar {
    definition
        .choices
        .iter()
        .find(|c| c.value.to_string() == raw)
        .map_or_else(|| Scalar::from(raw), |c| c.value.clone())
}

fn parse_date(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        && let Some(midnight) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(midnight.and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|_| FilterbarError::InvalidInput(format!("Invalid date '{raw}', expected YYYY-MM-DD")))
}
