//! Decode command - show the filter bar state a query string holds

use crate::{
    FilterbarError,
    catalog::Catalog,
    config::FilterbarConfig,
    output,
    url::QueryParams,
};
use serde_json::json;
use std::sync::Arc;

type Result<T> = std::result::Result<T, FilterbarError>;

/// Execute the decode command
///
/// A filters parameter that fails to decode is reported, not fatal.
///
/// # Errors
/// Returns an error if the query string itself cannot be parsed.
pub fn execute(
    catalog: Arc<Catalog>,
    query: &str,
    json: bool,
    config: &FilterbarConfig,
    quiet: bool,
) -> Result<()> {
    let codec = super::codec(catalog, config);
    let params = QueryParams::parse(query)?;
    let decoded = codec.read_filters(&params, &[]);
    let pagination = codec.read_pagination(&params);

    if json {
        let value = json!({
            "filters": decoded.filters,
            "pagination": pagination,
            "error": decoded.error.as_ref().map(ToString::to_string),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if let Some(err) = &decoded.error
        && !quiet
    {
        eprintln!("{}", output::warning(&format!("{err}; showing no filters")));
    }

    if decoded.filters.is_empty() {
        if !quiet {
            println!("No filters applied");
        }
    } else {
        if !quiet {
            println!("{} filter(s):", decoded.filters.len());
        }
        for filter in &decoded.filters {
            println!("{}", output::applied_filter(filter, quiet));
        }
    }
    println!("{}", output::pagination(pagination, quiet));
    Ok(())
}
