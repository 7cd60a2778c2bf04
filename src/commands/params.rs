//! Params command - flat data-fetching parameters of a query string

use crate::{
    FilterbarError,
    catalog::Catalog,
    config::FilterbarConfig,
    output,
    url::{QueryParams, filter_params},
};
use serde_json::Value;
use std::sync::Arc;

type Result<T> = std::result::Result<T, FilterbarError>;

/// Execute the params command
///
/// # Errors
/// Returns an error if the query string cannot be parsed.
pub fn execute(catalog: Arc<Catalog>, query: &str, config: &FilterbarConfig, quiet: bool) -> Result<()> {
    let codec = super::codec(catalog, config);
    let params = QueryParams::parse(query)?;
    let decoded = codec.read_filters(&params, &[]);

    if let Some(err) = &decoded.error
        && !quiet
    {
        eprintln!("{}", output::warning(&err.to_string()));
    }

    let flat = Value::Object(filter_params(&decoded.filters));
    println!("{}", serde_json::to_string_pretty(&flat)?);
    Ok(())
}
