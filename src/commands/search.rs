//! Search command - list catalog definitions matching a keyword

use crate::{FilterbarError, catalog::Catalog, output, search::filter_catalog};

type Result<T> = std::result::Result<T, FilterbarError>;

/// Execute the search command
///
/// # Errors
/// Never fails once the catalog is loaded; the signature matches the other commands.
pub fn execute(catalog: &Catalog, keyword: &str, quiet: bool) -> Result<()> {
    let hits = filter_catalog(catalog, keyword);

    if hits.is_empty() {
        if !quiet {
            println!("No filters match '{keyword}'");
        }
        return Ok(());
    }

    if !quiet {
        println!("Found {} filter(s):", hits.len());
    }
    for definition in hits {
        println!("{}", output::definition(definition, quiet));
    }
    Ok(())
}
