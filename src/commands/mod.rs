//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and works on a catalog and a query string.

pub mod apply;
pub mod decode;
pub mod params;
pub mod search;

pub use apply::execute as apply;
pub use decode::execute as decode;
pub use params::execute as params;
pub use search::execute as search;

use crate::{FilterbarError, catalog::Catalog, cli::CatalogArgs, config::FilterbarConfig, url::UrlCodec};
use std::sync::Arc;
use tracing::debug;

type Result<T> = std::result::Result<T, FilterbarError>;

/// Load the catalog named on the command line
///
/// # Errors
/// Returns `FilterbarError::CatalogError` if the file cannot be read or is invalid.
pub fn load_catalog(args: &CatalogArgs) -> Result<Arc<Catalog>> {
    let catalog = Catalog::load(&args.catalog)?;
    debug!(path = %args.catalog.display(), definitions = catalog.len(), "loaded catalog");
    Ok(Arc::new(catalog))
}

/// Codec configured from the URL settings
#[must_use]
pub fn codec(catalog: Arc<Catalog>, config: &FilterbarConfig) -> UrlCodec {
    UrlCodec::new(catalog)
        .with_key(config.url.key.clone())
        .with_default_page_size(config.url.default_page_size)
}
