pub mod config;
pub mod filter;
pub mod output;
pub mod search;
pub mod show;
pub mod suggest;

use anyhow::{Context, Result};
use setlist_core::{Catalog, EntityStore};
use std::path::Path;

pub use filter::{run_filter, FilterArgs};
pub use search::run_search;
pub use show::show_artist;
pub use suggest::run_suggest;

/// Load the four collections from `data_dir` and join them.
pub fn load_catalog(data_dir: &Path) -> Result<Catalog> {
    let store = EntityStore::load_dir(data_dir)
        .with_context(|| format!("Failed to load catalog from {}", data_dir.display()))?;
    Ok(Catalog::build(store))
}
