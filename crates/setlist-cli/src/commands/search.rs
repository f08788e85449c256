use anyhow::Result;
use std::path::Path;

use super::{load_catalog, output};

/// Free-text search across names, members, albums, years, venues and dates.
pub fn run_search(data_dir: &Path, query: &str, json: bool) -> Result<()> {
    let catalog = load_catalog(data_dir)?;
    log::info!("Searching {} artists for {:?}", catalog.len(), query);

    let hits = setlist_search::search(catalog.entries(), query);
    output::print_entries(&hits, json)
}
