use anyhow::Result;
use std::path::Path;

use super::{load_catalog, output};

pub fn run_suggest(data_dir: &Path, query: &str, limit: usize, json: bool) -> Result<()> {
    let catalog = load_catalog(data_dir)?;
    let suggestions = setlist_search::suggest_limited(catalog.entries(), query, limit);

    if json {
        return output::print_json(&suggestions);
    }

    if suggestions.is_empty() {
        println!("No suggestions.");
        return Ok(());
    }

    for suggestion in &suggestions {
        println!(
            "{:<16} {}  (artist {})",
            suggestion.kind, suggestion.label, suggestion.artist_id
        );
    }
    Ok(())
}
