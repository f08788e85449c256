use anyhow::{Context, Result};
use serde::Serialize;
use setlist_core::CatalogEntry;

/// Print `value` as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

/// One line per artist: id, name, formation year, member count.
pub fn format_entry(entry: &CatalogEntry) -> String {
    let artist = &entry.artist;
    format!(
        "{:>4}  {}  ({}, {} member{})",
        artist.id.get(),
        artist.name,
        artist.creation_date,
        artist.member_count(),
        if artist.member_count() == 1 { "" } else { "s" }
    )
}

pub fn print_entries(entries: &[&CatalogEntry], json: bool) -> Result<()> {
    if json {
        return print_json(entries);
    }

    if entries.is_empty() {
        println!("No matching artists.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", format_entry(entry));
    }
    println!("\n{} artist{}", entries.len(), if entries.len() == 1 { "" } else { "s" });
    Ok(())
}
