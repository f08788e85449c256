use anyhow::Result;
use setlist_core::ArtistId;
use std::path::Path;

use super::{load_catalog, output};

/// Show one artist with its joined venues and concert dates.
pub fn show_artist(data_dir: &Path, id: u32, json: bool) -> Result<()> {
    let catalog = load_catalog(data_dir)?;
    let entry = catalog.require(ArtistId::new(id))?;

    if json {
        return output::print_json(entry);
    }

    let artist = &entry.artist;
    println!("\n🎤 {}\n", artist.name);
    println!("  Id: {}", artist.id);
    println!("  Formed: {}", artist.creation_date);
    println!("  First album: {}", artist.first_album);
    println!("  Members: {}", artist.members.join(", "));

    if entry.locations.is_empty() {
        println!("\n  No concerts on record");
        return Ok(());
    }

    println!("\n  Locations:");
    for label in &artist.locations {
        println!("    - {}", label);
    }
    println!("\n  Dates:");
    for date in &entry.dates {
        println!("    - {}", date);
    }

    Ok(())
}
