//! Free-text search across an artist's own fields and its joined concerts.

use setlist_core::CatalogEntry;

use crate::text::{contains_normalized, extract_year, normalize_query};

/// Which field of an entry satisfied a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchField {
    Name,
    Member,
    FirstAlbum,
    CreationYear,
    Location,
    Date,
}

/// The first field of `entry` matching an already-normalized query, checked
/// in the order name, members, first album, creation year, joined locations,
/// joined dates.
pub fn match_field(entry: &CatalogEntry, query: &str) -> Option<MatchField> {
    let artist = &entry.artist;

    if contains_normalized(&artist.name, query) {
        return Some(MatchField::Name);
    }
    if artist.members.iter().any(|m| contains_normalized(m, query)) {
        return Some(MatchField::Member);
    }
    if contains_normalized(&artist.first_album, query)
        || extract_year(&artist.first_album).is_some_and(|y| y.to_string().contains(query))
    {
        return Some(MatchField::FirstAlbum);
    }
    if artist.creation_date.to_string().contains(query) {
        return Some(MatchField::CreationYear);
    }
    if entry
        .locations
        .iter()
        .any(|loc| contains_normalized(&loc.city, query) || contains_normalized(&loc.country, query))
    {
        return Some(MatchField::Location);
    }
    if entry.dates.iter().any(|d| contains_normalized(d, query)) {
        return Some(MatchField::Date);
    }
    None
}

/// Entries matching `query`, in input order.
///
/// A blank query matches everything.
pub fn search<'a, I>(artists: I, query: &str) -> Vec<&'a CatalogEntry>
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    let query = normalize_query(query);
    if query.is_empty() {
        return artists.into_iter().collect();
    }

    let hits: Vec<&CatalogEntry> = artists
        .into_iter()
        .filter(|entry| match_field(entry, &query).is_some())
        .collect();
    log::debug!("Search {:?} matched {} artists", query, hits.len());
    hits
}
