//! Typed, deduplicated suggestions for incremental search.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use setlist_core::{ArtistId, CatalogEntry};

use crate::text::{contains_normalized, extract_year, normalize_query};

/// What a suggestion label refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    #[serde(rename = "artist")]
    ArtistName,
    Member,
    Location,
    FirstAlbumYear,
    CreationYear,
}

impl SuggestionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ArtistName => "artist",
            Self::Member => "member",
            Self::Location => "location",
            Self::FirstAlbumYear => "first_album_year",
            Self::CreationYear => "creation_year",
        }
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A matching token and the artist it was first seen on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub label: String,
    pub kind: SuggestionKind,
    pub artist_id: ArtistId,
}

#[derive(Debug, Default)]
struct SuggestionList {
    seen: HashSet<(SuggestionKind, String)>,
    items: Vec<Suggestion>,
}

impl SuggestionList {
    fn add(&mut self, label: &str, kind: SuggestionKind, artist_id: ArtistId) {
        if self.seen.insert((kind, label.to_lowercase())) {
            self.items.push(Suggestion {
                label: label.to_owned(),
                kind,
                artist_id,
            });
        }
    }
}

/// Suggestions for `query` across `artists`.
///
/// Per artist, in input order: the name, each matching member, each
/// matching joined location, the first-album year, then the creation year.
/// A (kind, label) pair is reported once, for the first artist it appears
/// on; labels compare case-insensitively. A blank query yields nothing.
pub fn suggest<'a, I>(artists: I, query: &str) -> Vec<Suggestion>
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    let query = normalize_query(query);
    if query.is_empty() {
        return Vec::new();
    }

    let mut list = SuggestionList::default();
    for entry in artists {
        let artist = &entry.artist;

        if contains_normalized(&artist.name, &query) {
            list.add(&artist.name, SuggestionKind::ArtistName, artist.id);
        }
        for member in &artist.members {
            if contains_normalized(member, &query) {
                list.add(member, SuggestionKind::Member, artist.id);
            }
        }
        for label in &artist.locations {
            if contains_normalized(label, &query) {
                list.add(label, SuggestionKind::Location, artist.id);
            }
        }
        if let Some(year) = extract_year(&artist.first_album) {
            let year = year.to_string();
            if year.contains(&query) {
                list.add(&year, SuggestionKind::FirstAlbumYear, artist.id);
            }
        }
        let created = artist.creation_date.to_string();
        if created.contains(&query) {
            list.add(&created, SuggestionKind::CreationYear, artist.id);
        }
    }

    log::debug!("Built {} suggestions for {:?}", list.items.len(), query);
    list.items
}

/// [`suggest`], truncated to the first `limit` entries.
pub fn suggest_limited<'a, I>(artists: I, query: &str, limit: usize) -> Vec<Suggestion>
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    let mut suggestions = suggest(artists, query);
    suggestions.truncate(limit);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use setlist_core::{Artist, Catalog, Date, EntityStore, Location, Relation};

    fn catalog() -> Catalog {
        Catalog::build(EntityStore::new(
            vec![
                Artist::new(1, "The Johns")
                    .with_members(["John Smith", "Paul"])
                    .with_creation_date(1969)
                    .with_first_album("1969-01-01"),
                Artist::new(2, "Other Band")
                    .with_members(["john smith", "Ringo"])
                    .with_creation_date(1970)
                    .with_first_album("none"),
            ],
            vec![Date::new(1, ["1970-01-01"])],
            vec![Location::new(1, "Johannesburg", "South Africa")],
            vec![Relation::new(1, 1, 1), Relation::new(2, 1, 1)],
        ))
    }

    fn labels(suggestions: &[Suggestion]) -> Vec<(SuggestionKind, &str)> {
        suggestions.iter().map(|s| (s.kind, s.label.as_str())).collect()
    }

    #[test]
    fn test_blank_query_yields_nothing() {
        let catalog = catalog();
        assert!(suggest(catalog.entries(), "").is_empty());
        assert!(suggest(catalog.entries(), "   ").is_empty());
    }

    #[test]
    fn test_traversal_order_and_dedup() {
        let catalog = catalog();
        let suggestions = suggest(catalog.entries(), "joh");

        assert_eq!(
            labels(&suggestions),
            vec![
                (SuggestionKind::ArtistName, "The Johns"),
                (SuggestionKind::Member, "John Smith"),
                (SuggestionKind::Location, "Johannesburg, South Africa"),
            ]
        );
        assert!(suggestions.iter().all(|s| s.artist_id == ArtistId::new(1)));
    }

    #[test]
    fn test_year_suggestions() {
        let catalog = catalog();
        let suggestions = suggest(catalog.entries(), "19");

        assert_eq!(
            labels(&suggestions),
            vec![
                (SuggestionKind::FirstAlbumYear, "1969"),
                (SuggestionKind::CreationYear, "1969"),
                (SuggestionKind::CreationYear, "1970"),
            ]
        );
        assert_eq!(suggestions[2].artist_id, ArtistId::new(2));
    }

    #[test]
    fn test_suggest_limited() {
        let catalog = catalog();
        assert_eq!(suggest_limited(catalog.entries(), "19", 2).len(), 2);
        assert_eq!(suggest_limited(catalog.entries(), "19", 10).len(), 3);
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&SuggestionKind::ArtistName).unwrap(),
            r#""artist""#
        );
        assert_eq!(
            serde_json::to_string(&SuggestionKind::FirstAlbumYear).unwrap(),
            r#""first_album_year""#
        );
        assert_eq!(SuggestionKind::CreationYear.to_string(), "creation_year");
    }
}
