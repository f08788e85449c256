//! Relation index: artist id to the date and location ids it is joined with.

use std::collections::{HashMap, HashSet};

use crate::model::{ArtistId, DateId, LocationId};
use crate::store::EntityStore;

/// Dates and locations joined to one artist.
///
/// Both sets iterate in the order their first relation record appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistLinks {
    dates: Vec<DateId>,
    locations: Vec<LocationId>,
    date_set: HashSet<DateId>,
    location_set: HashSet<LocationId>,
}

impl ArtistLinks {
    fn link(&mut self, date: DateId, location: LocationId) {
        if self.date_set.insert(date) {
            self.dates.push(date);
        }
        if self.location_set.insert(location) {
            self.locations.push(location);
        }
    }

    pub fn dates(&self) -> &[DateId] {
        &self.dates
    }

    pub fn locations(&self) -> &[LocationId] {
        &self.locations
    }

    pub fn has_date(&self, id: DateId) -> bool {
        self.date_set.contains(&id)
    }

    pub fn has_location(&self, id: LocationId) -> bool {
        self.location_set.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty() && self.locations.is_empty()
    }
}

/// Lookup from artist to joined date and location identifiers.
///
/// Derived from one [`EntityStore`] and never mutated. Relations whose date
/// or location does not resolve in the store are dropped.
#[derive(Debug, Clone, Default)]
pub struct RelationIndex {
    links: HashMap<ArtistId, ArtistLinks>,
    dropped: usize,
}

static NO_LINKS: std::sync::LazyLock<ArtistLinks> = std::sync::LazyLock::new(ArtistLinks::default);

impl RelationIndex {
    /// Build the index in one pass over the relation table.
    #[must_use]
    pub fn build(store: &EntityStore) -> Self {
        let mut links: HashMap<ArtistId, ArtistLinks> = HashMap::new();
        let mut dropped = 0;

        for rel in store.relations() {
            if store.date(rel.date_id).is_none() || store.location(rel.location_id).is_none() {
                log::debug!(
                    "Dropping relation for artist {}: date {} or location {} does not resolve",
                    rel.artist_id,
                    rel.date_id,
                    rel.location_id
                );
                dropped += 1;
                continue;
            }
            links
                .entry(rel.artist_id)
                .or_default()
                .link(rel.date_id, rel.location_id);
        }

        if dropped > 0 {
            log::debug!("Relation index dropped {} unresolvable relations", dropped);
        }

        Self { links, dropped }
    }

    /// Links for `artist`; empty when the artist has no usable relations.
    pub fn links(&self, artist: ArtistId) -> &ArtistLinks {
        self.links.get(&artist).unwrap_or(&NO_LINKS)
    }

    pub fn dates_for(&self, artist: ArtistId) -> &[DateId] {
        self.links(artist).dates()
    }

    pub fn locations_for(&self, artist: ArtistId) -> &[LocationId] {
        self.links(artist).locations()
    }

    /// Number of relation records rejected while building.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Number of artists with at least one usable relation.
    pub fn linked_artists(&self) -> usize {
        self.links.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Artist, Date, Location, Relation};

    fn store(relations: Vec<Relation>) -> EntityStore {
        EntityStore::new(
            vec![Artist::new(1, "Queen"), Artist::new(2, "ABBA")],
            vec![Date::new(10, ["1975-05-01"]), Date::new(11, ["1976-06-01"])],
            vec![
                Location::new(20, "London", "UK"),
                Location::new(21, "Stockholm", "Sweden"),
            ],
            relations,
        )
    }

    #[test]
    fn test_index_maps_artist_to_links() {
        let index = RelationIndex::build(&store(vec![
            Relation::new(1, 10, 20),
            Relation::new(1, 11, 21),
        ]));

        assert_eq!(index.dates_for(ArtistId::new(1)), &[DateId::new(10), DateId::new(11)]);
        assert_eq!(
            index.locations_for(ArtistId::new(1)),
            &[LocationId::new(20), LocationId::new(21)]
        );
        assert!(index.links(ArtistId::new(1)).has_location(LocationId::new(21)));
        assert_eq!(index.linked_artists(), 1);
    }

    #[test]
    fn test_artist_without_relations_has_empty_links() {
        let index = RelationIndex::build(&store(vec![Relation::new(1, 10, 20)]));
        let links = index.links(ArtistId::new(2));
        assert!(links.is_empty());
        assert!(!links.has_date(DateId::new(10)));
    }

    #[test]
    fn test_duplicate_relations_deduplicate() {
        let index = RelationIndex::build(&store(vec![
            Relation::new(1, 10, 20),
            Relation::new(1, 10, 20),
            Relation::new(1, 11, 20),
        ]));

        assert_eq!(index.locations_for(ArtistId::new(1)), &[LocationId::new(20)]);
        assert_eq!(index.dates_for(ArtistId::new(1)).len(), 2);
        assert_eq!(index.dropped(), 0);
    }

    #[test]
    fn test_unresolvable_relations_are_dropped() {
        let index = RelationIndex::build(&store(vec![
            Relation::new(1, 99, 20),
            Relation::new(1, 10, 99),
            Relation::new(2, 11, 21),
        ]));

        assert!(index.links(ArtistId::new(1)).is_empty());
        assert_eq!(index.locations_for(ArtistId::new(2)), &[LocationId::new(21)]);
        assert_eq!(index.dropped(), 2);
    }
}
