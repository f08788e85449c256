//! Pre-joined catalog snapshot.
//!
//! A [`Catalog`] resolves every artist's joins once, through the
//! [`RelationIndex`], so the query engines read joined locations and dates
//! straight off each [`CatalogEntry`] instead of walking the relation table
//! per call.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::index::RelationIndex;
use crate::model::{Artist, ArtistId, Location};
use crate::store::EntityStore;

/// One artist with its joins resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// The artist, with `locations` filled with joined `"city, country"` labels.
    pub artist: Artist,

    /// Joined locations, in first-seen relation order.
    pub locations: Vec<Location>,

    /// Joined date strings, flattened across all joined date records.
    pub dates: Vec<String>,
}

impl CatalogEntry {
    /// Join `artist` against `store` via `index`.
    #[must_use]
    pub fn join(artist: &Artist, store: &EntityStore, index: &RelationIndex) -> Self {
        let links = index.links(artist.id);

        let locations: Vec<Location> = links
            .locations()
            .iter()
            .filter_map(|&id| store.location(id))
            .cloned()
            .collect();

        let dates: Vec<String> = links
            .dates()
            .iter()
            .filter_map(|&id| store.date(id))
            .flat_map(|d| d.dates.iter().cloned())
            .collect();

        let mut artist = artist.clone();
        artist.locations = locations.iter().map(Location::label).collect();

        Self {
            artist,
            locations,
            dates,
        }
    }

    pub fn id(&self) -> ArtistId {
        self.artist.id
    }

    pub fn name(&self) -> &str {
        &self.artist.name
    }
}

/// An entity store, its relation index, and the pre-joined entries.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    store: EntityStore,
    index: RelationIndex,
    entries: Vec<CatalogEntry>,
    positions: HashMap<ArtistId, usize>,
}

impl Catalog {
    /// Build the relation index and join every artist.
    #[must_use]
    pub fn build(store: EntityStore) -> Self {
        let index = RelationIndex::build(&store);

        let entries: Vec<CatalogEntry> = store
            .artists()
            .iter()
            .map(|artist| CatalogEntry::join(artist, &store, &index))
            .collect();

        let mut positions = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            positions.entry(entry.id()).or_insert(pos);
        }

        log::info!(
            "Built catalog: {} artists, {} with concerts, {} relations dropped",
            entries.len(),
            index.linked_artists(),
            index.dropped()
        );

        Self {
            store,
            index,
            entries,
            positions,
        }
    }

    /// Entries in artist-collection order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn entry(&self, id: ArtistId) -> Option<&CatalogEntry> {
        self.positions.get(&id).map(|&pos| &self.entries[pos])
    }

    /// Like [`Catalog::entry`], but a missing artist is an error.
    pub fn require(&self, id: ArtistId) -> Result<&CatalogEntry> {
        self.entry(id).ok_or_else(|| Error::NotFound {
            entity: "artist",
            id: id.to_string(),
        })
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn index(&self) -> &RelationIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Holder for the catalog snapshot currently visible to queries.
///
/// Readers take an `Arc` to the current snapshot and query it without any
/// lock held. A refresh builds a new [`Catalog`] and swaps it in whole; the
/// old snapshot stays valid for readers still holding it.
#[derive(Debug, Default)]
pub struct SharedCatalog {
    current: RwLock<Arc<Catalog>>,
}

impl SharedCatalog {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<Catalog> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Replace the snapshot, returning the previous one.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(catalog))
    }
}
