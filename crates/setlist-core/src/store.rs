//! The entity store: the four decoded collections for one query session.
//!
//! The store is built once from already-decoded records (or loaded from the
//! JSON files a fetcher left on disk) and is never mutated afterwards. A
//! refresh means building a new store.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::{Artist, ArtistId, Date, DateId, Location, LocationId, Relation};

pub const ARTISTS_FILE: &str = "artists.json";
pub const DATES_FILE: &str = "dates.json";
pub const LOCATIONS_FILE: &str = "locations.json";
pub const RELATIONS_FILE: &str = "relations.json";

/// Immutable snapshot of artists, dates, locations and relations.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    artists: Vec<Artist>,
    artist_positions: HashMap<ArtistId, usize>,
    dates: HashMap<DateId, Date>,
    locations: HashMap<LocationId, Location>,
    relations: Vec<Relation>,
}

impl EntityStore {
    /// Build a store from decoded collections.
    ///
    /// Artist order is preserved; it is the order every query result follows.
    /// If two artists share an identifier, lookups by id resolve to the first.
    #[must_use]
    pub fn new(
        artists: Vec<Artist>,
        dates: Vec<Date>,
        locations: Vec<Location>,
        relations: Vec<Relation>,
    ) -> Self {
        let mut artist_positions = HashMap::with_capacity(artists.len());
        for (pos, artist) in artists.iter().enumerate() {
            artist_positions.entry(artist.id).or_insert(pos);
        }

        Self {
            artists,
            artist_positions,
            dates: dates.into_iter().map(|d| (d.id, d)).collect(),
            locations: locations.into_iter().map(|l| (l.id, l)).collect(),
            relations,
        }
    }

    /// Load the four collections from `dir`.
    ///
    /// Expects `artists.json`, `dates.json`, `locations.json` and
    /// `relations.json`. Each file holds either a bare JSON array or an
    /// object wrapping the array under `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` is not a directory, or if any file is
    /// missing or fails to decode.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::InvalidData(format!(
                "{} is not a directory",
                dir.display()
            )));
        }

        let artists: Vec<Artist> = read_collection(&dir.join(ARTISTS_FILE))?;
        let dates: Vec<Date> = read_collection(&dir.join(DATES_FILE))?;
        let locations: Vec<Location> = read_collection(&dir.join(LOCATIONS_FILE))?;
        let relations: Vec<Relation> = read_collection(&dir.join(RELATIONS_FILE))?;

        log::info!(
            "Loaded {} artists, {} dates, {} locations, {} relations from {}",
            artists.len(),
            dates.len(),
            locations.len(),
            relations.len(),
            dir.display()
        );

        Ok(Self::new(artists, dates, locations, relations))
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    pub fn artist(&self, id: ArtistId) -> Option<&Artist> {
        self.artist_positions.get(&id).map(|&pos| &self.artists[pos])
    }

    pub fn date(&self, id: DateId) -> Option<&Date> {
        self.dates.get(&id)
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(&id)
    }

    pub fn date_count(&self) -> usize {
        self.dates.len()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }
}

/// On-disk shape of a collection file.
#[derive(Deserialize)]
#[serde(untagged)]
enum CollectionFile<T> {
    Bare(Vec<T>),
    Wrapped { index: Vec<T> },
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file: CollectionFile<T> =
        serde_json::from_str(&contents).map_err(|source| Error::Serialization {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(match file {
        CollectionFile::Bare(items) | CollectionFile::Wrapped { index: items } => items,
    })
}
