//! Core data model for setlist.
//!
//! This crate holds the decoded catalog collections (artists, concert dates,
//! venue locations and the relation table joining them), the relation index
//! built over them, and the pre-joined [`Catalog`] snapshot the query
//! engines in `setlist-search` run against.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod error;
pub mod index;
pub mod model;
pub mod store;

pub use catalog::{Catalog, CatalogEntry, SharedCatalog};
pub use error::{Error, Result};
pub use index::{ArtistLinks, RelationIndex};
pub use model::{Artist, ArtistId, Date, DateId, Location, LocationId, Relation};
pub use store::EntityStore;
