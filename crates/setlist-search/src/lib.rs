//! Query engines for setlist.
//!
//! Three read-only queries over a [`setlist_core::Catalog`] snapshot:
//!
//! - [`filter::apply_filters`] - structured range and location predicates
//! - [`search::search`] - free-text search over artist fields and joins
//! - [`suggest::suggest`] - typed, deduplicated incremental-search tokens
//!
//! All three take any iterator of catalog entry references and preserve its
//! order, so results can be chained (search, then filter the hits).

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod filter;
pub mod search;
pub mod suggest;
pub mod text;

pub use filter::{apply_filters, Filter, FilterCriteria, Range};
pub use search::{match_field, search, MatchField};
pub use suggest::{suggest, suggest_limited, Suggestion, SuggestionKind};
pub use text::{contains_case_insensitive, extract_year, normalize_query};
