//! Structured filtering over catalog entries.
//!
//! A [`FilterCriteria`] value describes which predicates are active. It is
//! compiled once per call into a [`Filter`], and every entry must pass every
//! active predicate to be kept. Filtering never reorders: the result is a
//! subsequence of the input.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use setlist_core::CatalogEntry;

use crate::text::{contains_normalized, extract_year, normalize_query};

/// Inclusive numeric range where `0` leaves that side open.
///
/// `Range { min: 0, max: 0 }` is fully unbounded, which disables any
/// predicate built on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Range {
    pub min: i64,
    pub max: i64,
}

impl Range {
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn at_least(min: i64) -> Self {
        Self { min, max: 0 }
    }

    #[must_use]
    pub const fn at_most(max: i64) -> Self {
        Self { min: 0, max }
    }

    pub const fn is_unbounded(&self) -> bool {
        self.min == 0 && self.max == 0
    }

    pub const fn contains(&self, value: i64) -> bool {
        (self.min == 0 || value >= self.min) && (self.max == 0 || value <= self.max)
    }
}

/// Which filter predicates are active, and with what bounds.
///
/// A range predicate is enabled by setting it to `Some` with at least one
/// non-zero bound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Formation year.
    pub creation_year: Option<Range>,

    /// Year extracted from the first-album field. Artists whose first-album
    /// field carries no year fail this predicate.
    pub first_album_year: Option<Range>,

    /// Number of members.
    pub member_count: Option<Range>,

    /// Allowed member counts. When non-empty this replaces `member_count`.
    pub member_count_whitelist: Vec<i64>,

    /// Substring matched against each joined location's city and its
    /// `"city, country"` label.
    pub location_query: String,

    /// Location names matched exactly (ignoring case) against each joined
    /// location's city, country, or `"city, country"` label.
    pub locations: Vec<String>,

    /// Year of any joined concert date.
    pub concert_year: Option<Range>,
}

impl FilterCriteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_creation_year(mut self, range: Range) -> Self {
        self.creation_year = Some(range);
        self
    }

    #[must_use]
    pub fn with_first_album_year(mut self, range: Range) -> Self {
        self.first_album_year = Some(range);
        self
    }

    #[must_use]
    pub fn with_member_count(mut self, range: Range) -> Self {
        self.member_count = Some(range);
        self
    }

    #[must_use]
    pub fn with_member_counts(mut self, counts: impl IntoIterator<Item = i64>) -> Self {
        self.member_count_whitelist.extend(counts);
        self
    }

    #[must_use]
    pub fn with_location_query(mut self, query: impl Into<String>) -> Self {
        self.location_query = query.into();
        self
    }

    #[must_use]
    pub fn with_location(mut self, name: impl Into<String>) -> Self {
        self.locations.push(name.into());
        self
    }

    #[must_use]
    pub fn with_concert_year(mut self, range: Range) -> Self {
        self.concert_year = Some(range);
        self
    }

    /// True when no predicate is active, so every entry passes.
    pub fn is_empty(&self) -> bool {
        Filter::new(self).is_pass_all()
    }
}

/// A [`FilterCriteria`] prepared for repeated evaluation.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    creation_year: Option<Range>,
    first_album_year: Option<Range>,
    member_count: Option<Range>,
    member_whitelist: HashSet<i64>,
    location_query: String,
    locations: HashSet<String>,
    concert_year: Option<Range>,
}

fn active(range: Option<Range>) -> Option<Range> {
    range.filter(|r| !r.is_unbounded())
}

impl Filter {
    #[must_use]
    pub fn new(criteria: &FilterCriteria) -> Self {
        Self {
            creation_year: active(criteria.creation_year),
            first_album_year: active(criteria.first_album_year),
            member_count: active(criteria.member_count),
            member_whitelist: criteria.member_count_whitelist.iter().copied().collect(),
            location_query: normalize_query(&criteria.location_query),
            locations: criteria
                .locations
                .iter()
                .map(|l| normalize_query(l))
                .filter(|l| !l.is_empty())
                .collect(),
            concert_year: active(criteria.concert_year),
        }
    }

    fn is_pass_all(&self) -> bool {
        self.creation_year.is_none()
            && self.first_album_year.is_none()
            && self.member_count.is_none()
            && self.member_whitelist.is_empty()
            && self.location_query.is_empty()
            && self.locations.is_empty()
            && self.concert_year.is_none()
    }

    /// True if `entry` passes every active predicate.
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        self.passes_creation_year(entry)
            && self.passes_first_album(entry)
            && self.passes_member_count(entry)
            && self.passes_location_query(entry)
            && self.passes_locations(entry)
            && self.passes_concert_year(entry)
    }

    fn passes_creation_year(&self, entry: &CatalogEntry) -> bool {
        self.creation_year
            .map_or(true, |range| range.contains(entry.artist.creation_date))
    }

    fn passes_first_album(&self, entry: &CatalogEntry) -> bool {
        let Some(range) = self.first_album_year else {
            return true;
        };
        extract_year(&entry.artist.first_album).is_some_and(|year| range.contains(year))
    }

    fn passes_member_count(&self, entry: &CatalogEntry) -> bool {
        let count = i64::try_from(entry.artist.member_count()).unwrap_or(i64::MAX);

        if !self.member_whitelist.is_empty() {
            return self.member_whitelist.contains(&count);
        }
        self.member_count.map_or(true, |range| range.contains(count))
    }

    fn passes_location_query(&self, entry: &CatalogEntry) -> bool {
        if self.location_query.is_empty() {
            return true;
        }
        entry.locations.iter().any(|loc| {
            contains_normalized(&loc.city, &self.location_query)
                || contains_normalized(&loc.label(), &self.location_query)
        })
    }

    fn passes_locations(&self, entry: &CatalogEntry) -> bool {
        if self.locations.is_empty() {
            return true;
        }
        entry.locations.iter().any(|loc| {
            [loc.city.to_lowercase(), loc.country.to_lowercase(), loc.label().to_lowercase()]
                .iter()
                .any(|name| self.locations.contains(name))
        })
    }

    fn passes_concert_year(&self, entry: &CatalogEntry) -> bool {
        let Some(range) = self.concert_year else {
            return true;
        };
        entry
            .dates
            .iter()
            .filter_map(|date| extract_year(date))
            .any(|year| range.contains(year))
    }
}

/// Keep the entries that satisfy `criteria`, in input order.
pub fn apply_filters<'a, I>(artists: I, criteria: &FilterCriteria) -> Vec<&'a CatalogEntry>
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    let filter = Filter::new(criteria);
    let kept: Vec<&CatalogEntry> = artists.into_iter().filter(|e| filter.matches(e)).collect();
    log::debug!("Filter kept {} artists", kept.len());
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use setlist_core::{Artist, Catalog, Date, EntityStore, Location, Relation};

    fn catalog() -> Catalog {
        Catalog::build(EntityStore::new(
            vec![
                Artist::new(1, "Queen")
                    .with_members(["Freddie", "Brian", "Roger", "John"])
                    .with_creation_date(1970)
                    .with_first_album("Queen (1973)"),
                Artist::new(2, "Duo")
                    .with_members(["A", "B"])
                    .with_creation_date(1990)
                    .with_first_album("no year here"),
                Artist::new(3, "Soloist")
                    .with_member("Solo")
                    .with_creation_date(2005)
                    .with_first_album("01-02-2006"),
            ],
            vec![Date::new(1, ["1975-05-01"]), Date::new(2, ["*2019-08-23"])],
            vec![
                Location::new(1, "London", "UK"),
                Location::new(2, "Los Angeles", "USA"),
            ],
            vec![Relation::new(1, 1, 1), Relation::new(3, 2, 2)],
        ))
    }

    fn ids(entries: &[&CatalogEntry]) -> Vec<u32> {
        entries.iter().map(|e| e.id().get()).collect()
    }

    #[test]
    fn test_range_contains() {
        assert!(Range::new(0, 0).contains(-5));
        assert!(Range::at_least(1970).contains(1970));
        assert!(!Range::at_least(1971).contains(1970));
        assert!(Range::at_most(1970).contains(1));
        assert!(!Range::new(10, 5).contains(7));
    }

    #[test]
    fn test_empty_criteria_keeps_everything() {
        let catalog = catalog();
        let criteria = FilterCriteria::new()
            .with_creation_year(Range::default())
            .with_location_query("   ");
        assert!(criteria.is_empty());
        assert_eq!(ids(&apply_filters(catalog.entries(), &criteria)), vec![1, 2, 3]);
    }

    #[test]
    fn test_creation_year_range() {
        let catalog = catalog();
        let criteria = FilterCriteria::new().with_creation_year(Range::new(1980, 2000));
        assert_eq!(ids(&apply_filters(catalog.entries(), &criteria)), vec![2]);

        let criteria = FilterCriteria::new().with_creation_year(Range::at_most(1990));
        assert_eq!(ids(&apply_filters(catalog.entries(), &criteria)), vec![1, 2]);
    }

    #[test]
    fn test_first_album_excludes_artists_without_year() {
        let catalog = catalog();
        let criteria = FilterCriteria::new().with_first_album_year(Range::at_least(1900));
        assert_eq!(ids(&apply_filters(catalog.entries(), &criteria)), vec![1, 3]);
    }

    #[test]
    fn test_first_album_min_above_year() {
        let catalog = catalog();
        let criteria = FilterCriteria::new().with_first_album_year(Range::at_least(1980));
        assert_eq!(ids(&apply_filters(catalog.entries(), &criteria)), vec![3]);
    }

    #[test]
    fn test_member_count_range() {
        let catalog = catalog();
        let criteria = FilterCriteria::new().with_member_count(Range::new(2, 3));
        assert_eq!(ids(&apply_filters(catalog.entries(), &criteria)), vec![2]);
    }

    #[test]
    fn test_whitelist_overrides_range() {
        let catalog = catalog();
        let criteria = FilterCriteria::new()
            .with_member_count(Range::new(2, 3))
            .with_member_counts([1, 4]);
        assert_eq!(ids(&apply_filters(catalog.entries(), &criteria)), vec![1, 3]);
    }

    #[test]
    fn test_negative_bounds_never_match() {
        let catalog = catalog();
        let criteria = FilterCriteria::new().with_member_count(Range::at_most(-1));
        assert!(apply_filters(catalog.entries(), &criteria).is_empty());
    }

    #[test]
    fn test_location_query_matches_city_and_composite() {
        let catalog = catalog();
        let by_city = FilterCriteria::new().with_location_query("LOND");
        assert_eq!(ids(&apply_filters(catalog.entries(), &by_city)), vec![1]);

        let by_composite = FilterCriteria::new().with_location_query("angeles, us");
        assert_eq!(ids(&apply_filters(catalog.entries(), &by_composite)), vec![3]);
    }

    #[test]
    fn test_location_set_is_exact() {
        let catalog = catalog();
        let criteria = FilterCriteria::new().with_location(" uk ");
        assert_eq!(ids(&apply_filters(catalog.entries(), &criteria)), vec![1]);

        let criteria = FilterCriteria::new().with_location("lond");
        assert!(apply_filters(catalog.entries(), &criteria).is_empty());
    }

    #[test]
    fn test_concert_year_range() {
        let catalog = catalog();
        let criteria = FilterCriteria::new().with_concert_year(Range::new(2000, 2020));
        assert_eq!(ids(&apply_filters(catalog.entries(), &criteria)), vec![3]);
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let catalog = catalog();
        let criteria = FilterCriteria::new()
            .with_creation_year(Range::at_least(1960))
            .with_location_query("london");
        assert_eq!(ids(&apply_filters(catalog.entries(), &criteria)), vec![1]);

        let criteria = criteria.with_member_counts([2]);
        assert!(apply_filters(catalog.entries(), &criteria).is_empty());
    }

    #[test]
    fn test_criteria_deserializes_with_defaults() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"first_album_year": {"min": 1980}}"#).unwrap();
        assert_eq!(criteria.first_album_year, Some(Range::at_least(1980)));
        assert!(criteria.member_count_whitelist.is_empty());
    }
}
