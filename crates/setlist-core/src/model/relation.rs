use serde::{Deserialize, Serialize};

use crate::model::ids::{ArtistId, DateId, LocationId};

/// A join row: the artist played on the referenced dates at the referenced
/// location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub artist_id: ArtistId,
    pub date_id: DateId,
    pub location_id: LocationId,
}

impl Relation {
    #[must_use]
    pub fn new(artist_id: u32, date_id: u32, location_id: u32) -> Self {
        Self {
            artist_id: ArtistId::new(artist_id),
            date_id: DateId::new(date_id),
            location_id: LocationId::new(location_id),
        }
    }

    pub fn matches_artist(&self, id: ArtistId) -> bool {
        self.artist_id == id
    }

    pub fn matches_date(&self, id: DateId) -> bool {
        self.date_id == id
    }

    pub fn matches_location(&self, id: LocationId) -> bool {
        self.location_id == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_matchers() {
        let rel = Relation::new(1, 2, 3);
        assert!(rel.matches_artist(ArtistId::new(1)));
        assert!(rel.matches_date(DateId::new(2)));
        assert!(rel.matches_location(LocationId::new(3)));
        assert!(!rel.matches_artist(ArtistId::new(2)));
    }

    #[test]
    fn test_relation_decodes_camel_case() {
        let rel: Relation =
            serde_json::from_str(r#"{"artistId":4,"dateId":5,"locationId":6}"#).unwrap();
        assert_eq!(rel, Relation::new(4, 5, 6));
    }
}
