use serde::{Deserialize, Serialize};

use crate::model::ids::LocationId;

/// A concert venue location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub city: String,
    #[serde(default)]
    pub country: String,
}

impl Location {
    #[must_use]
    pub fn new(id: u32, city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id: LocationId::new(id),
            city: city.into(),
            country: country.into(),
        }
    }

    /// Display label in `"city, country"` form, or just the city when the
    /// country is unknown.
    pub fn label(&self) -> String {
        if self.country.is_empty() {
            self.city.clone()
        } else {
            format!("{}, {}", self.city, self.country)
        }
    }

    /// True if the city or the country contains `query`, ignoring case.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.city.to_lowercase().contains(&query) || self.country.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        assert_eq!(Location::new(1, "London", "UK").label(), "London, UK");
        assert_eq!(Location::new(2, "Paris", "").label(), "Paris");
    }

    #[test]
    fn test_matches_query_city_or_country() {
        let loc = Location::new(1, "London", "UK");
        assert!(loc.matches_query("lond"));
        assert!(loc.matches_query("uk"));
        assert!(!loc.matches_query("paris"));
    }

    #[test]
    fn test_matches_query_does_not_span_fields() {
        let loc = Location::new(1, "London", "UK");
        assert!(!loc.matches_query("london, uk"));
    }
}
