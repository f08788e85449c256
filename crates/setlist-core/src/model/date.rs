use serde::{Deserialize, Serialize};

use crate::model::ids::DateId;

/// Markers the remote catalog prefixes to some date strings.
const DATE_MARKERS: &[char] = &['-', '*'];

/// A bundle of concert dates referenced from the relation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Date {
    pub id: DateId,

    /// Date strings, nominally `YYYY-MM-DD`, optionally with a leading marker.
    #[serde(default)]
    pub dates: Vec<String>,
}

impl Date {
    #[must_use]
    pub fn new<I, S>(id: u32, dates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: DateId::new(id),
            dates: dates.into_iter().map(Into::into).collect(),
        }
    }

    /// Date strings with any leading marker removed.
    pub fn cleaned(&self) -> impl Iterator<Item = &str> {
        self.dates.iter().map(|d| strip_marker(d))
    }

    /// Exact membership, ignoring leading markers on either side.
    pub fn has_date(&self, date: &str) -> bool {
        let wanted = strip_marker(date);
        self.cleaned().any(|d| d == wanted)
    }

    /// True if any date string contains `query`, ignoring case.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.dates
            .iter()
            .any(|d| d.to_lowercase().contains(&query))
    }
}

fn strip_marker(date: &str) -> &str {
    date.trim().trim_start_matches(DATE_MARKERS)
}
