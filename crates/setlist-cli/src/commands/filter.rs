use anyhow::Result;
use setlist_search::{FilterCriteria, Range};
use std::path::Path;

use super::{load_catalog, output};

/// Filter flags. A bound left at 0 (or omitted) is open.
#[derive(Debug, Default, clap::Args)]
pub struct FilterArgs {
    /// Earliest formation year
    #[arg(long, value_name = "YEAR")]
    pub creation_min: Option<i64>,

    /// Latest formation year
    #[arg(long, value_name = "YEAR")]
    pub creation_max: Option<i64>,

    /// Earliest first-album year (artists without a parseable year are excluded)
    #[arg(long, value_name = "YEAR")]
    pub album_min: Option<i64>,

    /// Latest first-album year (artists without a parseable year are excluded)
    #[arg(long, value_name = "YEAR")]
    pub album_max: Option<i64>,

    /// Minimum number of members
    #[arg(long, value_name = "N")]
    pub members_min: Option<i64>,

    /// Maximum number of members
    #[arg(long, value_name = "N")]
    pub members_max: Option<i64>,

    /// Exact member count; repeat to allow several (overrides --members-min/max)
    #[arg(long = "members", value_name = "N")]
    pub member_counts: Vec<i64>,

    /// Substring of a concert city or "city, country"
    #[arg(long, value_name = "TEXT")]
    pub location: Option<String>,

    /// Exact city, country or "city, country"; repeat to allow several
    #[arg(long = "in-location", value_name = "NAME")]
    pub in_locations: Vec<String>,

    /// Earliest concert year
    #[arg(long, value_name = "YEAR")]
    pub concert_min: Option<i64>,

    /// Latest concert year
    #[arg(long, value_name = "YEAR")]
    pub concert_max: Option<i64>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

fn range(min: Option<i64>, max: Option<i64>) -> Option<Range> {
    if min.is_none() && max.is_none() {
        return None;
    }
    Some(Range::new(min.unwrap_or(0), max.unwrap_or(0)))
}

impl FilterArgs {
    /// Translate the flags into an immutable criteria value.
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            creation_year: range(self.creation_min, self.creation_max),
            first_album_year: range(self.album_min, self.album_max),
            member_count: range(self.members_min, self.members_max),
            member_count_whitelist: self.member_counts.clone(),
            location_query: self.location.clone().unwrap_or_default(),
            locations: self.in_locations.clone(),
            concert_year: range(self.concert_min, self.concert_max),
        }
    }
}

pub fn run_filter(data_dir: &Path, args: &FilterArgs) -> Result<()> {
    let catalog = load_catalog(data_dir)?;
    let criteria = args.to_criteria();

    if criteria.is_empty() {
        log::warn!("No filters given; listing every artist");
    }

    let kept = setlist_search::apply_filters(catalog.entries(), &criteria);
    output::print_entries(&kept, args.json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_means_no_criteria() {
        assert!(FilterArgs::default().to_criteria().is_empty());
    }

    #[test]
    fn test_flags_translate_to_criteria() {
        let args = FilterArgs {
            creation_min: Some(1960),
            album_max: Some(1980),
            member_counts: vec![4],
            location: Some("london".to_string()),
            ..FilterArgs::default()
        };
        let criteria = args.to_criteria();

        assert_eq!(criteria.creation_year, Some(Range::at_least(1960)));
        assert_eq!(criteria.first_album_year, Some(Range::at_most(1980)));
        assert!(criteria.member_count.is_none());
        assert_eq!(criteria.member_count_whitelist, vec![4]);
        assert_eq!(criteria.location_query, "london");
        assert!(criteria.concert_year.is_none());
    }
}
