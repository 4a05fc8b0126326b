//! Filter engine: year, artist substring and minimum-streams predicates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::Track;
use crate::normalize::parse_int;

/// The three independent, optional predicates controlling which records are
/// in scope. `None` (or an empty string) means "no constraint".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Exact release year, compared as text ("2023")
    pub year: Option<String>,
    /// Case-insensitive substring of the artist credit
    pub artist: Option<String>,
    /// Inclusive lower bound on stream count
    pub min_streams: Option<u64>,
}

impl FilterSpec {
    /// Build a spec from free-text inputs as a form would supply them.
    /// Blank inputs and an unparsable threshold impose no constraint.
    pub fn from_inputs(year: &str, artist: &str, min_streams: &str) -> Self {
        Self {
            year: non_blank(year),
            artist: non_blank(artist),
            min_streams: parse_threshold(min_streams),
        }
    }

    /// True when no predicate is set.
    pub fn is_unconstrained(&self) -> bool {
        self.year_constraint().is_none()
            && self.artist_constraint().is_none()
            && self.min_streams.is_none()
    }

    fn year_constraint(&self) -> Option<&str> {
        self.year.as_deref().filter(|y| !y.is_empty())
    }

    fn artist_constraint(&self) -> Option<&str> {
        self.artist.as_deref().filter(|a| !a.is_empty())
    }

    /// Whether a single record satisfies every set predicate.
    pub fn matches(&self, track: &Track) -> bool {
        if let Some(year) = self.year_constraint() {
            if track.released_year.to_string() != year {
                return false;
            }
        }

        if let Some(artist) = self.artist_constraint() {
            if !contains_ignore_case(&track.artist_name, artist) {
                return false;
            }
        }

        if let Some(min) = self.min_streams {
            if track.streams < min {
                return false;
            }
        }

        true
    }
}

fn non_blank(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Parse a minimum-streams input. Blank or non-numeric input yields None.
/// Negative thresholds can never exclude a valid record, so they also
/// map to None.
pub fn parse_threshold(s: &str) -> Option<u64> {
    parse_int(s).and_then(|n| u64::try_from(n).ok())
}

/// Case-insensitive "contains" used by both the filter and the comparator.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Stable filter: returns matching records in their original relative order.
pub fn apply_filters(tracks: &[Track], spec: &FilterSpec) -> Vec<Track> {
    if spec.is_unconstrained() {
        return tracks.to_vec();
    }
    tracks.iter().filter(|t| spec.matches(t)).cloned().collect()
}

/// Distinct artist credits in ascending lexicographic order.
pub fn available_artists(tracks: &[Track]) -> Vec<String> {
    tracks
        .iter()
        .map(|t| t.artist_name.as_str())
        .filter(|a| !a.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_tracks, track};
    use proptest::prelude::*;

    #[test]
    fn test_empty_spec_is_identity() {
        let tracks = sample_tracks();
        assert_eq!(apply_filters(&tracks, &FilterSpec::default()), tracks);
        assert_eq!(
            apply_filters(&tracks, &FilterSpec::from_inputs("", "", "")),
            tracks
        );
    }

    #[test]
    fn test_min_streams_keeps_order() {
        let tracks = sample_tracks();
        let spec = FilterSpec::from_inputs("", "", "2000000");
        let filtered = apply_filters(&tracks, &spec);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0], tracks[0]);
        assert_eq!(filtered[1], tracks[2]);
    }

    #[test]
    fn test_year_matches_as_text() {
        let tracks = vec![
            track("A", "x", 10).released(2023),
            track("B", "x", 10).released(2022),
        ];
        let spec = FilterSpec {
            year: Some("2023".to_string()),
            ..Default::default()
        };
        let filtered = apply_filters(&tracks, &spec);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].track_name, "A");

        // Text comparison: a padded year matches nothing
        let spec = FilterSpec {
            year: Some(" 2023".to_string()),
            ..Default::default()
        };
        assert!(apply_filters(&tracks, &spec).is_empty());
    }

    #[test]
    fn test_artist_substring_case_insensitive() {
        let tracks = vec![
            track("Song 1", "Taylor Swift", 10),
            track("Song 2", "Bad Bunny, Taylor Swift", 10),
            track("Song 3", "SZA", 10),
        ];
        let spec = FilterSpec::from_inputs("", "taylor", "");
        let names: Vec<_> = apply_filters(&tracks, &spec)
            .into_iter()
            .map(|t| t.track_name)
            .collect();
        assert_eq!(names, vec!["Song 1", "Song 2"]);
    }

    #[test]
    fn test_predicates_are_anded() {
        let tracks = vec![
            track("A", "Taylor Swift", 5_000_000).released(2022),
            track("B", "Taylor Swift", 500).released(2022),
            track("C", "Taylor Swift", 5_000_000).released(2023),
        ];
        let spec = FilterSpec::from_inputs("2022", "swift", "1000000");
        let filtered = apply_filters(&tracks, &spec);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].track_name, "A");
    }

    #[test]
    fn test_parse_threshold() {
        assert_eq!(parse_threshold("5000000"), Some(5_000_000));
        assert_eq!(parse_threshold(""), None);
        assert_eq!(parse_threshold("lots"), None);
        assert_eq!(parse_threshold("-5"), None);
        assert_eq!(parse_threshold("99999999999999999999"), Some(i64::MAX as u64));
    }

    #[test]
    fn test_huge_threshold_excludes_everything() {
        let spec = FilterSpec::from_inputs("", "", "99999999999999999999");
        assert!(spec.min_streams.is_some());
        assert!(apply_filters(&sample_tracks(), &spec).is_empty());
    }

    #[test]
    fn test_available_artists_sorted_distinct() {
        let tracks = vec![
            track("1", "SZA", 1),
            track("2", "Bad Bunny", 1),
            track("3", "SZA", 1),
            track("4", "Bad Bunny, Grupo Frontera", 1),
        ];
        assert_eq!(
            available_artists(&tracks),
            vec!["Bad Bunny", "Bad Bunny, Grupo Frontera", "SZA"]
        );
        assert!(available_artists(&[]).is_empty());
    }

    fn arb_track() -> impl Strategy<Value = Track> {
        (
            prop::sample::select(vec!["Taylor Swift", "SZA", "Bad Bunny", "The Weeknd"]),
            1u64..10_000_000,
            2019i64..2024,
        )
            .prop_map(|(artist, streams, year)| track("t", artist, streams).released(year))
    }

    fn arb_spec() -> impl Strategy<Value = FilterSpec> {
        (
            proptest::option::of(2019i64..2024),
            proptest::option::of(prop::sample::select(vec!["swift", "SZ", "bunny", "x"])),
            proptest::option::of(0u64..10_000_000),
        )
            .prop_map(|(year, artist, min_streams)| FilterSpec {
                year: year.map(|y| y.to_string()),
                artist: artist.map(str::to_string),
                min_streams,
            })
    }

    proptest! {
        /// An unconstrained spec returns the input unchanged
        #[test]
        fn filter_identity_law(tracks in prop::collection::vec(arb_track(), 0..40)) {
            prop_assert_eq!(apply_filters(&tracks, &FilterSpec::default()), tracks);
        }

        /// Output is exactly the in-order subsequence of matching records
        #[test]
        fn filter_conjunction_is_exact(
            tracks in prop::collection::vec(arb_track(), 0..40),
            spec in arb_spec(),
        ) {
            let filtered = apply_filters(&tracks, &spec);
            let expected: Vec<Track> = tracks
                .iter()
                .filter(|t| {
                    spec.year.as_ref().map_or(true, |y| &t.released_year.to_string() == y)
                        && spec.artist.as_ref().map_or(true, |a| {
                            t.artist_name.to_lowercase().contains(&a.to_lowercase())
                        })
                        && spec.min_streams.map_or(true, |m| t.streams >= m)
                })
                .cloned()
                .collect();
            prop_assert_eq!(filtered, expected);
        }
    }
}
