//! Core data models for the streaming statistics pipeline.
//!
//! This module contains the raw row representation handed over by the
//! ingestion side, the normalized track record, and every derived view
//! the dashboard produces.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// ============================================================================
// Raw Input
// ============================================================================

/// Untyped scalar as produced by generic tabular parsing.
///
/// CSV ingestion only ever yields `Text`; `Number` exists for callers that
/// feed rows from JSON or build them in code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Textual form of the value (numbers use their shortest display form).
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            RawValue::Text(s) => Cow::Borrowed(s.as_str()),
            RawValue::Number(n) => Cow::Owned(n.to_string()),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

/// One raw row: column name -> untyped value
pub type RawRow = FxHashMap<String, RawValue>;

// ============================================================================
// Track Record
// ============================================================================

/// One normalized streaming entry.
///
/// Only constructed by the normalizer, which guarantees `streams > 0` and
/// non-empty `track_name` / `artist_name`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Track {
    pub track_name: String,
    pub artist_name: String, // Full credit, e.g. "Bad Bunny, Grupo Frontera"
    pub artist_count: i64,
    pub released_year: i64,
    pub released_month: i64,
    pub released_day: i64,
    pub in_spotify_playlists: i64,
    pub in_spotify_charts: i64,
    pub streams: u64,
    pub in_apple_playlists: i64,
    pub in_apple_charts: i64,
    pub in_deezer_playlists: i64,
    pub in_deezer_charts: i64,
    pub in_shazam_charts: i64,
    pub bpm: f64,
    pub key: String,
    pub mode: String,

    // Audio descriptors, nominally 0-100 (not clamped)
    pub danceability: f64,
    pub valence: f64,
    pub energy: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub speechiness: f64,
}

// ============================================================================
// Aggregates
// ============================================================================

/// Per-artist-credit totals and means over the filtered set.
/// `track_count` is always >= 1 for a produced aggregate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArtistStats {
    pub artist: String,
    pub total_streams: u64,
    pub track_count: usize,
    pub avg_valence: f64,
    pub avg_energy: f64,
    pub avg_bpm: f64,
}

/// Global averages over a record set, rounded to whole numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AverageStats {
    pub avg_bpm: i64,
    pub avg_valence: i64,
    pub avg_energy: i64,
}

// ============================================================================
// Comparison
// ============================================================================

/// Rounded mood/tempo averages for one side of a comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonStats {
    pub valence: i64,
    pub energy: i64,
    pub bpm: i64,
}

/// One named artist's summary. A name with no matches has
/// `track_count == 0` and zeroed stats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArtistSummary {
    pub name: String,
    pub stats: ComparisonStats,
    pub track_count: usize,
}

impl ArtistSummary {
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            stats: ComparisonStats::default(),
            track_count: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArtistComparison {
    pub first: ArtistSummary,
    pub second: ArtistSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_value_as_text() {
        assert_eq!(RawValue::from("1,234").as_text(), "1,234");
        assert_eq!(RawValue::from(3_000_000.0).as_text(), "3000000");
        assert_eq!(RawValue::from(120.5).as_text(), "120.5");
    }

    #[test]
    fn test_raw_value_untagged_deserialize() {
        let row: RawRow =
            serde_json::from_str(r#"{"streams": "1,000", "bpm": 120, "track_name": "Flowers"}"#)
                .unwrap();
        assert_eq!(row["streams"], RawValue::Text("1,000".to_string()));
        assert_eq!(row["bpm"], RawValue::Number(120.0));
        assert_eq!(row["track_name"], RawValue::Text("Flowers".to_string()));
    }

    #[test]
    fn test_empty_summary() {
        let summary = ArtistSummary::empty("Nobody");
        assert_eq!(summary.name, "Nobody");
        assert_eq!(summary.track_count, 0);
        assert_eq!(summary.stats, ComparisonStats::default());
    }
}
