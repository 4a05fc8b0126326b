//! Side-by-side comparison of two named artists.
//!
//! Matching is a loose case-insensitive substring test against the full
//! artist credit, so "Bad Bunny, Taylor Swift" counts for both names and a
//! short query can match unrelated credits. The two sides are computed
//! independently and may overlap.

use crate::aggregate::{round_half_up, MoodAccumulator};
use crate::filter::contains_ignore_case;
use crate::models::{ArtistComparison, ArtistSummary, ComparisonStats, Track};

/// Summarize every track whose credit contains `name`.
pub fn artist_summary(tracks: &[Track], name: &str) -> ArtistSummary {
    let acc: MoodAccumulator = tracks
        .iter()
        .filter(|t| contains_ignore_case(&t.artist_name, name))
        .collect();

    if acc.track_count == 0 {
        return ArtistSummary::empty(name);
    }

    ArtistSummary {
        name: name.to_string(),
        stats: ComparisonStats {
            valence: round_half_up(acc.avg_valence()),
            energy: round_half_up(acc.avg_energy()),
            bpm: round_half_up(acc.avg_bpm()),
        },
        track_count: acc.track_count,
    }
}

pub fn artist_comparison(tracks: &[Track], first: &str, second: &str) -> ArtistComparison {
    ArtistComparison {
        first: artist_summary(tracks, first),
        second: artist_summary(tracks, second),
    }
}
