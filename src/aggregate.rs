//! Per-artist aggregation and global averages.
//!
//! Grouping runs in two phases: a single pass accumulates sums and counts
//! per artist credit, then `finalize` divides once. Groups come out in the
//! order their artist credit first appears in the input.

use rustc_hash::FxHashMap;

use crate::models::{ArtistStats, AverageStats, Track};

// ============================================================================
// Rounding
// ============================================================================

/// Round to the nearest integer, halves toward positive infinity
/// (2.5 -> 3, -2.5 -> -2).
pub fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

// ============================================================================
// Accumulation
// ============================================================================

/// Running sums for one group of tracks.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MoodAccumulator {
    pub total_streams: u64,
    pub track_count: usize,
    pub valence_sum: f64,
    pub energy_sum: f64,
    pub bpm_sum: f64,
}

impl MoodAccumulator {
    /// Stream totals saturate at `u64::MAX`.
    pub fn add(&mut self, track: &Track) {
        self.total_streams = self.total_streams.saturating_add(track.streams);
        self.track_count += 1;
        self.valence_sum += track.valence;
        self.energy_sum += track.energy;
        self.bpm_sum += track.bpm;
    }

    pub fn avg_valence(&self) -> f64 {
        mean(self.valence_sum, self.track_count)
    }

    pub fn avg_energy(&self) -> f64 {
        mean(self.energy_sum, self.track_count)
    }

    pub fn avg_bpm(&self) -> f64 {
        mean(self.bpm_sum, self.track_count)
    }

    pub fn finalize(self, artist: &str) -> ArtistStats {
        ArtistStats {
            artist: artist.to_string(),
            total_streams: self.total_streams,
            track_count: self.track_count,
            avg_valence: self.avg_valence(),
            avg_energy: self.avg_energy(),
            avg_bpm: self.avg_bpm(),
        }
    }
}

impl<'a> FromIterator<&'a Track> for MoodAccumulator {
    fn from_iter<I: IntoIterator<Item = &'a Track>>(iter: I) -> Self {
        let mut acc = MoodAccumulator::default();
        for track in iter {
            acc.add(track);
        }
        acc
    }
}

// ============================================================================
// Artist Stats
// ============================================================================

/// One aggregate per distinct artist credit (verbatim, not split).
pub fn artist_stats(tracks: &[Track]) -> Vec<ArtistStats> {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut groups: Vec<(&str, MoodAccumulator)> = Vec::new();

    for track in tracks {
        let slot = *index.entry(track.artist_name.as_str()).or_insert_with(|| {
            groups.push((track.artist_name.as_str(), MoodAccumulator::default()));
            groups.len() - 1
        });
        groups[slot].1.add(track);
    }

    groups
        .into_iter()
        .map(|(artist, acc)| acc.finalize(artist))
        .collect()
}

/// Global averages over the whole set, rounded. All zeros for empty input.
pub fn average_stats(tracks: &[Track]) -> AverageStats {
    if tracks.is_empty() {
        return AverageStats::default();
    }

    let acc: MoodAccumulator = tracks.iter().collect();
    AverageStats {
        avg_bpm: round_half_up(acc.avg_bpm()),
        avg_valence: round_half_up(acc.avg_valence()),
        avg_energy: round_half_up(acc.avg_energy()),
    }
}
