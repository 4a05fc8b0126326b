//! Test fixtures shared by the pipeline modules.
//!
//! `track()` builds a valid record with zeroed descriptors; the inherent
//! helpers below set the fields a test cares about:
//!
//! ```ignore
//! let t = track("Flowers", "Miley Cyrus", 1_316_855_716)
//!     .released(2023)
//!     .mood(65.0, 68.0, 118.0);
//! ```

use crate::models::Track;

/// A valid track with the given identity and stream count.
pub fn track(name: &str, artist: &str, streams: u64) -> Track {
    Track {
        track_name: name.to_string(),
        artist_name: artist.to_string(),
        artist_count: 1,
        streams,
        ..Default::default()
    }
}

impl Track {
    pub fn released(mut self, year: i64) -> Self {
        self.released_year = year;
        self
    }

    pub fn mood(mut self, valence: f64, energy: f64, bpm: f64) -> Self {
        self.valence = valence;
        self.energy = energy;
        self.bpm = bpm;
        self
    }
}

/// The three-record scenario used across the aggregate/rank/filter tests:
/// artist A twice (3M and 2M streams) and artist B once (1M).
pub fn sample_tracks() -> Vec<Track> {
    vec![
        track("A1", "A", 3_000_000).mood(50.0, 60.0, 120.0),
        track("B1", "B", 1_000_000).mood(80.0, 40.0, 100.0),
        track("A2", "A", 2_000_000).mood(70.0, 50.0, 130.0),
    ]
}
