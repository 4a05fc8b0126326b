//! Full recomputation of every derived view for one filter specification.
//!
//! Nothing is cached between calls: changing the filter means calling
//! `Dashboard::compute` again over the same normalized records.

use serde::Serialize;
use tracing::debug;

use crate::aggregate::{artist_stats, average_stats};
use crate::compare::artist_comparison;
use crate::filter::{apply_filters, FilterSpec};
use crate::models::{ArtistComparison, ArtistStats, AverageStats, Track};
use crate::ranking::{top_artists_by_streams, top_artists_by_track_count, top_tracks, DEFAULT_LIMIT};

pub const DEFAULT_COMPARE: (&str, &str) = ("Taylor Swift", "Olivia Rodrigo");

/// Knobs that shape the derived views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardOptions {
    pub limit: usize,
    pub compare: (String, String),
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            compare: (DEFAULT_COMPARE.0.to_string(), DEFAULT_COMPARE.1.to_string()),
        }
    }
}

/// Headline facts drawn from the rankings. Absent when nothing matched.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Insights {
    pub top_track: String,
    pub top_track_streams: u64,
    pub top_artist: String,
    pub top_artist_streams: u64,
    pub prolific_artist: String,
    pub prolific_track_count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dashboard {
    pub filter: FilterSpec,
    pub total_tracks: usize,
    pub filtered_tracks: usize,
    pub top_tracks: Vec<Track>,
    pub artist_stats: Vec<ArtistStats>,
    pub top_artists_by_streams: Vec<ArtistStats>,
    pub top_artists_by_tracks: Vec<ArtistStats>,
    pub average_stats: AverageStats,
    pub artist_comparison: ArtistComparison,
    pub insights: Option<Insights>,
}

impl Dashboard {
    pub fn compute(tracks: &[Track], filter: &FilterSpec, options: &DashboardOptions) -> Self {
        let filtered = apply_filters(tracks, filter);

        let top = top_tracks(&filtered, options.limit);
        let stats = artist_stats(&filtered);
        let by_streams = top_artists_by_streams(&stats, options.limit);
        let by_tracks = top_artists_by_track_count(&stats, options.limit);
        let comparison = artist_comparison(&filtered, &options.compare.0, &options.compare.1);

        debug!(
            total = tracks.len(),
            filtered = filtered.len(),
            artists = stats.len(),
            "dashboard recomputed"
        );

        let insights = insights(&top, &by_streams, &by_tracks);

        Self {
            filter: filter.clone(),
            total_tracks: tracks.len(),
            filtered_tracks: filtered.len(),
            top_tracks: top,
            artist_stats: stats,
            top_artists_by_streams: by_streams,
            top_artists_by_tracks: by_tracks,
            average_stats: average_stats(&filtered),
            artist_comparison: comparison,
            insights,
        }
    }
}

fn insights(
    top: &[Track],
    by_streams: &[ArtistStats],
    by_tracks: &[ArtistStats],
) -> Option<Insights> {
    let track = top.first()?;
    let artist = by_streams.first()?;
    let prolific = by_tracks.first()?;

    Some(Insights {
        top_track: track.track_name.clone(),
        top_track_streams: track.streams,
        top_artist: artist.artist.clone(),
        top_artist_streams: artist.total_streams,
        prolific_artist: prolific.artist.clone(),
        prolific_track_count: prolific.track_count,
    })
}
