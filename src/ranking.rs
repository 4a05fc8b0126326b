//! Top-N rankings.
//!
//! All rankings sort descending by a key and truncate. Ties keep the order
//! in which the items appear in the input slice (the sort is stable), and
//! the caller's slice is never reordered.

use std::cmp::Reverse;

use crate::models::{ArtistStats, Track};

/// Default length of every "top N" view
pub const DEFAULT_LIMIT: usize = 10;

/// Sort a copy of `items` descending by `key` and keep the first `limit`.
pub fn rank_by<T, K, F>(items: &[T], limit: usize, key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut ranked: Vec<&T> = items.iter().collect();
    ranked.sort_by_key(|item| Reverse(key(*item)));
    ranked.into_iter().take(limit).cloned().collect()
}

/// Tracks by raw stream count
pub fn top_tracks(tracks: &[Track], limit: usize) -> Vec<Track> {
    rank_by(tracks, limit, |t| t.streams)
}

/// Artist credits by summed streams
pub fn top_artists_by_streams(stats: &[ArtistStats], limit: usize) -> Vec<ArtistStats> {
    rank_by(stats, limit, |s| s.total_streams)
}

/// Artist credits by number of charting tracks. Equal counts fall back to
/// summed streams, so the list agrees with the streams ranking on ties.
pub fn top_artists_by_track_count(stats: &[ArtistStats], limit: usize) -> Vec<ArtistStats> {
    rank_by(stats, limit, |s| (s.track_count, s.total_streams))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::artist_stats;
    use crate::test_utils::{sample_tracks, track};
    use proptest::prelude::*;

    #[test]
    fn test_top_tracks_descending() {
        let tracks = sample_tracks();
        let top = top_tracks(&tracks, DEFAULT_LIMIT);
        let names: Vec<_> = top.iter().map(|t| t.track_name.as_str()).collect();
        assert_eq!(names, vec!["A1", "A2", "B1"]);
    }

    #[test]
    fn test_top_tracks_does_not_reorder_input() {
        let tracks = sample_tracks();
        let before = tracks.clone();
        let _ = top_tracks(&tracks, 1);
        assert_eq!(tracks, before);
    }

    #[test]
    fn test_top_artists_by_streams_limit_one() {
        let stats = artist_stats(&sample_tracks());
        let top = top_artists_by_streams(&stats, 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].artist, "A");
    }

    #[test]
    fn test_top_artists_by_track_count() {
        let tracks = vec![
            track("1", "SZA", 100),
            track("2", "Taylor Swift", 10),
            track("3", "Taylor Swift", 10),
            track("4", "Taylor Swift", 10),
            track("5", "SZA", 100),
        ];
        let stats = artist_stats(&tracks);
        let top = top_artists_by_track_count(&stats, DEFAULT_LIMIT);
        assert_eq!(top[0].artist, "Taylor Swift");
        assert_eq!(top[0].track_count, 3);
        assert_eq!(top[1].artist, "SZA");
    }

    #[test]
    fn test_track_count_ties_break_on_streams() {
        let tracks = vec![
            track("small", "Small", 10),
            track("huge", "Huge", 1_000_000),
            track("mid", "Mid", 5_000),
        ];
        let stats = artist_stats(&tracks);
        let names: Vec<_> = top_artists_by_track_count(&stats, DEFAULT_LIMIT)
            .into_iter()
            .map(|s| s.artist)
            .collect();
        assert_eq!(names, vec!["Huge", "Mid", "Small"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let tracks = vec![
            track("first", "X", 500),
            track("big", "Y", 900),
            track("second", "Z", 500),
            track("third", "W", 500),
        ];
        let names: Vec<_> = top_tracks(&tracks, 4)
            .into_iter()
            .map(|t| t.track_name)
            .collect();
        assert_eq!(names, vec!["big", "first", "second", "third"]);
    }

    #[test]
    fn test_rank_empty_and_zero_limit() {
        assert!(top_tracks(&[], DEFAULT_LIMIT).is_empty());
        assert!(top_tracks(&sample_tracks(), 0).is_empty());
        assert!(top_artists_by_streams(&[], 3).is_empty());
    }

    proptest! {
        /// Length is min(N, |R|) and the output is sorted descending
        #[test]
        fn rank_length_and_order(
            streams in prop::collection::vec(1u64..1_000_000, 0..50),
            limit in 0usize..60,
        ) {
            let tracks: Vec<Track> = streams.iter().map(|&s| track("t", "a", s)).collect();
            let top = top_tracks(&tracks, limit);
            prop_assert_eq!(top.len(), limit.min(tracks.len()));
            prop_assert!(top.windows(2).all(|w| w[0].streams >= w[1].streams));

            if limit >= tracks.len() {
                let mut expected = streams.clone();
                expected.sort_unstable_by(|a, b| b.cmp(a));
                let got: Vec<u64> = top.iter().map(|t| t.streams).collect();
                prop_assert_eq!(got, expected);
            }
        }
    }
}
