//! Record normalization: raw untyped rows into typed `Track`s.
//!
//! Parsing is lenient and never fails. A numeric field takes the leading
//! number of its text, so "120 bpm" reads as 120 and garbage reads as the
//! field's zero value. Rows without streams, a track name or an artist
//! credit are dropped; the shrinking row count is the only signal.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::{RawRow, RawValue, Track};

// ============================================================================
// Column Names
// ============================================================================

/// Column names of the 2023 streaming dataset.
pub mod columns {
    pub const TRACK_NAME: &str = "track_name";
    pub const ARTIST_NAME: &str = "artist(s)_name";
    pub const ARTIST_COUNT: &str = "artist_count";
    pub const RELEASED_YEAR: &str = "released_year";
    pub const RELEASED_MONTH: &str = "released_month";
    pub const RELEASED_DAY: &str = "released_day";
    pub const IN_SPOTIFY_PLAYLISTS: &str = "in_spotify_playlists";
    pub const IN_SPOTIFY_CHARTS: &str = "in_spotify_charts";
    pub const STREAMS: &str = "streams";
    pub const IN_APPLE_PLAYLISTS: &str = "in_apple_playlists";
    pub const IN_APPLE_CHARTS: &str = "in_apple_charts";
    pub const IN_DEEZER_PLAYLISTS: &str = "in_deezer_playlists";
    pub const IN_DEEZER_CHARTS: &str = "in_deezer_charts";
    pub const IN_SHAZAM_CHARTS: &str = "in_shazam_charts";
    pub const BPM: &str = "bpm";
    pub const KEY: &str = "key";
    pub const MODE: &str = "mode";
    pub const DANCEABILITY: &str = "danceability_%";
    pub const VALENCE: &str = "valence_%";
    pub const ENERGY: &str = "energy_%";
    pub const ACOUSTICNESS: &str = "acousticness_%";
    pub const INSTRUMENTALNESS: &str = "instrumentalness_%";
    pub const LIVENESS: &str = "liveness_%";
    pub const SPEECHINESS: &str = "speechiness_%";
}

// ============================================================================
// REGEX PATTERNS
// ============================================================================

/// Leading integer: "  42", "-7", "120abc" -> 120
static LEADING_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").unwrap());

/// Leading decimal with optional exponent: "12.5%", ".5", "1e3"
static LEADING_FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").unwrap()
});

// ============================================================================
// Scalar Parsing
// ============================================================================

/// Parse the leading integer of `s`. None when there is no digit prefix.
/// Digit runs too long for i64 saturate toward their sign.
pub fn parse_int(s: &str) -> Option<i64> {
    let digits = LEADING_INT.captures(s)?.get(1)?.as_str();
    match digits.parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) if digits.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Parse the leading decimal number of `s`.
pub fn parse_float(s: &str) -> Option<f64> {
    LEADING_FLOAT
        .captures(s)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Parse a count that may carry thousands separators ("1,316,855,716").
pub fn parse_count(s: &str) -> Option<i64> {
    parse_int(&s.replace(',', ""))
}

fn int_field(row: &RawRow, column: &str) -> i64 {
    match row.get(column) {
        Some(RawValue::Number(n)) if n.is_finite() => n.trunc() as i64,
        Some(RawValue::Text(s)) => parse_int(s).unwrap_or(0),
        _ => 0,
    }
}

fn count_field(row: &RawRow, column: &str) -> i64 {
    match row.get(column) {
        Some(RawValue::Number(n)) if n.is_finite() => n.trunc() as i64,
        Some(RawValue::Text(s)) => parse_count(s).unwrap_or(0),
        _ => 0,
    }
}

fn float_field(row: &RawRow, column: &str) -> f64 {
    match row.get(column) {
        Some(RawValue::Number(n)) if n.is_finite() => *n,
        Some(RawValue::Text(s)) => parse_float(s).unwrap_or(0.0),
        _ => 0.0,
    }
}

fn text_field(row: &RawRow, column: &str) -> String {
    row.get(column)
        .map(|v| v.as_text().into_owned())
        .unwrap_or_default()
}

/// Track name and artist credit. A zero or NaN number counts as missing.
fn identity_field(row: &RawRow, column: &str) -> String {
    match row.get(column) {
        Some(RawValue::Number(n)) if *n == 0.0 || n.is_nan() => String::new(),
        _ => text_field(row, column),
    }
}

// ============================================================================
// Row Normalization
// ============================================================================

/// Normalize a single row. Returns None for rows that fail the validity
/// rule (streams > 0, non-empty track name and artist credit).
pub fn normalize_row(row: &RawRow) -> Option<Track> {
    use columns::*;

    let streams = count_field(row, STREAMS);
    if streams <= 0 {
        return None;
    }

    let track_name = identity_field(row, TRACK_NAME);
    let artist_name = identity_field(row, ARTIST_NAME);
    if track_name.is_empty() || artist_name.is_empty() {
        return None;
    }

    Some(Track {
        track_name,
        artist_name,
        artist_count: int_field(row, ARTIST_COUNT),
        released_year: int_field(row, RELEASED_YEAR),
        released_month: int_field(row, RELEASED_MONTH),
        released_day: int_field(row, RELEASED_DAY),
        in_spotify_playlists: count_field(row, IN_SPOTIFY_PLAYLISTS),
        in_spotify_charts: count_field(row, IN_SPOTIFY_CHARTS),
        streams: streams as u64,
        in_apple_playlists: count_field(row, IN_APPLE_PLAYLISTS),
        in_apple_charts: count_field(row, IN_APPLE_CHARTS),
        in_deezer_playlists: count_field(row, IN_DEEZER_PLAYLISTS),
        in_deezer_charts: count_field(row, IN_DEEZER_CHARTS),
        in_shazam_charts: count_field(row, IN_SHAZAM_CHARTS),
        bpm: float_field(row, BPM),
        key: text_field(row, KEY),
        mode: text_field(row, MODE),
        danceability: float_field(row, DANCEABILITY),
        valence: float_field(row, VALENCE),
        energy: float_field(row, ENERGY),
        acousticness: float_field(row, ACOUSTICNESS),
        instrumentalness: float_field(row, INSTRUMENTALNESS),
        liveness: float_field(row, LIVENESS),
        speechiness: float_field(row, SPEECHINESS),
    })
}

/// Normalize every row, keeping input order and silently dropping invalid rows.
pub fn normalize_rows(rows: &[RawRow]) -> Vec<Track> {
    let tracks: Vec<Track> = rows.iter().filter_map(normalize_row).collect();
    debug!(
        kept = tracks.len(),
        dropped = rows.len() - tracks.len(),
        "normalized raw rows"
    );
    tracks
}
