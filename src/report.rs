//! Presentation of a computed dashboard: a plain-text report for the
//! terminal and a JSON export.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;

use crate::dashboard::Dashboard;
use crate::filter::FilterSpec;
use crate::models::{ArtistStats, ArtistSummary};

/// Artist labels in the ranking tables are cut to this many characters
pub const LABEL_WIDTH: usize = 15;

/// Cut `s` to `max` characters, marking the cut with "...".
pub fn truncate_label(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let cut: String = s.chars().take(max).collect();
        format!("{cut}...")
    } else {
        s.to_string()
    }
}

/// "950", "2.4K", "1.3M", "12.1B" style stream counts
pub fn format_streams(streams: u64) -> String {
    let n = streams as f64;
    if n >= 1e9 {
        format!("{:.1}B", n / 1e9)
    } else if n >= 1e6 {
        format!("{:.1}M", n / 1e6)
    } else if n >= 1e3 {
        format!("{:.1}K", n / 1e3)
    } else {
        streams.to_string()
    }
}

/// One-line description of how many tracks are shown and why.
pub fn filter_summary(filter: &FilterSpec, shown: usize) -> String {
    let mut line = format!("Showing {shown} tracks");
    if let Some(year) = filter.year.as_deref().filter(|y| !y.is_empty()) {
        let _ = write!(line, " from {year}");
    }
    if let Some(artist) = filter.artist.as_deref().filter(|a| !a.is_empty()) {
        let _ = write!(line, " by artists matching \"{artist}\"");
    }
    if let Some(min) = filter.min_streams {
        let _ = write!(line, " with at least {}M streams", min as f64 / 1e6);
    }
    line
}

fn artist_table(out: &mut String, title: &str, rows: &[ArtistStats], by_tracks: bool) {
    let _ = writeln!(out, "\n{title}");
    let _ = writeln!(out, "{:-<60}", "");
    if rows.is_empty() {
        let _ = writeln!(out, "No artists found.");
        return;
    }
    for (i, s) in rows.iter().enumerate() {
        let label = truncate_label(&s.artist, LABEL_WIDTH);
        if by_tracks {
            let _ = writeln!(out, "{:>2}. {:<20} {} tracks", i + 1, label, s.track_count);
        } else {
            let _ = writeln!(out, "{:>2}. {:<20} {}", i + 1, label, format_streams(s.total_streams));
        }
    }
}

fn summary_line(out: &mut String, summary: &ArtistSummary) {
    let _ = writeln!(
        out,
        "  {:<20} tracks={:<4} valence={:>3}% energy={:>3}% bpm={}",
        summary.name,
        summary.track_count,
        summary.stats.valence,
        summary.stats.energy,
        summary.stats.bpm
    );
}

/// Render the whole dashboard as terminal text.
pub fn render_text(dash: &Dashboard) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{:=<60}", "");
    let _ = writeln!(out, "Streaming Showdown 2023");
    let _ = writeln!(out, "{:=<60}", "");
    let _ = writeln!(out, "{}", filter_summary(&dash.filter, dash.filtered_tracks));
    let _ = writeln!(out, "  (dataset: {} tracks)", dash.total_tracks);

    let avg = &dash.average_stats;
    let _ = writeln!(out, "\nAverages");
    let _ = writeln!(out, "{:-<60}", "");
    let _ = writeln!(out, "  BPM: {}", avg.avg_bpm);
    let _ = writeln!(out, "  Valence: {}%", avg.avg_valence);
    let _ = writeln!(out, "  Energy: {}%", avg.avg_energy);

    let _ = writeln!(out, "\nTop tracks");
    let _ = writeln!(out, "{:-<60}", "");
    if dash.top_tracks.is_empty() {
        let _ = writeln!(out, "No tracks found.");
    }
    for (i, t) in dash.top_tracks.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {} - {} ({}) [{}]",
            i + 1,
            t.artist_name,
            t.track_name,
            t.released_year,
            format_streams(t.streams)
        );
    }

    artist_table(&mut out, "Total streams per artist", &dash.top_artists_by_streams, false);
    artist_table(&mut out, "Hit tracks per artist", &dash.top_artists_by_tracks, true);

    let _ = writeln!(out, "\nArtist comparison");
    let _ = writeln!(out, "{:-<60}", "");
    summary_line(&mut out, &dash.artist_comparison.first);
    summary_line(&mut out, &dash.artist_comparison.second);

    let _ = writeln!(out, "\nInsights");
    let _ = writeln!(out, "{:-<60}", "");
    match &dash.insights {
        Some(ins) => {
            let _ = writeln!(
                out,
                "  Most streamed track: \"{}\" with {:.1}M streams",
                ins.top_track,
                ins.top_track_streams as f64 / 1e6
            );
            let _ = writeln!(
                out,
                "  Streaming king: {} with {:.1}B total streams",
                ins.top_artist,
                ins.top_artist_streams as f64 / 1e9
            );
            let _ = writeln!(
                out,
                "  Most prolific: {} ({} tracks)",
                ins.prolific_artist, ins.prolific_track_count
            );
        }
        None => {
            let _ = writeln!(out, "  No tracks match the current filters. Try relaxing them.");
        }
    }

    out
}

/// Write the dashboard as pretty JSON.
pub fn write_json(dash: &Dashboard, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(dash).context("Failed to serialize dashboard")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    Ok(())
}
