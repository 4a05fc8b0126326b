use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stream_stats::config::{Config, Overrides};
use stream_stats::dashboard::Dashboard;
use stream_stats::filter::available_artists;
use stream_stats::load::load_tracks;
use stream_stats::progress::{finish_phase, format_duration, phase_spinner, set_log_only};
use stream_stats::report::{render_text, write_json};
use stream_stats::safety::validate_report_path;

#[derive(Parser)]
#[command(name = "stream-stats")]
#[command(about = "Top tracks, artist totals and mood averages from a streaming-stats CSV")]
struct Args {
    /// Source CSV (e.g. spotify-2023.csv)
    #[arg(env = "STREAM_STATS_CSV")]
    source: PathBuf,

    /// TOML config file with [dashboard] and [filters] sections
    #[arg(long, env = "STREAM_STATS_CONFIG")]
    config: Option<PathBuf>,

    /// Only tracks released in this year (empty clears the config value)
    #[arg(long)]
    year: Option<String>,

    /// Only tracks whose artist credit contains this text, case-insensitive
    #[arg(long)]
    artist: Option<String>,

    /// Only tracks with at least this many streams
    #[arg(long)]
    min_streams: Option<String>,

    /// Length of every top-N list
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    limit: Option<u64>,

    /// Two artist names to compare side by side
    #[arg(long, num_args = 2, value_names = ["FIRST", "SECOND"])]
    compare: Option<Vec<String>>,

    /// Also write the full dashboard as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print the distinct artist credits of the dataset and exit
    #[arg(long)]
    list_artists: bool,

    /// Hide spinners and log phase timings instead
    #[arg(long)]
    log_only: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stream_stats=info")))
        .init();

    set_log_only(args.log_only);

    if let Some(ref json) = args.json {
        validate_report_path(json, &args.source)?;
    }

    let config = match args.config {
        Some(ref path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    let config = config.with_overrides(Overrides {
        year: args.year,
        artist: args.artist,
        min_streams: args.min_streams,
        limit: args.limit.map(|n| n as usize),
        compare: args.compare.and_then(|names| match names.as_slice() {
            [first, second] => Some((first.clone(), second.clone())),
            _ => None,
        }),
    });

    let start = Instant::now();

    let spinner = phase_spinner("Loading dataset");
    let tracks = load_tracks(&args.source)
        .with_context(|| format!("Failed to load {}", args.source.display()))?;
    finish_phase(
        &spinner,
        format!("Loaded {} valid tracks", tracks.len()),
        start.elapsed(),
    );

    if args.list_artists {
        for artist in available_artists(&tracks) {
            println!("{}", artist);
        }
        return Ok(());
    }

    let compute_start = Instant::now();
    let spinner = phase_spinner("Computing dashboard");
    let dashboard = Dashboard::compute(&tracks, config.filter_spec(), &config.dashboard_options());
    finish_phase(
        &spinner,
        format!("Dashboard ready ({} tracks in scope)", dashboard.filtered_tracks),
        compute_start.elapsed(),
    );

    print!("{}", render_text(&dashboard));

    if let Some(ref json) = args.json {
        write_json(&dashboard, json)?;
        println!("\nWrote JSON report to {}", json.display());
    }

    println!("\nElapsed: {}", format_duration(start.elapsed()));
    Ok(())
}
