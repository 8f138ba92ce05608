use std::path::PathBuf;

use clap::Parser;
use fives_cli::{resolve_config, HighScore, Host};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Plays a game of Fives. Requests are read as JSON lines from stdin,
/// responses are written as JSON lines to stdout.
#[derive(Parser)]
struct Args {
    /// Path to a JSON file with the board size and seed line length
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board width and height, must be odd (overrides the config file)
    #[arg(long)]
    size: Option<usize>,

    /// Length of the lines in the initial cross (overrides the config file)
    #[arg(long)]
    line_length: Option<usize>,

    /// Keep the best score in this JSON file
    #[arg(long)]
    high_score_file: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = resolve_config(args.config.as_deref(), args.size, args.line_length)?;
    info!(size = config.size, line_length = config.line_length);

    let high_score = if let Some(path) = args.high_score_file {
        HighScore::load(path)?
    } else {
        HighScore::in_memory()
    };
    info!(high_score = high_score.best());

    let mut host = Host::new(config, high_score)?;
    host.run(std::io::stdin().lock(), std::io::stdout().lock())
}

// Logs go to stderr, stdout is reserved for responses.
fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .event_format(format),
        )
        .with(filter)
        .init();
}
