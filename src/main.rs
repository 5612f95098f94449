#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::cargo)]
#![warn(clippy::perf)]
#![warn(clippy::complexity)]
#![warn(clippy::style)]
#![allow(clippy::multiple_crate_versions)]

use std::{path::PathBuf, process::ExitCode, time::Duration};

use clap::Parser;
use pixelsport_m3u::{
    Config,
    config::{DEFAULT_BASE_URL, DEFAULT_OUTPUT_FILE, DEFAULT_TIMEOUT_SECS},
    logging::init_logging,
    run,
};
use tracing::{error, info};

/// Builds an M3U playlist out of PixelSport's live events and 24/7 channels
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Where to write the playlist
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// PixelSport origin; feed endpoints and the referer are derived from it
    #[arg(long, env = "PIXELSPORT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_logging();

    let args = Args::parse();
    let config = Config::new(&args.base_url)
        .with_output(args.output)
        .with_timeout(Duration::from_secs(args.timeout));

    match run(&config).await {
        Ok(summary) => {
            info!(
                "Saved: {} ({} events + {} live channels, {} entries)",
                summary.output.display(),
                summary.events,
                summary.sliders,
                summary.entries
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", anyhow::Error::new(e));
            ExitCode::FAILURE
        }
    }
}
