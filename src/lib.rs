#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::perf)]
#![warn(clippy::complexity)]
#![warn(clippy::style)]

use std::{
    io::{self, Write as _},
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument};

pub mod config;
pub mod error;
pub mod league;
pub mod logging;
pub mod normalize;
pub mod pixelsport;
pub mod playlist;
pub mod util;

pub use config::Config;
pub use error::{FetchError, RunError};

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub playlist: String,
    /// Raw items seen in each feed, usable or not
    pub events: usize,
    pub sliders: usize,
    pub entries: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output: PathBuf,
    pub events: usize,
    pub sliders: usize,
    pub entries: usize,
}

/// Fetches both feeds and renders the playlist in memory
///
/// # Errors
/// Errors when the HTTP client cannot be built or either feed fails to fetch
#[instrument(skip_all)]
pub async fn generate(config: &Config) -> Result<Generated, RunError> {
    let client = util::init_http_client(&config.headers, config.timeout)?;

    let events = pixelsport::get_events(&client, &config.events_url);
    let sliders = pixelsport::get_sliders(&client, &config.sliders_url);
    let (events, sliders) = tokio::try_join!(events, sliders)?;
    debug!("Fetched {} events and {} sliders", events.len(), sliders.len());

    let entries = playlist::entries(&events, &sliders, config);

    Ok(Generated {
        playlist: playlist::render(&entries, &config.headers),
        events: events.len(),
        sliders: sliders.len(),
        entries: entries.len(),
    })
}

/// Generates the playlist and replaces the configured output file with it.
///
/// Nothing is written unless both feeds were fetched. The file is replaced
/// through a sibling temporary file, so readers never see a half-written one.
///
/// # Errors
/// See [`generate`]; also errors when the output file cannot be written
pub async fn run(config: &Config) -> Result<RunSummary, RunError> {
    info!("Fetching PixelSport data...");
    let generated = generate(config).await?;

    write_atomically(&config.output, generated.playlist).await?;

    Ok(RunSummary {
        output: config.output.clone(),
        events: generated.events,
        sliders: generated.sliders,
        entries: generated.entries,
    })
}

/// Writes through a uniquely named temporary file next to `path`, then
/// renames it into place. The temporary file is removed on any failure.
async fn write_atomically(path: &Path, contents: String) -> Result<(), RunError> {
    let target = path.to_path_buf();

    let written = tokio::task::spawn_blocking(move || -> io::Result<()> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = tempfile::Builder::new()
            .prefix(".pixelsport-")
            .suffix(".part")
            .tempfile_in(dir)?;
        file.write_all(contents.as_bytes())?;
        #[cfg(unix)]
        {
            use std::{fs::Permissions, os::unix::fs::PermissionsExt};

            let readable = Permissions::from_mode(0o644);
            file.as_file().set_permissions(readable)?;
        }
        file.persist(&target)?;

        Ok(())
    })
    .await
    .unwrap_or_else(|e| Err(io::Error::other(e)));

    written.map_err(|source| RunError::Write {
        path: path.to_path_buf(),
        source,
    })
}
