use std::fmt;

use tracing::debug;

use crate::{
    config::{Config, PlayerHeaders},
    normalize::{normalize_event, normalize_slider},
    pixelsport::structs::{RawEvent, RawSlider},
};

pub const HEADER: &str = "#EXTM3U";
const GROUP_PREFIX: &str = "Pixelsports";

/// A single playable stream and the metadata shown next to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub tvg_id: String,
    pub logo: String,
    pub group: String,
    pub title: String,
    pub url: String,
}

impl PlaylistEntry {
    fn extinf(&self) -> String {
        format!(
            r#"#EXTINF:-1 tvg-id="{}" tvg-logo="{}" group-title="{GROUP_PREFIX} - {}",{}"#,
            self.tvg_id, self.logo, self.group, self.title
        )
    }
}

/// The `#EXTVLCOPT` lines repeated under every entry so VLC replays the
/// same headers the feeds were fetched with
struct PlayerOptions<'a>(&'a PlayerHeaders);

impl fmt::Display for PlayerOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#EXTVLCOPT:http-user-agent={}", self.0.user_agent)?;
        writeln!(f, "#EXTVLCOPT:http-referrer={}", self.0.referer)?;
        write!(f, "#EXTVLCOPT:http-icy-metadata={}", self.0.icy_metadata)
    }
}

/// Every entry derived from the feeds: events first, then sliders, each in
/// feed order
#[must_use]
pub fn entries(events: &[RawEvent], sliders: &[RawSlider], config: &Config) -> Vec<PlaylistEntry> {
    let events = events.iter().map(|e| normalize_event(e, config));
    let sliders = sliders.iter().map(|s| normalize_slider(s, config));

    events
        .chain(sliders)
        .inspect(|item| {
            if item.links.is_empty() {
                debug!("Skipping {:?}, no usable stream links", item.title);
            }
        })
        .flat_map(|item| item.entries())
        .collect()
}

/// Renders entries as an extended M3U document. Lines are joined with `\n`,
/// nothing follows the last URL.
#[must_use]
pub fn render(entries: &[PlaylistEntry], headers: &PlayerHeaders) -> String {
    let options = PlayerOptions(headers).to_string();
    let mut lines = Vec::with_capacity(1 + entries.len() * 3);
    lines.push(HEADER.to_string());

    for entry in entries {
        lines.push(entry.extinf());
        lines.push(options.clone());
        lines.push(entry.url.clone());
    }

    lines.join("\n")
}

#[must_use]
pub fn build(events: &[RawEvent], sliders: &[RawSlider], config: &Config) -> String {
    render(&entries(events, sliders, config), &config.headers)
}
