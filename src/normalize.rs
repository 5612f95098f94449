use crate::{
    config::{Config, Identity},
    league::classify_league,
    pixelsport::structs::{RawEvent, RawSlider, ServerSlots},
    playlist::PlaylistEntry,
};

const UNKNOWN_EVENT_TITLE: &str = "Unknown Event";
const LIVE_CHANNEL_TITLE: &str = "Live Channel";
const DEFAULT_LEAGUE_LABEL: &str = "Sports";

/// A feed item reduced to what the playlist needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub title: String,
    pub logo: String,
    pub tvg_id: String,
    pub group: String,
    pub links: Vec<String>,
}

impl Item {
    /// One entry per link, in link order. No links, no entries.
    #[must_use]
    pub fn entries(&self) -> Vec<PlaylistEntry> {
        self.links
            .iter()
            .map(|url| PlaylistEntry {
                tvg_id: self.tvg_id.clone(),
                logo: self.logo.clone(),
                group: self.group.clone(),
                title: self.title.clone(),
                url: url.clone(),
            })
            .collect()
    }
}

/// Usable server URLs of `slots`, server 1 to 3.
///
/// Events name their slots `server{i}URL` and sliders `liveserver{i}URL`;
/// the record types absorb that prefix. Empty values and the literal string
/// `null` (any case) are not links.
#[must_use]
pub fn collect_links<S: ServerSlots>(slots: Option<&S>) -> Vec<String> {
    let Some(slots) = slots else {
        return Vec::new();
    };

    slots
        .server_urls()
        .into_iter()
        .flatten()
        .filter(|url| !url.is_empty() && !url.eq_ignore_ascii_case("null"))
        .map(str::to_string)
        .collect()
}

#[must_use]
pub fn normalize_event(event: &RawEvent, config: &Config) -> Item {
    let title = non_blank(event.match_name.as_deref())
        .unwrap_or(UNKNOWN_EVENT_TITLE)
        .to_string();
    // Any string present wins, blank or not; only a missing logo is defaulted
    let logo = event
        .competitors1_logo
        .clone()
        .unwrap_or_else(|| config.live_tv.logo.clone());

    let channel = event.channel.as_ref();
    let label = channel
        .and_then(|c| c.tv_category.as_ref())
        .and_then(|c| c.name.as_deref())
        .unwrap_or(DEFAULT_LEAGUE_LABEL);
    // Only the id and group come from the league; the logo stays per-event
    let Identity { tvg_id, group, .. } = classify_league(label, &config.leagues, &config.fallback);

    Item {
        title,
        logo,
        tvg_id: tvg_id.clone(),
        group: group.clone(),
        links: collect_links(channel),
    }
}

#[must_use]
pub fn normalize_slider(slider: &RawSlider, config: &Config) -> Item {
    let title = non_blank(slider.title.as_deref())
        .unwrap_or(LIVE_CHANNEL_TITLE)
        .to_string();

    Item {
        title,
        logo: config.live_tv.logo.clone(),
        tvg_id: config.live_tv.tvg_id.clone(),
        group: config.live_tv.group.clone(),
        links: collect_links(slider.live_tv.as_ref()),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
