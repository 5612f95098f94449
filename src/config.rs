use std::{path::PathBuf, time::Duration};

pub const DEFAULT_BASE_URL: &str = "https://pixelsport.tv";
pub const EVENTS_PATH: &str = "/backend/liveTV/events";
pub const SLIDERS_PATH: &str = "/backend/slider/getSliders";
pub const DEFAULT_OUTPUT_FILE: &str = "Pixelsports.m3u";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const LIVE_TV_LOGO: &str =
    "https://pixelsport.tv/static/media/PixelSportLogo.1182b5f687c239810f6d.png";
pub const LIVE_TV_ID: &str = "24.7.Dummy.us";

/// What VLC sends; the provider rejects requests that don't look like a player
pub const PLAYER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";
pub const PLAYER_ICY_METADATA: &str = "1";

const LOGO_HOST: &str = "http://drewlive24.duckdns.org:9000/Logos";

/// How an entry shows up in a player: EPG id, logo and group name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub tvg_id: String,
    pub logo: String,
    pub group: String,
}

impl Identity {
    pub fn new(
        tvg_id: impl Into<String>,
        logo: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            tvg_id: tvg_id.into(),
            logo: logo.into(),
            group: group.into(),
        }
    }
}

/// A case-insensitive substring key mapped to the identity it selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueRule {
    pub key: String,
    pub identity: Identity,
}

/// Headers sent on every fetch and repeated as `#EXTVLCOPT` lines in the playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerHeaders {
    pub user_agent: String,
    pub referer: String,
    pub icy_metadata: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub events_url: String,
    pub sliders_url: String,
    pub output: PathBuf,
    pub timeout: Duration,
    pub headers: PlayerHeaders,
    /// Tested in order, first match wins
    pub leagues: Vec<LeagueRule>,
    pub live_tv: Identity,
    pub fallback: Identity,
}

impl Config {
    /// Builds a configuration where endpoints and referer all hang off `base_url`
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();

        Self {
            events_url: format!("{base_url}{EVENTS_PATH}"),
            sliders_url: format!("{base_url}{SLIDERS_PATH}"),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            headers: PlayerHeaders {
                user_agent: PLAYER_USER_AGENT.to_string(),
                referer: format!("{base_url}/"),
                icy_metadata: PLAYER_ICY_METADATA.to_string(),
            },
            leagues: default_leagues(),
            live_tv: Identity::new(LIVE_TV_ID, LIVE_TV_LOGO, "Live TV"),
            fallback: Identity::new("Pixelsports.Dummy.us", LIVE_TV_LOGO, "Pixelsports"),
            base_url,
        }
    }

    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn default_leagues() -> Vec<LeagueRule> {
    [
        ("NFL", "NFL.Dummy.us", "Maxx.png", "NFL"),
        ("MLB", "MLB.Baseball.Dummy.us", "Baseball3.png", "MLB"),
        ("NHL", "NHL.Hockey.Dummy.us", "Hockey2.png", "NHL"),
        ("NBA", "NBA.Basketball.Dummy.us", "Basketball-2.png", "NBA"),
        ("NASCAR", "Racing.Dummy.us", "Motorsports2.png", "NASCAR"),
        ("UFC", "UFC.Fight.Pass.Dummy.us", "CombatSports2.png", "UFC"),
        ("SOCCER", "Soccer.Dummy.us", "Soccer.png", "Soccer"),
        ("BOXING", "PPV.EVENTS.Dummy.us", "Combat-Sports.png", "Boxing"),
    ]
    .into_iter()
    .map(|(key, tvg_id, logo, group)| LeagueRule {
        key: key.to_string(),
        identity: Identity::new(tvg_id, format!("{LOGO_HOST}/{logo}"), group),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_follow_base_url() {
        let config = Config::new("http://127.0.0.1:8080/");

        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(
            config.events_url,
            "http://127.0.0.1:8080/backend/liveTV/events"
        );
        assert_eq!(
            config.sliders_url,
            "http://127.0.0.1:8080/backend/slider/getSliders"
        );
        assert_eq!(config.headers.referer, "http://127.0.0.1:8080/");
    }

    #[test]
    fn default_targets_pixelsport() {
        let config = Config::default();

        assert_eq!(config.headers.referer, "https://pixelsport.tv/");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.output, PathBuf::from("Pixelsports.m3u"));
        assert_eq!(config.leagues.len(), 8);
        assert_eq!(config.leagues[0].key, "NFL");
        assert_eq!(config.leagues[7].identity.group, "Boxing");
    }
}
