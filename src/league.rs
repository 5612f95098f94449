use crate::config::{Identity, LeagueRule};

/// Picks the identity for a league label.
///
/// Plain case-insensitive substring search in table order. A label holding
/// two keys (say "NBA vs NFL crossover") only ever gets the earlier rule.
#[must_use]
pub fn classify_league<'a>(
    label: &str,
    leagues: &'a [LeagueRule],
    fallback: &'a Identity,
) -> &'a Identity {
    let label = label.to_lowercase();

    leagues
        .iter()
        .find(|rule| label.contains(&rule.key.to_lowercase()))
        .map_or(fallback, |rule| &rule.identity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn classify(label: &str) -> Identity {
        let config = Config::default();
        classify_league(label, &config.leagues, &config.fallback).clone()
    }

    #[test]
    fn matches_hockey() {
        let identity = classify("NHL Western Conference");
        assert_eq!(identity.tvg_id, "NHL.Hockey.Dummy.us");
        assert_eq!(identity.group, "NHL");
    }

    #[test]
    fn unknown_falls_back() {
        let identity = classify("Unknown League");
        assert_eq!(identity.tvg_id, "Pixelsports.Dummy.us");
        assert_eq!(identity.group, "Pixelsports");
        assert_eq!(identity.logo, crate::config::LIVE_TV_LOGO);
    }

    #[test]
    fn case_insensitive_substring() {
        assert_eq!(classify("nascar Cup Series").group, "NASCAR");
        assert_eq!(classify("English Premier Soccer").group, "Soccer");
        // Substring, not word: "SNFL" still holds "NFL"
        assert_eq!(classify("SNFL").group, "NFL");
    }

    #[test]
    fn first_rule_in_table_order_wins() {
        assert_eq!(classify("NBA and NFL crossover").group, "NFL");
        assert_eq!(classify("UFC Boxing night").group, "UFC");
    }
}
