use std::time::Duration;

use reqwest::header::{ACCEPT, CONNECTION, HeaderMap, HeaderValue, REFERER, USER_AGENT};

use crate::{config::PlayerHeaders, error::RunError};

/// Builds the client every feed request goes through.
///
/// It poses as a media player: the provider turns away requests that
/// don't carry these headers.
///
/// # Errors
/// Errors when a configured header is not a valid header value or when the
/// TLS backend cannot be initialised
pub fn init_http_client(
    player: &PlayerHeaders,
    timeout: Duration,
) -> Result<reqwest::Client, RunError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_str(&player.user_agent)?);
    headers.insert(REFERER, HeaderValue::from_str(&player.referer)?);
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(CONNECTION, HeaderValue::from_static("close"));
    headers.insert("Icy-MetaData", HeaderValue::from_str(&player.icy_metadata)?);

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .map_err(RunError::Client)
}
