use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    error::FetchError,
    pixelsport::structs::{RawEvent, RawSlider, take_list},
};

/// Fetches `url` and decodes the body as JSON, whatever its shape
///
/// # Errors
/// Errors on connection failure, timeout, non-2xx status or a body that
/// isn't JSON
#[instrument(skip(client))]
pub async fn fetch_json(client: &reqwest::Client, url: &str) -> Result<Value, FetchError> {
    let request_error = |source| FetchError::Request {
        url: url.to_string(),
        source,
    };

    let res = client.get(url).send().await.map_err(request_error)?;
    let status = res.status();
    debug!("Got {status}");

    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = res.bytes().await.map_err(request_error)?;
    serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}

/// Fetches the scheduled events list
///
/// # Errors
/// See [`fetch_json`]
pub async fn get_events(client: &reqwest::Client, url: &str) -> Result<Vec<RawEvent>, FetchError> {
    let document = fetch_json(client, url).await?;
    Ok(take_list(document, "events"))
}

/// Fetches the 24/7 live channels ("sliders")
///
/// # Errors
/// See [`fetch_json`]
pub async fn get_sliders(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<RawSlider>, FetchError> {
    let document = fetch_json(client, url).await?;
    Ok(take_list(document, "data"))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    use super::*;
    use crate::{
        config::{Config, PLAYER_USER_AGENT},
        util::init_http_client,
    };

    fn client_for(server: &MockServer, timeout: Duration) -> reqwest::Client {
        let config = Config::new(&server.uri()).with_timeout(timeout);
        init_http_client(&config.headers, config.timeout).unwrap()
    }

    #[tokio::test]
    async fn sends_player_headers() {
        let server = MockServer::start().await;
        let referer = format!("{}/", server.uri());
        let body = json!({ "events": [] });
        Mock::given(method("GET"))
            .and(path("/backend/liveTV/events"))
            .and(header("user-agent", PLAYER_USER_AGENT))
            .and(header("referer", referer.as_str()))
            .and(header("accept", "*/*"))
            .and(header("connection", "close"))
            .and(header("icy-metadata", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(10));
        let url = format!("{}/backend/liveTV/events", server.uri());

        let events = get_events(&client, &url).await.unwrap();
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn returns_any_json_shape() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, "two"])))
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(10));
        let value = fetch_json(&client, &server.uri()).await.unwrap();
        assert_eq!(value, json!([1, "two"]));

        let sliders = get_sliders(&client, &server.uri()).await.unwrap();
        assert!(sliders.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(10));
        let err = fetch_json(&client, &server.uri()).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status, .. } if status == 503));
    }

    #[tokio::test]
    async fn malformed_json_is_an_error() {
        let server = MockServer::start().await;
        let blocked = ResponseTemplate::new(200).set_body_string("<html>");
        Mock::given(method("GET"))
            .respond_with(blocked)
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(10));
        let err = fetch_json(&client, &server.uri()).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[tokio::test]
    async fn slow_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "data": [] }))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_millis(200));
        let err = fetch_json(&client, &server.uri()).await.unwrap_err();
        assert!(err.is_timeout());
    }
}
