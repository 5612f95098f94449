use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

/// One entry of the `events` list
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawEvent {
    #[serde(default, deserialize_with = "lenient")]
    pub match_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub competitors1_logo: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub channel: Option<EventChannel>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventChannel {
    #[serde(rename = "TVCategory", default, deserialize_with = "lenient")]
    pub tv_category: Option<TvCategory>,
    #[serde(rename = "server1URL", default, deserialize_with = "lenient")]
    pub server1_url: Option<String>,
    #[serde(rename = "server2URL", default, deserialize_with = "lenient")]
    pub server2_url: Option<String>,
    #[serde(rename = "server3URL", default, deserialize_with = "lenient")]
    pub server3_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TvCategory {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

/// One entry of the sliders `data` list, a 24/7 live channel
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawSlider {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(rename = "liveTV", default, deserialize_with = "lenient")]
    pub live_tv: Option<LiveTv>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LiveTv {
    #[serde(rename = "liveserver1URL", default, deserialize_with = "lenient")]
    pub server1_url: Option<String>,
    #[serde(rename = "liveserver2URL", default, deserialize_with = "lenient")]
    pub server2_url: Option<String>,
    #[serde(rename = "liveserver3URL", default, deserialize_with = "lenient")]
    pub server3_url: Option<String>,
}

/// Server URL slots in priority order
pub trait ServerSlots {
    fn server_urls(&self) -> [Option<&str>; 3];
}

impl ServerSlots for EventChannel {
    fn server_urls(&self) -> [Option<&str>; 3] {
        [
            self.server1_url.as_deref(),
            self.server2_url.as_deref(),
            self.server3_url.as_deref(),
        ]
    }
}

impl ServerSlots for LiveTv {
    fn server_urls(&self) -> [Option<&str>; 3] {
        [
            self.server1_url.as_deref(),
            self.server2_url.as_deref(),
            self.server3_url.as_deref(),
        ]
    }
}

/// A value of the wrong JSON type is treated the same as a missing one
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Pulls `field` out of a feed document as a list of records.
///
/// A document that is not an object, or has no such list, yields nothing.
/// Elements that aren't objects decode to an all-empty record.
pub fn take_list<T>(mut document: Value, field: &str) -> Vec<T>
where
    T: DeserializeOwned + Default,
{
    let Some(Value::Array(items)) = document.get_mut(field).map(Value::take) else {
        return Vec::new();
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect()
}
