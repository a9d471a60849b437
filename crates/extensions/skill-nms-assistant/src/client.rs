//! HTTP client for the NMS Assistant API.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::NmsError;

const UNKNOWN_ITEM: &str = "Unknown";

/// Client for a fixed API base URL.
pub struct NmsClient {
    client: Client,
    base_url: Url,
}

impl NmsClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, NmsError> {
        let base_url =
            Url::parse(base_url).map_err(|e| NmsError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(NmsError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("wingskills/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Endpoint URL with each segment percent-encoded.
    pub fn endpoint_url(&self, segments: &[&str]) -> Result<Url, NmsError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| NmsError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET an endpoint and parse its JSON body.
    ///
    /// Only a 200 with a non-empty JSON document counts as success.
    pub async fn get_json(&self, segments: &[&str]) -> Result<Value, NmsError> {
        let url = self.endpoint_url(segments)?;
        debug!(url = %url, "NMS Assistant request");

        let response = self.client.get(url).send().await?;
        if response.status() != StatusCode::OK {
            return Err(NmsError::Status(response.status().as_u16()));
        }

        let text = response.text().await?;
        let value: Value = serde_json::from_str(&text)?;
        if is_empty(&value) {
            return Err(NmsError::Empty);
        }
        Ok(value)
    }

    /// English display name of an item, `Unknown` when it cannot be fetched.
    pub async fn item_name(&self, app_id: &str) -> String {
        match self.get_json(&["ItemInfo", app_id, "en"]).await {
            Ok(item) => item
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_ITEM)
                .to_string(),
            Err(e) => {
                debug!("Item name lookup for {} failed: {}", app_id, e);
                UNKNOWN_ITEM.to_string()
            }
        }
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
