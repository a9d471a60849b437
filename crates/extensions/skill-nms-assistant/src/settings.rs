//! Custom properties of the NMS assistant skill.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use wingskills_config::{ConfigValidator, ValidationError, ValidationResult};

pub const DEFAULT_BASE_URL: &str = "https://api.nmsassistant.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NmsSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for NmsSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl NmsSettings {
    pub const KNOWN_KEYS: &'static [&'static str] = &["base_url", "request_timeout"];

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn validate(&self, path: &str) -> ValidationResult {
        let mut result = ValidationResult::default();

        match Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => result.add_error(ValidationError::new(
                format!("{}.base_url", path),
                format!("Unsupported scheme '{}'", url.scheme()),
            )),
            Err(e) => result.add_error(ValidationError::new(
                format!("{}.base_url", path),
                e.to_string(),
            )),
        }
        if self.request_timeout == 0 {
            result.add_error(ValidationError::new(
                format!("{}.request_timeout", path),
                "Timeout must be at least 1 second",
            ));
        }

        result
    }

    pub fn check_unknown_keys(path: &str, raw: &serde_json::Value, result: &mut ValidationResult) {
        ConfigValidator::check_unknown_keys(path, raw, Self::KNOWN_KEYS, result);
    }
}
