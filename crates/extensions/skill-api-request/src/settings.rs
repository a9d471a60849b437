//! Custom properties of the API request skill.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use wingskills_config::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};

/// Settings read once at initialization from `[skills.custom.api_request]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRequestSettings {
    /// Merge [`crate::DEFAULT_HEADERS`] into every request.
    #[serde(default)]
    pub use_default_headers: bool,

    /// Retries allowed per invocation when `retry_failed_requests` is set.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Request timeout in seconds, covering connect, response and body read.
    #[serde(default = "default_request_timeout")]
    pub request_timeout: f64,

    /// Base backoff delay in seconds.
    #[serde(default = "default_retry_delay")]
    pub retry_delay: f64,

    /// Retry HTTP status and transport failures with backoff.
    #[serde(default)]
    pub retry_failed_requests: bool,
}

fn default_max_retries() -> u32 {
    1
}

fn default_request_timeout() -> f64 {
    5.0
}

fn default_retry_delay() -> f64 {
    5.0
}

impl Default for ApiRequestSettings {
    fn default() -> Self {
        Self {
            use_default_headers: false,
            max_retries: default_max_retries(),
            request_timeout: default_request_timeout(),
            retry_delay: default_retry_delay(),
            retry_failed_requests: false,
        }
    }
}

impl ApiRequestSettings {
    /// Keys this skill reads from its custom property block.
    pub const KNOWN_KEYS: &'static [&'static str] = &[
        "use_default_headers",
        "max_retries",
        "request_timeout",
        "retry_delay",
        "retry_failed_requests",
    ];

    /// Request timeout, zero when the configured value is unusable.
    pub fn timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.request_timeout).unwrap_or_default()
    }

    /// Base backoff delay, zero when the configured value is unusable.
    pub fn retry_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.retry_delay).unwrap_or_default()
    }

    /// Check the values for problems that deserialization cannot catch.
    pub fn validate(&self, path: &str) -> ValidationResult {
        let mut result = ValidationResult::default();

        if !self.request_timeout.is_finite() || self.request_timeout <= 0.0 {
            result.add_error(ValidationError::new(
                format!("{}.request_timeout", path),
                "Timeout must be a positive number of seconds",
            ));
        }
        if !self.retry_delay.is_finite() || self.retry_delay < 0.0 {
            result.add_error(ValidationError::new(
                format!("{}.retry_delay", path),
                "Retry delay must be a non-negative number of seconds",
            ));
        } else if self.retry_delay > 60.0 {
            result.add_warning(ValidationWarning::new(
                format!("{}.retry_delay", path),
                "Retry delay above 60 seconds will stall the conversation",
            ));
        }
        if self.max_retries > 10 {
            result.add_warning(ValidationWarning::new(
                format!("{}.max_retries", path),
                "More than 10 retries is unusual",
            ));
        }

        result
    }

    /// Warn about keys in the raw property block this skill ignores.
    pub fn check_unknown_keys(path: &str, raw: &serde_json::Value, result: &mut ValidationResult) {
        ConfigValidator::check_unknown_keys(path, raw, Self::KNOWN_KEYS, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ApiRequestSettings::default();
        assert!(!settings.use_default_headers);
        assert_eq!(settings.max_retries, 1);
        assert_eq!(settings.request_timeout, 5.0);
        assert_eq!(settings.retry_delay, 5.0);
        assert!(!settings.retry_failed_requests);
        assert_eq!(settings.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let settings: ApiRequestSettings = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(settings, ApiRequestSettings::default());
    }

    #[test]
    fn test_deserialize_integer_retry_delay() {
        let settings: ApiRequestSettings = serde_json::from_value(serde_json::json!({
            "use_default_headers": true,
            "max_retries": 3,
            "request_timeout": 10,
            "retry_delay": 2
        }))
        .unwrap();
        assert!(settings.use_default_headers);
        assert_eq!(settings.max_retries, 3);
        assert_eq!(settings.retry_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_deserialize_wrong_type() {
        let result: Result<ApiRequestSettings, _> =
            serde_json::from_value(serde_json::json!({"request_timeout": "soon"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_default_is_clean() {
        let result = ApiRequestSettings::default().validate("api_request");
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let settings = ApiRequestSettings {
            request_timeout: 0.0,
            ..Default::default()
        };
        let result = settings.validate("api_request");
        assert!(!result.is_valid());
        assert_eq!(result.errors[0].path, "api_request.request_timeout");
    }

    #[test]
    fn test_fractional_timeout() {
        let settings: ApiRequestSettings =
            serde_json::from_value(serde_json::json!({"request_timeout": 2.5})).unwrap();
        assert!(settings.validate("api_request").is_valid());
        assert_eq!(settings.timeout(), Duration::from_millis(2500));

        let settings = ApiRequestSettings {
            request_timeout: -2.0,
            ..Default::default()
        };
        assert!(!settings.validate("api_request").is_valid());
        assert_eq!(settings.timeout(), Duration::ZERO);
    }

    #[test]
    fn test_validate_negative_delay() {
        let settings = ApiRequestSettings {
            retry_delay: -1.0,
            ..Default::default()
        };
        assert!(!settings.validate("api_request").is_valid());
        assert_eq!(settings.retry_delay(), Duration::ZERO);
    }

    #[test]
    fn test_validate_warnings() {
        let settings = ApiRequestSettings {
            max_retries: 11,
            retry_delay: 61.0,
            ..Default::default()
        };
        let result = settings.validate("api_request");
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_check_unknown_keys() {
        let mut result = ValidationResult::default();
        ApiRequestSettings::check_unknown_keys(
            "api_request",
            &serde_json::json!({"max_retries": 2, "max_retry": 2}),
            &mut result,
        );
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].path, "api_request.max_retry");
    }
}
