//! NMS Assistant API errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NmsError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status {0}")]
    Status(u16),

    #[error("Invalid JSON response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Empty response")]
    Empty,

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Missing parameter: {0}")]
    MissingParameter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(NmsError::Status(503).to_string(), "Unexpected status 503");
        assert_eq!(NmsError::Empty.to_string(), "Empty response");
        assert_eq!(
            NmsError::MissingParameter("appId".to_string()).to_string(),
            "Missing parameter: appId"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err: NmsError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, NmsError::InvalidJson(_)));
    }
}
