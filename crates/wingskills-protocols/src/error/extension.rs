//! Extension-related errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("Extension not found: {0}")]
    NotFound(String),

    #[error("Extension already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Extension initialization failed: {0}")]
    InitializationFailed(String),

    #[error("Invalid configuration for {extension}: {message}")]
    InvalidConfig { extension: String, message: String },

    #[error("Extension shutdown failed: {0}")]
    ShutdownFailed(String),

    #[error("{0}")]
    Custom(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = ExtensionError::NotFound("api_request".to_string());
        let display = err.to_string();
        assert!(display.contains("not found"));
        assert!(display.contains("api_request"));
    }

    #[test]
    fn test_already_registered_error() {
        let err = ExtensionError::AlreadyRegistered("send_api_request".to_string());
        let display = err.to_string();
        assert!(display.contains("already registered"));
        assert!(display.contains("send_api_request"));
    }

    #[test]
    fn test_initialization_failed_error() {
        let err = ExtensionError::InitializationFailed("request_timeout must be > 0".to_string());
        let display = err.to_string();
        assert!(display.contains("initialization failed"));
        assert!(display.contains("request_timeout"));
    }

    #[test]
    fn test_invalid_config_error() {
        let err = ExtensionError::InvalidConfig {
            extension: "api_request".to_string(),
            message: "invalid type: string \"yes\", expected a boolean".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("api_request"));
        assert!(display.contains("expected a boolean"));
    }

    #[test]
    fn test_custom_error() {
        let err = ExtensionError::Custom("custom error message".to_string());
        assert_eq!(err.to_string(), "custom error message");
    }

    #[test]
    fn test_all_error_variants() {
        let errors: Vec<ExtensionError> = vec![
            ExtensionError::NotFound("a".to_string()),
            ExtensionError::AlreadyRegistered("b".to_string()),
            ExtensionError::InitializationFailed("c".to_string()),
            ExtensionError::InvalidConfig {
                extension: "d".to_string(),
                message: "e".to_string(),
            },
            ExtensionError::ShutdownFailed("f".to_string()),
            ExtensionError::Custom("g".to_string()),
        ];

        for err in errors {
            let display = err.to_string();
            assert!(!display.is_empty());
        }
    }
}
