//! Tool execution errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Tool execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Parameter validation failed: {0}")]
    ValidationFailed(String),

    #[error("Tool execution timed out after {0} seconds")]
    Timeout(u64),

    #[error("Tool execution was cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error_not_found() {
        let err = ToolError::NotFound("get_news".to_string());
        assert!(err.to_string().contains("Tool not found"));
        assert!(err.to_string().contains("get_news"));
    }

    #[test]
    fn test_tool_error_execution_failed() {
        let err = ToolError::ExecutionFailed("client build failed".to_string());
        assert!(err.to_string().contains("execution failed"));
    }

    #[test]
    fn test_tool_error_invalid_parameters() {
        let err = ToolError::InvalidParameters("missing field".to_string());
        assert!(err.to_string().contains("Invalid parameters"));
    }

    #[test]
    fn test_tool_error_validation_failed() {
        let err = ToolError::ValidationFailed("type mismatch".to_string());
        assert!(err.to_string().contains("validation failed"));
    }

    #[test]
    fn test_tool_error_timeout() {
        let err = ToolError::Timeout(5);
        assert!(err.to_string().contains("timed out"));
        assert!(err.to_string().contains('5'));
    }

    #[test]
    fn test_tool_error_cancelled() {
        let err = ToolError::Cancelled;
        assert!(err.to_string().contains("cancelled"));
    }

    #[test]
    fn test_tool_error_debug() {
        let err = ToolError::NotFound("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("NotFound"));
    }
}
