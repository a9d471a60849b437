//! Tool execution result types.

use serde::{Deserialize, Serialize};

/// Result of a tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Output content handed back to the LLM.
    pub content: String,

    /// Acknowledgement the assistant may speak before the LLM answers.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub instant_response: String,

    /// Error message if execution failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolResult {
    /// Create a successful result with text content.
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            success: true,
            content: content.into(),
            instant_response: String::new(),
            error: None,
        }
    }

    /// Create an error result.
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            content: String::new(),
            instant_response: String::new(),
            error: Some(error.into()),
        }
    }

    /// Set the instant response.
    pub fn with_instant_response(mut self, instant_response: impl Into<String>) -> Self {
        self.instant_response = instant_response.into();
        self
    }

    /// Split into the `(function_response, instant_response)` pair a host
    /// returns to its LLM loop. Failed results answer with their error text.
    pub fn into_responses(self) -> (String, String) {
        let function_response = if self.success {
            self.content
        } else {
            self.error.unwrap_or(self.content)
        };
        (function_response, self.instant_response)
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
