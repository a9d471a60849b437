//! The `send_api_request` tool.

use std::time::Instant;

use async_trait::async_trait;
use serde_json::Value;

use wingskills_protocols::error::ToolError;
use wingskills_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};
use wingskills_protocols::types::RiskLevel;
use wingskills_protocols::Diagnostics;

use crate::body::serialize_body;
use crate::executor::{HttpExecutor, PreparedRequest, RequestFailure};
use crate::normalize::{normalize, required_str};
use crate::retry::ApiRequestError;
use crate::settings::ApiRequestSettings;

pub const TOOL_ID: &str = "send_api_request";

/// Tool letting the LLM send an HTTP request and read the response.
pub struct SendApiRequestTool {
    definition: ToolDefinition,
    settings: ApiRequestSettings,
    executor: HttpExecutor,
    diagnostics: Diagnostics,
}

impl SendApiRequestTool {
    /// Create the tool. Fails only when the HTTP client cannot be built.
    pub fn new(settings: ApiRequestSettings, diagnostics: Diagnostics) -> Result<Self, ToolError> {
        let executor = HttpExecutor::new(settings.timeout())
            .map_err(|e| ToolError::ExecutionFailed(format!("Failed to create HTTP client: {}", e)))?;

        let definition = ToolDefinition::new(
            TOOL_ID,
            "Send API Request",
            "Send an API request with the specified method, headers, parameters, and body. Return the response back.",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "url": {"type": "string", "description": "The URL for the API request."},
                "method": {"type": "string", "description": "The HTTP method (GET, POST, PUT, PATCH, DELETE, etc.)."},
                "headers": {"type": "object", "description": "Headers for the API request."},
                "params": {"type": "object", "description": "URL parameters for the API request."},
                "data": {"type": "object", "description": "Body or payload for the API request."}
            },
            "required": ["url", "method"]
        }))
        .with_risk_level(RiskLevel::Medium)
        .with_extension_id(crate::extension::EXTENSION_ID);

        Ok(Self {
            definition,
            settings,
            executor,
            diagnostics,
        })
    }

    pub fn settings(&self) -> &ApiRequestSettings {
        &self.settings
    }

    /// Normalize, serialize and prepare one request.
    fn prepare(&self, params: &Value) -> Result<PreparedRequest, RequestFailure> {
        let Some(parameters) = params.as_object() else {
            return Err(RequestFailure::Unexpected(
                "parameters must be an object".to_string(),
            ));
        };

        let normalized = normalize(parameters, self.settings.use_default_headers, &self.diagnostics);
        let payload = serialize_body(&normalized.body, &self.diagnostics);

        let method = required_str(parameters, "method")?;
        let url = required_str(parameters, "url")?;
        PreparedRequest::new(method, url, normalized, payload)
    }

    /// Run the request, retrying status and transport failures when enabled.
    async fn send(&self, request: &PreparedRequest) -> Result<String, RequestFailure> {
        let mut retry_count = 0;
        loop {
            let failure = match self.executor.execute(request).await {
                Ok(text) => return Ok(text),
                Err(failure) => failure,
            };
            self.diagnostics
                .info(format_args!("Error with api request: {}.", failure.reason()));

            if !self.settings.retry_failed_requests {
                return Err(failure);
            }
            let Some(mut envelope) = ApiRequestError::from_failure(
                &failure,
                self.settings.max_retries,
                self.settings.retry_delay(),
            ) else {
                return Err(failure);
            };

            envelope = envelope.with_retry_count(retry_count);
            self.diagnostics
                .error(format_args!("Error occurred during API request: {}", envelope));
            envelope.log_error();

            if !envelope.retry_request().await {
                return Err(failure);
            }
            retry_count = envelope.retry_count;
        }
    }
}

#[async_trait]
impl Tool for SendApiRequestTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    /// Never returns `Err`: every failure becomes the response text.
    async fn execute(&self, params: Value, ctx: ToolContext) -> Result<ToolResult, ToolError> {
        let started = Instant::now();
        self.diagnostics.info(format_args!(
            "Calling API with the following parameters: {}",
            params
        ));

        let outcome = match self.prepare(&params) {
            Ok(request) => self.send(&request).await,
            Err(failure) => {
                self.diagnostics
                    .info(format_args!("Error with api request: {}.", failure.reason()));
                Err(failure)
            }
        };

        self.diagnostics.info(format_args!(
            "Executed {} in {:.2} seconds",
            TOOL_ID,
            started.elapsed().as_secs_f64()
        ));

        let result = match outcome {
            Ok(text) => {
                self.diagnostics
                    .info(format_args!("Response from API call: {}", text));
                ToolResult::success(text)
            }
            Err(failure) => {
                tracing::debug!(
                    correlation_id = %ctx.correlation_id,
                    "send_api_request failed: {}",
                    failure.reason()
                );
                let text = failure.to_string();
                self.diagnostics
                    .info(format_args!("Response from API call: {}", text));
                ToolResult::error(text)
            }
        };

        Ok(result)
    }
}

#[cfg(test)]
#[path = "send_api_request_tests.rs"]
mod tests;
