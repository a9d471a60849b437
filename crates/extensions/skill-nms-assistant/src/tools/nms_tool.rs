//! Tool wrapper around one NMS Assistant endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use wingskills_protocols::error::ToolError;
use wingskills_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};
use wingskills_protocols::Diagnostics;

use super::endpoint::NmsEndpoint;
use crate::client::NmsClient;
use crate::error::NmsError;
use crate::recipes::with_name_key;

/// Response given to the LLM whenever the API call does not succeed.
pub const OPERATION_FAILED: &str = "Operation failed.";

pub struct NmsTool {
    endpoint: NmsEndpoint,
    definition: ToolDefinition,
    client: Arc<NmsClient>,
    diagnostics: Diagnostics,
}

impl NmsTool {
    pub fn new(endpoint: NmsEndpoint, client: Arc<NmsClient>, diagnostics: Diagnostics) -> Self {
        let mut definition =
            ToolDefinition::new(endpoint.tool_id(), endpoint.tool_id(), endpoint.description())
                .with_extension_id(crate::extension::EXTENSION_ID);
        if let Some(schema) = endpoint.parameters_schema() {
            definition = definition.with_parameters_schema(schema);
        }

        Self {
            endpoint,
            definition,
            client,
            diagnostics,
        }
    }

    pub fn endpoint(&self) -> NmsEndpoint {
        self.endpoint
    }

    async fn fetch(&self, params: &Value) -> Result<String, NmsError> {
        let mut segments: Vec<String> = self
            .endpoint
            .path_prefix()
            .iter()
            .map(|s| s.to_string())
            .collect();
        for (name, _) in self.endpoint.parameters() {
            segments.push(path_argument(params, name)?);
        }
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

        let data = self.client.get_json(&segments).await?;
        if self.endpoint.returns_recipes() {
            Ok(with_name_key(&self.client, &data).await)
        } else {
            Ok(data.to_string())
        }
    }
}

fn path_argument(params: &Value, name: &str) -> Result<String, NmsError> {
    match params.get(name) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(NmsError::MissingParameter(name.to_string())),
    }
}

#[async_trait]
impl Tool for NmsTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, params: Value, _ctx: ToolContext) -> Result<ToolResult, ToolError> {
        let result = match self.fetch(&params).await {
            Ok(text) => ToolResult::success(text),
            Err(e) => {
                tracing::debug!("{} failed: {}", self.endpoint.tool_id(), e);
                ToolResult::error(OPERATION_FAILED)
            }
        };

        let response = if result.success {
            result.content.as_str()
        } else {
            OPERATION_FAILED
        };
        self.diagnostics.info(format_args!(
            "Executed {} with parameters {}. Result: {}",
            self.endpoint.tool_id(),
            params,
            response
        ));

        Ok(result)
    }
}

#[cfg(test)]
#[path = "nms_tool_tests.rs"]
mod tests;
