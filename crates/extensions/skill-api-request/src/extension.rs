//! API request skill definition.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use wingskills_config::ValidationResult;
use wingskills_protocols::error::ExtensionError;
use wingskills_protocols::extension::{Extension, ExtensionContext, ExtensionManifest, Provides};
use wingskills_protocols::types::Version;

use crate::settings::ApiRequestSettings;
use crate::tools::{SendApiRequestTool, TOOL_ID};

pub const EXTENSION_ID: &str = "api_request";

const CONFIG_PATH: &str = "skills.custom.api_request";

/// API request skill.
pub struct ApiRequestExtension {
    manifest: ExtensionManifest,
    settings: Option<ApiRequestSettings>,
}

impl ApiRequestExtension {
    pub fn new() -> Self {
        let manifest = ExtensionManifest::new(EXTENSION_ID, "API Request", Version::new(0, 1, 0))
            .with_description("Send HTTP requests to arbitrary APIs and return the response")
            .with_config_schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "use_default_headers": {"type": "boolean", "default": false},
                    "max_retries": {"type": "integer", "minimum": 0, "default": 1},
                    "request_timeout": {"type": "number", "exclusiveMinimum": 0, "default": 5},
                    "retry_delay": {"type": "number", "minimum": 0, "default": 5},
                    "retry_failed_requests": {"type": "boolean", "default": false}
                }
            }));
        let manifest = ExtensionManifest {
            provides: Provides {
                tools: vec![TOOL_ID.to_string()],
            },
            ..manifest
        };

        Self {
            manifest,
            settings: None,
        }
    }

    /// Settings in effect, available once initialized.
    pub fn settings(&self) -> Option<&ApiRequestSettings> {
        self.settings.as_ref()
    }
}

impl Default for ApiRequestExtension {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Extension for ApiRequestExtension {
    fn manifest(&self) -> &ExtensionManifest {
        &self.manifest
    }

    async fn initialize(&mut self, ctx: ExtensionContext) -> Result<(), ExtensionError> {
        let mut validation = ValidationResult::default();
        ApiRequestSettings::check_unknown_keys(CONFIG_PATH, &ctx.config, &mut validation);

        let settings: ApiRequestSettings = ctx.settings_as(EXTENSION_ID)?;
        validation.merge(settings.validate(CONFIG_PATH));

        for warning in &validation.warnings {
            warn!("{}", warning);
        }
        if !validation.is_valid() {
            return Err(ExtensionError::InitializationFailed(validation.error_summary()));
        }

        let tool = SendApiRequestTool::new(settings.clone(), ctx.diagnostics(EXTENSION_ID))
            .map_err(|e| ExtensionError::InitializationFailed(e.to_string()))?;
        ctx.tool_registry.register_tool(Arc::new(tool))?;

        info!(
            use_default_headers = settings.use_default_headers,
            request_timeout = settings.request_timeout,
            retry_failed_requests = settings.retry_failed_requests,
            "API request skill ready"
        );
        self.settings = Some(settings);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
