//! Extension context for initialization.

use std::sync::Arc;

use super::ToolRegistryAccess;
use crate::diagnostics::{DiagnosticSink, Diagnostics};
use crate::error::ExtensionError;
use crate::types::HostSettings;

/// Context passed to extensions during initialization.
#[derive(Clone)]
pub struct ExtensionContext {
    /// Custom properties configured for this skill.
    pub config: serde_json::Value,

    /// Host-wide settings.
    pub settings: HostSettings,

    /// Registry for registering tools.
    pub tool_registry: Arc<dyn ToolRegistryAccess>,

    /// Where verbose diagnostics go.
    pub diagnostic_sink: Arc<dyn DiagnosticSink>,
}

impl ExtensionContext {
    /// Create a new extension context.
    pub fn new(
        config: serde_json::Value,
        settings: HostSettings,
        tool_registry: Arc<dyn ToolRegistryAccess>,
        diagnostic_sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            config,
            settings,
            tool_registry,
            diagnostic_sink,
        }
    }

    /// Get a configuration value.
    pub fn get_config<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.config
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Deserialize the whole custom property block into `T`.
    ///
    /// A missing block (`null`) deserializes from an empty object so that
    /// settings with defaults need no configuration at all.
    pub fn settings_as<T: serde::de::DeserializeOwned>(
        &self,
        extension_id: &str,
    ) -> Result<T, ExtensionError> {
        let value = if self.config.is_null() {
            serde_json::Value::Object(serde_json::Map::new())
        } else {
            self.config.clone()
        };
        serde_json::from_value(value).map_err(|e| ExtensionError::InvalidConfig {
            extension: extension_id.to_string(),
            message: e.to_string(),
        })
    }

    /// Diagnostics handle for `source`, enabled when the host is in debug mode.
    pub fn diagnostics(&self, source: &str) -> Diagnostics {
        Diagnostics::new(self.settings.debug_mode, self.diagnostic_sink.clone())
            .with_source(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;
    use crate::tool::Tool;

    struct NoopRegistry;

    impl ToolRegistryAccess for NoopRegistry {
        fn register_tool(&self, _tool: Arc<dyn Tool>) -> Result<(), ExtensionError> {
            Ok(())
        }

        fn unregister_tool(&self, _tool_id: &str) -> Result<(), ExtensionError> {
            Ok(())
        }
    }

    #[derive(Debug, serde::Deserialize)]
    struct SampleSettings {
        #[serde(default)]
        enabled: bool,
        #[serde(default = "default_limit")]
        limit: u32,
    }

    fn default_limit() -> u32 {
        7
    }

    fn context(config: serde_json::Value, settings: HostSettings) -> (ExtensionContext, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let ctx = ExtensionContext::new(config, settings, Arc::new(NoopRegistry), sink.clone());
        (ctx, sink)
    }

    #[test]
    fn test_get_config() {
        let (ctx, _) = context(serde_json::json!({"limit": 3}), HostSettings::default());
        assert_eq!(ctx.get_config::<u32>("limit"), Some(3));
        assert_eq!(ctx.get_config::<u32>("missing"), None);
        assert_eq!(ctx.get_config::<bool>("limit"), None);
    }

    #[test]
    fn test_settings_as_null_uses_defaults() {
        let (ctx, _) = context(serde_json::Value::Null, HostSettings::default());
        let settings: SampleSettings = ctx.settings_as("sample").unwrap();
        assert!(!settings.enabled);
        assert_eq!(settings.limit, 7);
    }

    #[test]
    fn test_settings_as_invalid_type() {
        let (ctx, _) = context(serde_json::json!({"enabled": "yes"}), HostSettings::default());
        let err = ctx.settings_as::<SampleSettings>("sample").unwrap_err();
        match err {
            ExtensionError::InvalidConfig { extension, .. } => assert_eq!(extension, "sample"),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_diagnostics_follow_debug_mode() {
        let (ctx, sink) = context(serde_json::Value::Null, HostSettings::debug());
        let diag = ctx.diagnostics("sample");
        assert!(diag.is_enabled());
        assert_eq!(diag.source(), "sample");
        diag.info("hello");
        assert!(sink.contains("hello"));

        let (ctx, sink) = context(serde_json::Value::Null, HostSettings::default());
        ctx.diagnostics("sample").info("hello");
        assert!(sink.is_empty());
    }
}
