//! NMS assistant skill definition.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use wingskills_config::ValidationResult;
use wingskills_protocols::error::ExtensionError;
use wingskills_protocols::extension::{Extension, ExtensionContext, ExtensionManifest, Provides};
use wingskills_protocols::types::Version;

use crate::client::NmsClient;
use crate::settings::NmsSettings;
use crate::tools::{NmsEndpoint, NmsTool};

pub const EXTENSION_ID: &str = "nms_assistant";

const CONFIG_PATH: &str = "skills.custom.nms_assistant";

/// No Man's Sky assistant skill.
pub struct NmsAssistantExtension {
    manifest: ExtensionManifest,
}

impl NmsAssistantExtension {
    pub fn new() -> Self {
        let mut manifest =
            ExtensionManifest::new(EXTENSION_ID, "NMS Assistant", Version::new(0, 1, 0))
                .with_description("Game news, expeditions, items and recipes for No Man's Sky");
        manifest.provides = Provides {
            tools: NmsEndpoint::ALL
                .iter()
                .map(|endpoint| endpoint.tool_id().to_string())
                .collect(),
        };

        Self { manifest }
    }
}

impl Default for NmsAssistantExtension {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Extension for NmsAssistantExtension {
    fn manifest(&self) -> &ExtensionManifest {
        &self.manifest
    }

    async fn initialize(&mut self, ctx: ExtensionContext) -> Result<(), ExtensionError> {
        let mut validation = ValidationResult::default();
        NmsSettings::check_unknown_keys(CONFIG_PATH, &ctx.config, &mut validation);

        let settings: NmsSettings = ctx.settings_as(EXTENSION_ID)?;
        validation.merge(settings.validate(CONFIG_PATH));

        for warning in &validation.warnings {
            warn!("{}", warning);
        }
        if !validation.is_valid() {
            return Err(ExtensionError::InitializationFailed(validation.error_summary()));
        }

        let client = NmsClient::new(&settings.base_url, settings.timeout())
            .map_err(|e| ExtensionError::InitializationFailed(e.to_string()))?;
        let client = Arc::new(client);
        let diagnostics = ctx.diagnostics(EXTENSION_ID);

        for endpoint in NmsEndpoint::ALL {
            ctx.tool_registry.register_tool(Arc::new(NmsTool::new(
                endpoint,
                client.clone(),
                diagnostics.clone(),
            )))?;
        }

        info!(base_url = %settings.base_url, "NMS assistant skill ready");
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use wingskills_protocols::extension::ToolRegistryAccess;
    use wingskills_protocols::{HostSettings, MemorySink};

    #[derive(Default)]
    struct RecordingRegistry {
        ids: Mutex<Vec<String>>,
    }

    impl ToolRegistryAccess for RecordingRegistry {
        fn register_tool(
            &self,
            tool: Arc<dyn wingskills_protocols::Tool>,
        ) -> Result<(), ExtensionError> {
            self.ids.lock().push(tool.definition().id.clone());
            Ok(())
        }

        fn unregister_tool(&self, _tool_id: &str) -> Result<(), ExtensionError> {
            Ok(())
        }
    }

    fn context(config: serde_json::Value) -> (ExtensionContext, Arc<RecordingRegistry>) {
        let registry = Arc::new(RecordingRegistry::default());
        let ctx = ExtensionContext::new(
            config,
            HostSettings::default(),
            registry.clone(),
            Arc::new(MemorySink::new()),
        );
        (ctx, registry)
    }

    #[test]
    fn test_manifest_lists_every_tool() {
        let ext = NmsAssistantExtension::new();
        assert_eq!(ext.manifest().id, "nms_assistant");
        assert_eq!(ext.manifest().provides.tools.len(), 10);
        assert!(ext
            .manifest()
            .provides
            .tools
            .contains(&"get_cooking_recipes_by_output".to_string()));
    }

    #[test]
    fn test_as_any() {
        let ext = NmsAssistantExtension::default();
        assert!(ext.as_any().is::<NmsAssistantExtension>());
    }

    #[tokio::test]
    async fn test_initialize_registers_all_tools() {
        let mut ext = NmsAssistantExtension::new();
        let (ctx, registry) = context(serde_json::Value::Null);
        ext.initialize(ctx).await.unwrap();

        assert_eq!(*registry.ids.lock(), ext.manifest().provides.tools);
    }

    #[tokio::test]
    async fn test_initialize_rejects_bad_base_url() {
        let mut ext = NmsAssistantExtension::new();
        let (ctx, registry) = context(serde_json::json!({"base_url": "nowhere"}));
        assert!(matches!(
            ext.initialize(ctx).await,
            Err(ExtensionError::InitializationFailed(_))
        ));
        assert!(registry.ids.lock().is_empty());
    }
}
