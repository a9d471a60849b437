//! Skill host managing skill lifecycle and tool dispatch.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use wingskills_protocols::diagnostics::{DiagnosticSink, TracingSink};
use wingskills_protocols::error::{ExtensionError, ToolError};
use wingskills_protocols::extension::{Extension, ExtensionContext, ExtensionManifest};
use wingskills_protocols::tool::{ToolContext, ToolDefinition};
use wingskills_protocols::types::HostSettings;

use crate::registry::{ExtensionRegistry, ToolRegistry};

/// Loads skills and routes tool calls from the LLM dispatcher to them.
///
/// Every call resolves to the `(function_response, instant_response)` pair
/// the dispatcher feeds back to the model. Failures never escape as errors.
pub struct SkillHost {
    settings: HostSettings,
    diagnostic_sink: Arc<dyn DiagnosticSink>,
    extension_registry: Arc<ExtensionRegistry>,
    tool_registry: Arc<ToolRegistry>,
}

impl SkillHost {
    /// Create a host whose skill diagnostics go to `tracing`.
    pub fn new(settings: HostSettings) -> Self {
        Self::with_diagnostic_sink(settings, Arc::new(TracingSink))
    }

    /// Create a host with a custom diagnostic sink.
    pub fn with_diagnostic_sink(
        settings: HostSettings,
        diagnostic_sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            settings,
            diagnostic_sink,
            extension_registry: Arc::new(ExtensionRegistry::new()),
            tool_registry: Arc::new(ToolRegistry::new()),
        }
    }

    pub fn settings(&self) -> HostSettings {
        self.settings
    }

    /// Initialize a skill with its custom properties and register it.
    pub async fn load_skill(
        &self,
        mut extension: Box<dyn Extension>,
        config: serde_json::Value,
    ) -> Result<(), ExtensionError> {
        let manifest = extension.manifest();
        let id = manifest.id.clone();

        if self.extension_registry.contains(&id) {
            return Err(ExtensionError::AlreadyRegistered(id));
        }

        info!("Loading skill: {} v{}", manifest.name, manifest.version);

        let ctx = ExtensionContext::new(
            config,
            self.settings,
            self.tool_registry.clone(),
            self.diagnostic_sink.clone(),
        );

        let existing: HashSet<String> =
            self.tool_registry.list().into_iter().map(|def| def.id).collect();

        let result = match extension.initialize(ctx).await {
            Ok(()) => self.extension_registry.register(Arc::from(extension)),
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            self.remove_tools_since(&existing, &id);
            return Err(e);
        }

        info!("Skill loaded: {}", id);
        Ok(())
    }

    /// Drop tools registered after `existing` was taken by a skill that failed to load.
    fn remove_tools_since(&self, existing: &HashSet<String>, skill_id: &str) {
        for def in self.tool_registry.list() {
            if existing.contains(&def.id) {
                continue;
            }
            warn!("Removing tool {} of failed skill {}", def.id, skill_id);
            let _ = self.tool_registry.unregister(&def.id);
        }
    }

    /// Shut a skill down and remove the tools it registered.
    pub async fn unload_skill(&self, id: &str) -> Result<(), ExtensionError> {
        info!("Unloading skill: {}", id);
        let extension = self.extension_registry.unregister(id)?;

        for tool_id in &extension.manifest().provides.tools {
            if let Err(e) = self.tool_registry.unregister(tool_id) {
                warn!("Tool {} of skill {} was not registered: {}", tool_id, id, e);
            }
        }

        extension.shutdown().await
    }

    /// Unload every skill, logging failures.
    pub async fn shutdown(&self) {
        for manifest in self.extension_registry.list().iter().rev() {
            if let Err(e) = self.unload_skill(&manifest.id).await {
                warn!("Failed to unload {}: {}", manifest.id, e);
            }
        }
    }

    /// Manifests of the loaded skills.
    pub fn list_skills(&self) -> Vec<ExtensionManifest> {
        self.extension_registry.list()
    }

    /// Definitions of every registered tool, ordered by ID.
    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.tool_registry.list()
    }

    pub fn tool_registry(&self) -> &Arc<ToolRegistry> {
        &self.tool_registry
    }

    /// Execute a tool in a fresh session.
    pub async fn execute_tool(&self, tool_name: &str, params: serde_json::Value) -> (String, String) {
        self.execute_tool_with_context(tool_name, params, ToolContext::new("default"))
            .await
    }

    /// Execute a tool and fold the outcome into the response pair.
    pub async fn execute_tool_with_context(
        &self,
        tool_name: &str,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> (String, String) {
        let Some(tool) = self.tool_registry.get(tool_name) else {
            warn!("Tool call for unknown tool: {}", tool_name);
            return (ToolError::NotFound(tool_name.to_string()).to_string(), String::new());
        };

        if let Err(e) = tool.validate(&params) {
            warn!("Rejected parameters for {}: {}", tool_name, e);
            return (e.to_string(), String::new());
        }

        debug!(
            tool = tool_name,
            correlation_id = %ctx.correlation_id,
            "Executing tool"
        );

        match tool.execute(params, ctx).await {
            Ok(result) => result.into_responses(),
            Err(e) => {
                warn!("Tool {} failed: {}", tool_name, e);
                (e.to_string(), String::new())
            }
        }
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
