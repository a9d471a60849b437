//! Tool registry for the tools loaded skills expose.

use std::sync::Arc;

use wingskills_protocols::error::ExtensionError;
use wingskills_protocols::extension::ToolRegistryAccess;
use wingskills_protocols::tool::{Tool, ToolDefinition};

use super::base::{BaseRegistry, Registerable};

impl Registerable for dyn Tool {
    fn registry_id(&self) -> &str {
        &self.definition().id
    }
}

/// Registry for managing tools.
pub struct ToolRegistry {
    inner: BaseRegistry<dyn Tool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            inner: BaseRegistry::new(),
        }
    }

    /// Register a tool. Tool IDs are unique across all skills.
    pub fn register(&self, tool: Arc<dyn Tool>) -> Result<(), ExtensionError> {
        self.inner.register(tool)
    }

    pub fn unregister(&self, id: &str) -> Result<(), ExtensionError> {
        self.inner.unregister(id).map(|_| ())
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn Tool>> {
        self.inner.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.contains(id)
    }

    /// All tool definitions, ordered by tool ID.
    pub fn list(&self) -> Vec<ToolDefinition> {
        self.inner
            .list_ids()
            .iter()
            .filter_map(|id| self.inner.get(id))
            .map(|tool| tool.definition().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistryAccess for ToolRegistry {
    fn register_tool(&self, tool: Arc<dyn Tool>) -> Result<(), ExtensionError> {
        self.register(tool)
    }

    fn unregister_tool(&self, tool_id: &str) -> Result<(), ExtensionError> {
        self.unregister(tool_id)
    }
}
