//! Registry of loaded skills.

use std::sync::Arc;

use wingskills_protocols::error::ExtensionError;
use wingskills_protocols::extension::{Extension, ExtensionManifest};

use super::base::{BaseRegistry, Registerable};

impl Registerable for dyn Extension {
    fn registry_id(&self) -> &str {
        &self.manifest().id
    }
}

/// Registry for managing loaded skills.
pub struct ExtensionRegistry {
    inner: BaseRegistry<dyn Extension>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self {
            inner: BaseRegistry::new(),
        }
    }

    pub fn register(&self, extension: Arc<dyn Extension>) -> Result<(), ExtensionError> {
        self.inner.register(extension)
    }

    /// Remove a skill, handing it back so the caller can shut it down.
    pub fn unregister(&self, id: &str) -> Result<Arc<dyn Extension>, ExtensionError> {
        self.inner.unregister(id)
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn Extension>> {
        self.inner.get(id)
    }

    /// Manifests of all loaded skills, ordered by ID.
    pub fn list(&self) -> Vec<ExtensionManifest> {
        self.inner
            .list_ids()
            .iter()
            .filter_map(|id| self.inner.get(id))
            .map(|ext| ext.manifest().clone())
            .collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.contains(id)
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
