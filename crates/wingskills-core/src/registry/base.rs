//! Base registry trait and implementation.
//!
//! Shared by the tool and extension registries.

use dashmap::DashMap;
use std::sync::Arc;

use wingskills_protocols::error::ExtensionError;

/// Trait for items that can be stored in a registry.
pub trait Registerable: Send + Sync {
    /// Returns the unique identifier for this item.
    fn registry_id(&self) -> &str;
}

/// Generic registry for managing items by ID.
///
/// Thread-safe storage with duplicate checking on register.
///
/// # Type Parameters
///
/// * `T` - The trait object type to store (e.g., `dyn Tool`, `dyn Extension`)
pub struct BaseRegistry<T: ?Sized + Registerable> {
    items: DashMap<String, Arc<T>>,
}

impl<T: ?Sized + Registerable> BaseRegistry<T> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
        }
    }

    /// Register an item.
    ///
    /// Returns an error if an item with the same ID is already registered.
    pub fn register(&self, item: Arc<T>) -> Result<(), ExtensionError> {
        let id = item.registry_id().to_string();

        match self.items.entry(id) {
            dashmap::Entry::Occupied(entry) => {
                Err(ExtensionError::AlreadyRegistered(entry.key().clone()))
            }
            dashmap::Entry::Vacant(entry) => {
                entry.insert(item);
                Ok(())
            }
        }
    }

    /// Unregister an item by ID.
    pub fn unregister(&self, id: &str) -> Result<Arc<T>, ExtensionError> {
        self.items
            .remove(id)
            .map(|(_, item)| item)
            .ok_or_else(|| ExtensionError::NotFound(id.to_string()))
    }

    /// Get an item by ID.
    pub fn get(&self, id: &str) -> Option<Arc<T>> {
        self.items.get(id).map(|item| item.clone())
    }

    /// Check if an item with the given ID is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// All registered IDs, sorted.
    pub fn list_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.items.iter().map(|item| item.key().clone()).collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over all items.
    pub fn iter(&self) -> impl Iterator<Item = Arc<T>> + '_ {
        self.items.iter().map(|entry| entry.value().clone())
    }
}

impl<T: ?Sized + Registerable> Default for BaseRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestItem {
        id: String,
    }

    impl TestItem {
        fn new(id: &str) -> Self {
            Self { id: id.to_string() }
        }
    }

    impl Registerable for TestItem {
        fn registry_id(&self) -> &str {
            &self.id
        }
    }

    #[test]
    fn test_base_registry_new() {
        let registry: BaseRegistry<TestItem> = BaseRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_register() {
        let registry: BaseRegistry<TestItem> = BaseRegistry::default();
        registry.register(Arc::new(TestItem::new("get_news"))).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("get_news"));
    }

    #[test]
    fn test_register_duplicate() {
        let registry: BaseRegistry<TestItem> = BaseRegistry::new();
        registry.register(Arc::new(TestItem::new("get_news"))).unwrap();

        let result = registry.register(Arc::new(TestItem::new("get_news")));
        assert!(matches!(result, Err(ExtensionError::AlreadyRegistered(id)) if id == "get_news"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister_returns_item() {
        let registry: BaseRegistry<TestItem> = BaseRegistry::new();
        registry.register(Arc::new(TestItem::new("get_news"))).unwrap();

        let removed = registry.unregister("get_news").unwrap();
        assert_eq!(removed.registry_id(), "get_news");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unregister_nonexistent() {
        let registry: BaseRegistry<TestItem> = BaseRegistry::new();
        assert!(matches!(
            registry.unregister("nonexistent"),
            Err(ExtensionError::NotFound(_))
        ));
    }

    #[test]
    fn test_get() {
        let registry: BaseRegistry<TestItem> = BaseRegistry::new();
        registry.register(Arc::new(TestItem::new("get_news"))).unwrap();
        assert_eq!(registry.get("get_news").unwrap().registry_id(), "get_news");
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_list_ids_sorted() {
        let registry: BaseRegistry<TestItem> = BaseRegistry::new();
        registry.register(Arc::new(TestItem::new("send_api_request"))).unwrap();
        registry.register(Arc::new(TestItem::new("get_news"))).unwrap();

        assert_eq!(
            registry.list_ids(),
            vec!["get_news".to_string(), "send_api_request".to_string()]
        );
    }

    #[test]
    fn test_iter() {
        let registry: BaseRegistry<TestItem> = BaseRegistry::new();
        registry.register(Arc::new(TestItem::new("item1"))).unwrap();
        registry.register(Arc::new(TestItem::new("item2"))).unwrap();
        assert_eq!(registry.iter().count(), 2);
    }
}
