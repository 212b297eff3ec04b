//! Append-only registry of activatable component keys.

use indexmap::IndexSet;
use parking_lot::RwLock;

use rehydrate_protocols::ComponentKey;

/// Ordered, append-only set of component keys eligible for activation.
///
/// Keys keep their first-registration order; activation passes iterate a
/// snapshot in that order. Registering an already-known key is a no-op,
/// and keys are never removed.
pub struct ComponentRegistry {
    keys: RwLock<IndexSet<ComponentKey>>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            keys: RwLock::new(IndexSet::new()),
        }
    }

    /// Register a single key. Returns `true` if the key was new.
    pub fn register(&self, key: impl Into<ComponentKey>) -> bool {
        self.keys.write().insert(key.into())
    }

    /// Register every key in `keys`, preserving their order.
    pub fn register_all<I, K>(&self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: Into<ComponentKey>,
    {
        let mut set = self.keys.write();
        for key in keys {
            set.insert(key.into());
        }
    }

    /// Whether `key` is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.read().contains(key)
    }

    /// Snapshot of all keys in first-registration order.
    pub fn snapshot(&self) -> Vec<ComponentKey> {
        self.keys.read().iter().cloned().collect()
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.keys.read().len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.read().is_empty()
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_preserves_insertion_order() {
        let registry = ComponentRegistry::new();
        registry.register("nav");
        registry.register("gallery");
        registry.register("footer");

        assert_eq!(registry.snapshot(), vec!["nav", "gallery", "footer"]);
    }

    #[test]
    fn test_duplicate_registration_is_noop() {
        let registry = ComponentRegistry::new();
        assert!(registry.register("nav"));
        assert!(!registry.register("nav"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.snapshot(), vec!["nav"]);
    }

    #[test]
    fn test_duplicate_keeps_first_position() {
        let registry = ComponentRegistry::new();
        registry.register_all(["a", "b"]);
        registry.register("a");

        assert_eq!(registry.snapshot(), vec!["a", "b"]);
    }

    #[test]
    fn test_register_all() {
        let registry = ComponentRegistry::new();
        registry.register_all(["a", "b", "c"]);

        assert_eq!(registry.len(), 3);
        assert!(registry.contains("b"));
        assert!(!registry.contains("d"));
    }

    #[test]
    fn test_empty() {
        let registry = ComponentRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.snapshot(), Vec::<String>::new());
    }
}
