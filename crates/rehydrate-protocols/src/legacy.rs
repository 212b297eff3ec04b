//! Adapter for plain-function components.

use async_trait::async_trait;
use tracing::warn;

use crate::error::ActivationError;
use crate::import::LegacyInit;
use crate::manager::ComponentManager;
use crate::section::Section;

/// Wraps a plain single-argument activation function into the lifecycle
/// contract.
///
/// Only `initialize` is implemented; every reason falls back to it through
/// the trait defaults.
pub struct LegacyComponentManager {
    init: LegacyInit,
    key: String,
}

impl LegacyComponentManager {
    /// Wrap `init` for component `key`.
    ///
    /// Emits an informational diagnostic so adapted components stay
    /// visible in the logs.
    pub fn new(init: LegacyInit, key: impl Into<String>) -> Self {
        let key = key.into();
        warn!(component = %key, "using legacy component manager");
        Self { init, key }
    }

    /// The component key this adapter was constructed for.
    pub fn key(&self) -> &str {
        &self.key
    }
}

#[async_trait]
impl ComponentManager for LegacyComponentManager {
    async fn initialize(&self, section: &Section) -> Result<(), ActivationError> {
        (self.init)(section)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::reason::ReloadReason;

    use super::*;

    #[tokio::test]
    async fn test_initialize_calls_wrapped_function() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let init: LegacyInit = Arc::new(move |_section| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        let manager = LegacyComponentManager::new(init, "nav");
        manager.initialize(&Section::Document).await.unwrap();

        assert_eq!(manager.key(), "nav");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_all_reasons_fall_back_to_wrapped_function() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let init: LegacyInit = Arc::new(move |_section| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        let manager = LegacyComponentManager::new(init, "gallery");
        for reason in ReloadReason::ALL {
            manager.dispatch(&Section::subtree("g1"), reason).await.unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_wrapped_function_errors_propagate() {
        let init: LegacyInit =
            Arc::new(|_section| Err(ActivationError::Custom("legacy failure".to_string())));
        let manager = LegacyComponentManager::new(init, "broken");

        let result = manager
            .dispatch(&Section::Document, ReloadReason::Reload)
            .await;
        assert!(result.is_err());
    }
}
