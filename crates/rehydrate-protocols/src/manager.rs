//! The component lifecycle contract.
//!
//! Components implement [`ComponentManager`]; the loader routes every
//! activation through [`ComponentManager::dispatch`], which selects the
//! lifecycle method matching the pass's reason.

use async_trait::async_trait;

use crate::error::ActivationError;
use crate::reason::ReloadReason;
use crate::section::Section;

/// Polymorphic activation lifecycle for a component type.
///
/// `initialize` is the only required method. The reason methods form a
/// fallback chain (`backend_reload` and `modal_reload` delegate to
/// `reload`, which delegates to `initialize`), each independently
/// overridable: a simple component implements one method, a complex one
/// overrides just the reasons that need different treatment.
///
/// Errors are not retried; they propagate to the loader and abort the
/// remaining keys of the running pass.
#[async_trait]
pub trait ComponentManager: Send + Sync {
    /// First-time (or reason-agnostic) activation against `section`.
    async fn initialize(&self, section: &Section) -> Result<(), ActivationError>;

    /// Activation after a client-side subtree replacement.
    async fn reload(&self, section: &Section) -> Result<(), ActivationError> {
        self.initialize(section).await
    }

    /// Activation after a backend-driven node insertion.
    async fn backend_reload(&self, section: &Section) -> Result<(), ActivationError> {
        self.reload(section).await
    }

    /// Activation after modal content insertion.
    async fn modal_reload(&self, section: &Section) -> Result<(), ActivationError> {
        self.reload(section).await
    }

    /// Route an activation to the lifecycle method selected by `reason`.
    ///
    /// This is the only entry point the loader calls.
    async fn dispatch(
        &self,
        section: &Section,
        reason: ReloadReason,
    ) -> Result<(), ActivationError> {
        match reason {
            ReloadReason::Ready => self.initialize(section).await,
            ReloadReason::Reload => self.reload(section).await,
            ReloadReason::BackendReload => self.backend_reload(section).await,
            ReloadReason::ModalReload => self.modal_reload(section).await,
        }
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
