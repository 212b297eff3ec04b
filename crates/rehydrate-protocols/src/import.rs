//! Import resolution contract.
//!
//! Component code is resolved through an injected asynchronous importer
//! rather than a hard-coded module loader, so the engine is testable
//! without real module loading. The types here model what such an importer
//! yields.

use std::sync::Arc;

use crate::error::ActivationError;
use crate::manager::ComponentManager;
use crate::section::Section;

/// Plain single-argument activation function, the legacy component shape.
pub type LegacyInit = Arc<dyn Fn(&Section) -> Result<(), ActivationError> + Send + Sync>;

/// A default-like export resolved from an imported module.
///
/// The split is by capability, not by name: either the export already
/// implements the lifecycle contract, or it is a plain function that must
/// be wrapped in the legacy adapter.
#[derive(Clone)]
pub enum ComponentExport {
    /// A native lifecycle implementation.
    Manager(Arc<dyn ComponentManager>),
    /// A plain activation function requiring the legacy adapter.
    Init(LegacyInit),
}

/// A resolved asynchronous import.
#[derive(Clone, Default)]
pub struct ComponentModule {
    /// The module's default-like export, if any. Absence is a fatal
    /// activation error for the key being resolved.
    pub default: Option<ComponentExport>,
}

impl ComponentModule {
    /// Module exporting a native lifecycle implementation.
    pub fn manager(manager: Arc<dyn ComponentManager>) -> Self {
        Self {
            default: Some(ComponentExport::Manager(manager)),
        }
    }

    /// Module exporting a plain activation function.
    pub fn init<F>(init: F) -> Self
    where
        F: Fn(&Section) -> Result<(), ActivationError> + Send + Sync + 'static,
    {
        Self {
            default: Some(ComponentExport::Init(Arc::new(init))),
        }
    }

    /// Module with no default-like export.
    pub fn empty() -> Self {
        Self { default: None }
    }
}
