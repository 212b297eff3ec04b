//! # Rehydrate Protocols
//!
//! Type and trait definitions for the rehydrate component activation
//! engine.
//!
//! ## Components
//!
//! - [`ComponentManager`] - the polymorphic activation lifecycle each
//!   component implements
//! - [`LegacyComponentManager`] - adapter wrapping a plain activation
//!   function into the lifecycle contract
//! - [`Section`] / [`ReloadReason`] - the handle and trigger category an
//!   activation pass runs with
//! - [`ComponentModule`] / [`ComponentExport`] - what an injected import
//!   resolver yields

pub mod error;
pub mod import;
pub mod legacy;
pub mod manager;
pub mod reason;
pub mod section;

pub use error::ActivationError;
pub use import::{ComponentExport, ComponentModule, LegacyInit};
pub use legacy::LegacyComponentManager;
pub use manager::ComponentManager;
pub use reason::ReloadReason;
pub use section::{ComponentKey, NodeHandle, Section};
