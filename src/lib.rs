//! # Rehydrate
//!
//! Lazy, idempotent component activation engine for a document tree whose
//! content can be partially replaced at runtime by an external host.
//!
//! Given a set of registered component keys and a section of the document,
//! the engine activates each component exactly once per activation pass,
//! routes each activation through a reason-specific lifecycle method, and
//! notifies observers after each activation.
//!
//! This crate is a facade re-exporting the engine's public surface:
//!
//! - [`ComponentManager`] - the polymorphic activation lifecycle
//! - [`ComponentLoader`] - registration, per-pass dedup, and dispatch
//! - [`NotificationBus`] - post-activation observer channels
//! - [`HostBridge`] - maps host content-change signals to activation
//!   passes

pub use rehydrate_protocols::{
    ActivationError, ComponentExport, ComponentKey, ComponentManager, ComponentModule,
    LegacyComponentManager, LegacyInit, NodeHandle, ReloadReason, Section,
};

pub use rehydrate_core::{
    ComponentLoader, ComponentRegistry, ListenerId, LoadEvent, LoadHandler, LoadListener,
    NotificationBus,
};

pub use rehydrate_host::{ActivationCallback, DocumentHost, HostBridge, HostSignal};
