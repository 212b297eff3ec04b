//! # Rehydrate Host
//!
//! Bridge between a document host and the activation engine.
//!
//! The host fires [`HostSignal`]s over a channel; the [`HostBridge`] maps
//! each to a `(section, reason)` pair and forwards it to the loader with
//! the current registry snapshot.

pub mod bridge;
pub mod signal;

pub use bridge::{ActivationCallback, HostBridge};
pub use signal::{DocumentHost, HostSignal};
