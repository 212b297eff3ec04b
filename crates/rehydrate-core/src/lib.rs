//! # Rehydrate Core
//!
//! The component activation engine.
//!
//! ## Components
//!
//! - [`ComponentLoader`] - handler registry, per-pass dedup, lifecycle
//!   instance cache, and strictly sequential dispatch
//! - [`ComponentRegistry`] - append-only ordered set of keys eligible for
//!   activation
//! - [`NotificationBus`] - two-channel observer dispatch fired after each
//!   successful activation

pub mod bus;
pub mod loader;
pub mod registry;

pub use bus::{ListenerId, LoadEvent, LoadListener, NotificationBus};
pub use loader::{ComponentLoader, LoadHandler};
pub use registry::ComponentRegistry;
