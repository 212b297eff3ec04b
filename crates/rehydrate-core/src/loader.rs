//! The component loader engine.
//!
//! Owns the handler registry, the per-pass dedup set, and the lifecycle
//! instance cache, and drives strictly sequential activation passes: each
//! key's handler is awaited to completion before the next key begins, so a
//! later component may rely on an earlier one having already mutated the
//! shared section.
//!
//! ## Concurrency
//!
//! All state sits behind short-lived locks that are never held across a
//! handler await. The engine provides no mutual exclusion between passes:
//! two `load` calls may interleave at suspension points and share the
//! dedup set and instance cache. A force-reload pass that begins while
//! another pass is mid-flight clears the dedup set out from under it and
//! can activate a key twice. Callers that need stronger guarantees must
//! serialize passes themselves.

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::sync::Arc;

use dashmap::DashMap;
use futures::future::BoxFuture;
use parking_lot::{Mutex, RwLock};
use tracing::{debug, warn};

use rehydrate_protocols::{
    ActivationError, ComponentExport, ComponentKey, ComponentManager, ComponentModule,
    LegacyComponentManager, ReloadReason, Section,
};

use crate::bus::NotificationBus;
use crate::registry::ComponentRegistry;

/// Async activation handler registered for a component key.
pub type LoadHandler = Arc<
    dyn Fn(Section, ReloadReason) -> BoxFuture<'static, Result<(), ActivationError>>
        + Send
        + Sync,
>;

/// A (predicate, keys) pair recorded for one-time evaluation at setup.
struct ConditionalRegistration {
    check: Box<dyn Fn() -> bool + Send + Sync>,
    keys: Vec<ComponentKey>,
}

/// The activation engine.
///
/// Constructed once at process start and shared by handle; all state is
/// owned here rather than living in ambient globals.
pub struct ComponentLoader {
    handlers: RwLock<HashMap<ComponentKey, LoadHandler>>,
    instances: Arc<DashMap<ComponentKey, Arc<dyn ComponentManager>>>,
    activated: Mutex<HashSet<ComponentKey>>,
    conditional: Mutex<Vec<ConditionalRegistration>>,
    registry: Arc<ComponentRegistry>,
    bus: Arc<NotificationBus>,
}

impl ComponentLoader {
    /// Create a loader with a fresh registry and notification bus.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            instances: Arc::new(DashMap::new()),
            activated: Mutex::new(HashSet::new()),
            conditional: Mutex::new(Vec::new()),
            registry: Arc::new(ComponentRegistry::new()),
            bus: Arc::new(NotificationBus::new()),
        }
    }

    /// The registry of activatable keys.
    pub fn registry(&self) -> &Arc<ComponentRegistry> {
        &self.registry
    }

    /// The post-activation notification bus.
    pub fn bus(&self) -> &Arc<NotificationBus> {
        &self.bus
    }

    /// Register (or overwrite) the activation handler for `key`.
    ///
    /// May be called before or after any `load`; only passes starting
    /// after the call see the new handler.
    pub fn add(&self, key: impl Into<ComponentKey>, handler: LoadHandler) {
        self.handlers.write().insert(key.into(), handler);
    }

    /// Register a handler that lazily resolves `key`'s lifecycle instance
    /// through `importer`.
    ///
    /// The first activation awaits the importer, turns the module's
    /// default-like export into a cached [`ComponentManager`] (wrapping a
    /// plain function in [`LegacyComponentManager`]), then dispatches.
    /// Subsequent activations reuse the cached instance without
    /// re-importing. A module without a default-like export fails that
    /// key's activation.
    pub fn add_default_import<F, Fut>(&self, key: impl Into<ComponentKey>, importer: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<ComponentModule, ActivationError>> + Send + 'static,
    {
        let key = key.into();
        let handler_key = key.clone();
        let instances = Arc::clone(&self.instances);
        let importer = Arc::new(importer);

        self.add(
            key,
            Arc::new(move |section: Section, reason: ReloadReason| {
                let key = handler_key.clone();
                let instances = Arc::clone(&instances);
                let importer = Arc::clone(&importer);
                Box::pin(async move {
                    let cached = instances.get(&key).map(|entry| Arc::clone(entry.value()));
                    let instance = match cached {
                        Some(instance) => instance,
                        None => {
                            debug!(component = %key, "resolving component import");
                            let module = importer().await?;
                            let resolved = resolve_default_export(&key, module)?;
                            instances
                                .entry(key.clone())
                                .or_insert(resolved)
                                .value()
                                .clone()
                        }
                    };
                    instance.dispatch(&section, reason).await
                })
            }),
        );
    }

    /// Record a (predicate, keys) pair for
    /// [`apply_conditional_registers`](Self::apply_conditional_registers).
    pub fn add_conditional_register<P, I, K>(&self, check: P, keys: I)
    where
        P: Fn() -> bool + Send + Sync + 'static,
        I: IntoIterator<Item = K>,
        K: Into<ComponentKey>,
    {
        let keys = keys.into_iter().map(Into::into).collect();
        self.conditional.lock().push(ConditionalRegistration {
            check: Box::new(check),
            keys,
        });
    }

    /// Evaluate recorded conditional registrations, merging the keys of
    /// every passing predicate into the registry.
    ///
    /// Each recorded pair is evaluated exactly once; pairs recorded after
    /// this call wait for the next one.
    pub fn apply_conditional_registers(&self) {
        let pending = std::mem::take(&mut *self.conditional.lock());
        for registration in pending {
            if (registration.check)() {
                debug!(keys = ?registration.keys, "conditional registration matched");
                self.registry.register_all(registration.keys);
            }
        }
    }

    /// Whether `key` has a registered handler.
    pub fn has_handler(&self, key: &str) -> bool {
        self.handlers.read().contains_key(key)
    }

    /// Whether `key` was activated since the last force-reload pass.
    pub fn is_activated(&self, key: &str) -> bool {
        self.activated.lock().contains(key)
    }

    /// Run one activation pass over `keys` against `section`.
    ///
    /// `force_reload` clears the dedup set first, beginning a new pass
    /// window. Keys are processed strictly in order; keys already
    /// activated in the current window are skipped, as are keys without a
    /// registered handler (with a diagnostic). After each successful
    /// handler the generic and reason-specific notifications fire, in that
    /// order, and only then is the key marked activated. A handler error
    /// aborts the remaining keys of this call.
    pub async fn load(
        &self,
        keys: &[ComponentKey],
        section: &Section,
        reason: ReloadReason,
        force_reload: bool,
    ) -> Result<(), ActivationError> {
        if force_reload {
            self.activated.lock().clear();
        }

        for key in keys {
            if self.activated.lock().contains(key) {
                continue;
            }

            let handler = self.handlers.read().get(key).cloned();
            let Some(handler) = handler else {
                warn!(component = %key, "failed to load unregistered component");
                continue;
            };

            handler(section.clone(), reason).await?;
            self.bus.emit_load(key, section, reason);
            self.bus.emit_reason(key, section, reason);
            self.activated.lock().insert(key.clone());
        }

        Ok(())
    }

    /// Single-key convenience for [`load`](Self::load).
    pub async fn load_one(
        &self,
        key: impl Into<ComponentKey>,
        section: &Section,
        reason: ReloadReason,
        force_reload: bool,
    ) -> Result<(), ActivationError> {
        self.load(&[key.into()], section, reason, force_reload).await
    }
}

impl Default for ComponentLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a resolved module's default-like export into a lifecycle instance.
fn resolve_default_export(
    key: &str,
    module: ComponentModule,
) -> Result<Arc<dyn ComponentManager>, ActivationError> {
    match module.default {
        Some(ComponentExport::Manager(manager)) => Ok(manager),
        Some(ComponentExport::Init(init)) => Ok(Arc::new(LegacyComponentManager::new(init, key))),
        None => Err(ActivationError::MissingDefaultExport(key.to_string())),
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
