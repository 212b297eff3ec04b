//! Maps host signals to activation passes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use rehydrate_core::ComponentLoader;
use rehydrate_protocols::{ActivationError, ReloadReason, Section};

use crate::signal::{DocumentHost, HostSignal};

/// Callback invoked after each successful activation pass.
pub type ActivationCallback =
    Arc<dyn Fn(Section, ReloadReason) -> BoxFuture<'static, ()> + Send + Sync>;

/// Bridge between a [`DocumentHost`] and the [`ComponentLoader`].
///
/// Maps each host signal to a `(section, reason)` pair and forwards it to
/// the loader with the current registry snapshot. Reload-family signals
/// re-scan the target subtree for registration markers and force a new
/// activation pass; the initial Ready pass runs at most once per process.
pub struct HostBridge {
    loader: Arc<ComponentLoader>,
    host: Arc<dyn DocumentHost>,
    ready_fired: AtomicBool,
    on_activation: Option<ActivationCallback>,
}

impl HostBridge {
    /// Create a bridge over `loader` for `host`.
    pub fn new(loader: Arc<ComponentLoader>, host: Arc<dyn DocumentHost>) -> Self {
        Self {
            loader,
            host,
            ready_fired: AtomicBool::new(false),
            on_activation: None,
        }
    }

    /// Invoke `callback` after each successful activation pass.
    pub fn with_activation_callback(mut self, callback: ActivationCallback) -> Self {
        self.on_activation = Some(callback);
        self
    }

    /// The loader this bridge forwards to.
    pub fn loader(&self) -> &Arc<ComponentLoader> {
        &self.loader
    }

    /// Apply conditional registrations, then run the Ready pass if the
    /// document is already loaded.
    ///
    /// When the document is not yet ready, the Ready pass is deferred to
    /// the host's [`HostSignal::ContentReady`] signal.
    pub async fn initialize(&self) -> Result<(), ActivationError> {
        self.loader.apply_conditional_registers();
        if self.host.is_ready() {
            self.fire_ready().await?;
        }
        Ok(())
    }

    /// Drive host signals until the channel closes.
    ///
    /// A failed pass is logged and does not stop the loop; independent
    /// triggers keep running.
    pub async fn run(&self, mut signals: mpsc::Receiver<HostSignal>) {
        while let Some(signal) = signals.recv().await {
            if let Err(e) = self.handle(signal).await {
                error!(error = %e, "activation pass failed");
            }
        }
        debug!("host signal channel closed");
    }

    /// Handle a single host signal.
    pub async fn handle(&self, signal: HostSignal) -> Result<(), ActivationError> {
        match signal {
            HostSignal::ContentReady => self.fire_ready().await,
            HostSignal::SubtreeReplaced { section } => {
                self.reload_pass(section, ReloadReason::Reload).await
            }
            HostSignal::ModalInserted { section } => {
                self.reload_pass(section, ReloadReason::ModalReload).await
            }
            HostSignal::BackendNodeCreated { section, detail } => {
                if !self.host.is_backend() {
                    debug!("ignoring backend node creation outside backend context");
                    return Ok(());
                }
                debug!(%detail, "backend node created");
                self.reload_pass(section, ReloadReason::BackendReload).await
            }
        }
    }

    /// Run the once-per-process Ready pass over the whole document.
    async fn fire_ready(&self) -> Result<(), ActivationError> {
        if self.ready_fired.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        info!("running initial ready pass");
        let section = Section::Document;
        let snapshot = self.loader.registry().snapshot();
        self.loader
            .load(&snapshot, &section, ReloadReason::Ready, false)
            .await?;
        self.notify(&section, ReloadReason::Ready).await;
        Ok(())
    }

    /// Re-scan `section` for registration markers, then force a new pass.
    async fn reload_pass(
        &self,
        section: Section,
        reason: ReloadReason,
    ) -> Result<(), ActivationError> {
        let marked = self.host.scan_markers(&section);
        if !marked.is_empty() {
            debug!(count = marked.len(), "registering marked components");
            self.loader.registry().register_all(marked);
        }

        let snapshot = self.loader.registry().snapshot();
        self.loader.load(&snapshot, &section, reason, true).await?;
        self.notify(&section, reason).await;
        Ok(())
    }

    async fn notify(&self, section: &Section, reason: ReloadReason) {
        if let Some(callback) = &self.on_activation {
            callback(section.clone(), reason).await;
        }
    }
}

#[cfg(test)]
#[path = "bridge_tests.rs"]
mod tests;
