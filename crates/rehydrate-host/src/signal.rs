//! Host-facing signal contract.

use serde::{Deserialize, Serialize};

use rehydrate_protocols::{ComponentKey, Section};

/// Capabilities the document host exposes to the bridge.
pub trait DocumentHost: Send + Sync {
    /// Whether the document had already finished loading when the bridge
    /// subscribed.
    fn is_ready(&self) -> bool;

    /// Whether the process runs in the backend authoring context.
    ///
    /// Backend node-creation signals are only honored when this holds.
    fn is_backend(&self) -> bool;

    /// Scan `section` for inline registration markers, returning the
    /// component keys found.
    fn scan_markers(&self, section: &Section) -> Vec<ComponentKey>;
}

/// Content-change signal fired by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum HostSignal {
    /// Initial document content became ready.
    ContentReady,
    /// The host replaced a subtree client-side.
    SubtreeReplaced {
        /// Root of the replaced subtree.
        section: Section,
    },
    /// Modal content was inserted.
    ModalInserted {
        /// Root of the inserted modal content.
        section: Section,
    },
    /// The backend authoring host created a node.
    BackendNodeCreated {
        /// Root of the created node's subtree.
        section: Section,
        /// Host-specific detail about the created node.
        detail: serde_json::Value,
    },
}
