//! Activation reasons.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The trigger category associated with an activation pass.
///
/// Exactly one reason accompanies each pass; it selects which lifecycle
/// method a component receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReloadReason {
    /// Initial document ready.
    #[serde(rename = "ready")]
    Ready,
    /// Client-driven subtree replacement.
    #[serde(rename = "reload")]
    Reload,
    /// Backend-driven node insertion.
    #[serde(rename = "reload_backend")]
    BackendReload,
    /// Modal content insertion.
    #[serde(rename = "reload_modal")]
    ModalReload,
}

impl ReloadReason {
    /// All reasons, in routing order.
    pub const ALL: [ReloadReason; 4] = [
        ReloadReason::Ready,
        ReloadReason::Reload,
        ReloadReason::BackendReload,
        ReloadReason::ModalReload,
    ];

    /// Stable wire name for the reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReloadReason::Ready => "ready",
            ReloadReason::Reload => "reload",
            ReloadReason::BackendReload => "reload_backend",
            ReloadReason::ModalReload => "reload_modal",
        }
    }
}

impl fmt::Display for ReloadReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
