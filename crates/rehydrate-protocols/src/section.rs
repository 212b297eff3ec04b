//! Document section handles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque string identifying a component type.
pub type ComponentKey = String;

/// Opaque handle to a host-side document node.
///
/// The engine never interprets the handle; it only threads it through to
/// component handlers and back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeHandle(String);

impl NodeHandle {
    /// Create a handle from a raw host identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw host identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeHandle {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Handle to the whole document or a single rooted subtree.
///
/// Sections are borrowed references into the host's document; the loader
/// never owns the underlying platform object and passes the handle through
/// to component handlers unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    /// The entire document.
    Document,
    /// A single rooted subtree.
    Subtree(NodeHandle),
}

impl Section {
    /// Build a subtree section from a raw host handle.
    pub fn subtree(raw: impl Into<String>) -> Self {
        Section::Subtree(NodeHandle::new(raw))
    }

    /// Whether this section covers the entire document.
    pub fn is_document(&self) -> bool {
        matches!(self, Section::Document)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Document => f.write_str("document"),
            Section::Subtree(handle) => write!(f, "subtree:{}", handle),
        }
    }
}
