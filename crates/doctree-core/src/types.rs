//! Core types for doctree-core.
//!
//! This module defines the data shared across every layer: the arena-held
//! [`Node`], the typed input tree [`ForestEntry`], and the opaque [`Payload`]
//! passed through to the renderer untouched.

use serde::{Deserialize, Serialize};

/// A documentation entry held by the [`NodeStore`](crate::store::NodeStore).
///
/// Nodes are immutable once the store is built. Cross-references are by id
/// string, never by pointer, so a store can be dropped and rebuilt without
/// leaving anything dangling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Stable identifier derived from the node's position in the forest.
    pub id: String,
    /// Display name. Not unique.
    pub label: String,
    /// Opaque document locator; empty for grouping-only entries.
    pub target_ref: String,
    /// Id of the owning node, `None` for roots.
    pub parent_id: Option<String>,
    /// Children in declared display order.
    pub child_ids: Vec<String>,
    /// Distance from the root (roots are 0).
    pub depth: usize,
}

impl Node {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn has_children(&self) -> bool {
        !self.child_ids.is_empty()
    }

    /// `true` when the node points at a standalone document.
    pub fn is_navigable(&self) -> bool {
        !self.target_ref.is_empty()
    }
}

/// One entry of a serialized forest: `(label, target_ref, children)`.
///
/// Serializes to and from the generator's 3-tuple form, e.g.
/// `["GenericEditor", "classGenericEditor.html", [...]]`, with `null` standing
/// for "no children".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEntry", into = "RawEntry")]
pub struct ForestEntry {
    pub label: String,
    pub target_ref: String,
    pub children: Vec<ForestEntry>,
}

impl ForestEntry {
    /// An entry with no children.
    pub fn leaf(label: impl Into<String>, target_ref: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target_ref: target_ref.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<ForestEntry>) -> Self {
        self.children = children;
        self
    }

    /// Total number of entries in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(ForestEntry::count).sum::<usize>()
    }
}

#[derive(Serialize, Deserialize)]
struct RawEntry(String, Option<String>, Option<Vec<ForestEntry>>);

impl From<RawEntry> for ForestEntry {
    fn from(RawEntry(label, target_ref, children): RawEntry) -> Self {
        Self {
            label,
            target_ref: target_ref.unwrap_or_default(),
            children: children.unwrap_or_default(),
        }
    }
}

impl From<ForestEntry> for RawEntry {
    fn from(entry: ForestEntry) -> Self {
        let children = if entry.children.is_empty() {
            None
        } else {
            Some(entry.children)
        };
        RawEntry(entry.label, Some(entry.target_ref), children)
    }
}

/// Pre-rendered text or markup stored alongside a snapshot and handed back
/// byte-for-byte. Nothing in doctree inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Payload(String);

impl Payload {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for Payload {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}
