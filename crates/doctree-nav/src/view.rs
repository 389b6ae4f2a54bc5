//! Renderer-facing views. Plain data, serializable for web front ends.

use doctree_core::Node;
use serde::Serialize;

/// What a renderer needs to draw a single node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeView {
    pub id: String,
    pub label: String,
    pub target_ref: String,
    pub depth: usize,
    pub has_children: bool,
}

impl From<&Node> for NodeView {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id.clone(),
            label: node.label.clone(),
            target_ref: node.target_ref.clone(),
            depth: node.depth,
            has_children: node.has_children(),
        }
    }
}

/// One line of the flattened, expansion-aware tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleRow {
    pub depth: usize,
    pub id: String,
    pub label: String,
    pub target_ref: String,
    pub has_children: bool,
    pub expanded: bool,
    /// The node is among the active search matches.
    pub matched: bool,
}

impl VisibleRow {
    /// Plain-text outline line: indent, expander, label, match marker.
    pub fn outline(&self) -> String {
        let indent = "  ".repeat(self.depth);
        let expander = if !self.has_children {
            "  "
        } else if self.expanded {
            "▼ "
        } else {
            "▶ "
        };
        let marker = if self.matched { " *" } else { "" };
        format!("{indent}{expander}{}{marker}", self.label)
    }
}
