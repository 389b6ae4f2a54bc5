//! Store: the canonical, immutable arena of [`Node`] values.
//!
//! The store is the single source of truth; the search index and the
//! navigation controller refer to nodes by id and resolve them here. A store
//! is only ever produced whole by the [`TreeBuilder`](crate::builder::TreeBuilder)
//! and never mutated afterwards: reloads build a fresh one.

use crate::error::NotFound;
use crate::types::Node;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct NodeStore {
    /// Nodes in pre-order, declaration order.
    nodes: Vec<Node>,
    by_id: HashMap<String, usize>,
    roots: Vec<usize>,
    by_target: HashMap<String, Vec<usize>>,
}

impl NodeStore {
    /// Assemble a store from pre-ordered nodes. Callers guarantee unique ids
    /// and referential integrity; the builder checks both.
    pub(crate) fn from_nodes(nodes: Vec<Node>) -> Self {
        let mut by_id = HashMap::with_capacity(nodes.len());
        let mut roots = Vec::new();
        let mut by_target: HashMap<String, Vec<usize>> = HashMap::new();

        for (slot, node) in nodes.iter().enumerate() {
            by_id.insert(node.id.clone(), slot);
            if node.is_root() {
                roots.push(slot);
            }
            if node.is_navigable() {
                by_target.entry(node.target_ref.clone()).or_default().push(slot);
            }
        }

        Self {
            nodes,
            by_id,
            roots,
            by_target,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// O(1) lookup by id.
    pub fn get(&self, id: &str) -> Result<&Node, NotFound> {
        self.by_id
            .get(id)
            .map(|&slot| &self.nodes[slot])
            .ok_or_else(|| NotFound(id.to_string()))
    }

    /// Top-level nodes in declaration order.
    pub fn roots(&self) -> Vec<&Node> {
        self.roots.iter().map(|&slot| &self.nodes[slot]).collect()
    }

    /// Direct children of `id` in declared display order.
    pub fn children(&self, id: &str) -> Result<Vec<&Node>, NotFound> {
        let node = self.get(id)?;
        Ok(self.resolve(&node.child_ids))
    }

    /// Nodes from the root down to `id`, inclusive. Used for breadcrumbs and
    /// for revealing search matches.
    pub fn path(&self, id: &str) -> Result<Vec<&Node>, NotFound> {
        let mut node = self.get(id)?;
        let mut path = Vec::with_capacity(node.depth + 1);
        path.push(node);
        while let Some(parent_id) = node.parent_id.as_deref() {
            node = self.get(parent_id)?;
            path.push(node);
        }
        path.reverse();
        Ok(path)
    }

    /// Every node below `id`, pre-order, excluding `id` itself.
    pub fn descendants(&self, id: &str) -> Result<Vec<&Node>, NotFound> {
        let node = self.get(id)?;
        let mut out = Vec::new();
        let mut stack: Vec<&Node> = self.resolve(&node.child_ids);
        stack.reverse();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.resolve(&next.child_ids).into_iter().rev());
        }
        Ok(out)
    }

    /// Nodes whose `target_ref` equals `target_ref`, in pre-order. The same
    /// document can be reachable from several places in the forest.
    pub fn find_by_target(&self, target_ref: &str) -> Vec<&Node> {
        self.by_target
            .get(target_ref)
            .map(|slots| slots.iter().map(|&slot| &self.nodes[slot]).collect())
            .unwrap_or_default()
    }

    /// All nodes in pre-order, declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    fn resolve(&self, ids: &[String]) -> Vec<&Node> {
        ids.iter()
            .filter_map(|id| self.by_id.get(id.as_str()))
            .map(|&slot| &self.nodes[slot])
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
