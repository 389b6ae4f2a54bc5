//! Navigation controller: expand/collapse and search state over one
//! [`Snapshot`].
//!
//! # State
//!
//! - `expanded_ids`: nodes the tree shows opened.
//! - `active_query` / `active_matches`: the current filter and its ranked hits.
//!
//! User-visible expansion and search state are decoupled: a query may open
//! ancestors of its matches, but nothing here ever closes a node the user
//! opened, and [`reset`](NavigationController::reset) leaves expansion alone.
//!
//! Every transition is synchronous. A failing call (`NotFound`) changes
//! nothing.

use crate::event::NavEvent;
use crate::view::{NodeView, VisibleRow};
use doctree_core::config::NavigationConfig;
use doctree_core::{Node, NodeStore, NotFound, Payload, Snapshot};
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

#[derive(Debug)]
pub struct NavigationController {
    snapshot: Arc<Snapshot>,
    config: NavigationConfig,
    expanded_ids: BTreeSet<String>,
    active_query: String,
    active_matches: Vec<String>,
}

impl NavigationController {
    pub fn new(snapshot: Arc<Snapshot>, config: NavigationConfig) -> Self {
        let expanded_ids = snapshot
            .store()
            .iter()
            .filter(|n| n.has_children() && n.depth < config.initial_expand_depth)
            .map(|n| n.id.clone())
            .collect();
        Self {
            snapshot,
            config,
            expanded_ids,
            active_query: String::new(),
            active_matches: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Shared handle to the current snapshot, for other readers.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn store(&self) -> &NodeStore {
        self.snapshot.store()
    }

    pub fn payload(&self) -> Option<&Payload> {
        self.snapshot.payload()
    }

    pub fn expanded_ids(&self) -> &BTreeSet<String> {
        &self.expanded_ids
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_ids.contains(id)
    }

    pub fn active_query(&self) -> &str {
        &self.active_query
    }

    pub fn active_matches(&self) -> &[String] {
        &self.active_matches
    }

    /// Run a query without touching controller state.
    pub fn search(&self, text: &str) -> Vec<String> {
        self.snapshot.index().search(text)
    }

    pub fn node_view(&self, id: &str) -> Result<NodeView, NotFound> {
        self.store().get(id).map(NodeView::from)
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    pub fn expand(&mut self, id: &str) -> Result<(), NotFound> {
        self.store().get(id)?;
        if self.expanded_ids.insert(id.to_string()) {
            tracing::debug!(node = %id, "nav: expand");
        }
        Ok(())
    }

    pub fn collapse(&mut self, id: &str) -> Result<(), NotFound> {
        self.store().get(id)?;
        if self.expanded_ids.remove(id) {
            tracing::debug!(node = %id, "nav: collapse");
        }
        Ok(())
    }

    /// Flip expansion of `id`; returns whether it is now expanded.
    pub fn toggle(&mut self, id: &str) -> Result<bool, NotFound> {
        if self.is_expanded(id) {
            self.collapse(id)?;
            Ok(false)
        } else {
            self.expand(id)?;
            Ok(true)
        }
    }

    pub fn expand_all(&mut self) {
        let ids: Vec<String> = self
            .store()
            .iter()
            .filter(|n| n.has_children())
            .map(|n| n.id.clone())
            .collect();
        self.expanded_ids.extend(ids);
        tracing::debug!(expanded = self.expanded_ids.len(), "nav: expand all");
    }

    pub fn collapse_all(&mut self) {
        self.expanded_ids.clear();
        tracing::debug!("nav: collapse all");
    }

    /// Replace the active query, recompute matches, and open every ancestor
    /// of every match. Expansion only grows.
    pub fn set_query(&mut self, text: &str) {
        self.active_query = text.to_string();
        self.active_matches = self.snapshot.index().search(text);

        if self.config.auto_expand_matches {
            let opened = reveal_ancestors(
                self.snapshot.store(),
                &self.active_matches,
                &mut self.expanded_ids,
            );
            tracing::debug!(
                query = %text,
                matches = self.active_matches.len(),
                opened,
                "nav: query set"
            );
        } else {
            tracing::debug!(query = %text, matches = self.active_matches.len(), "nav: query set");
        }
    }

    /// Clear the query and its matches. Expansion is left as it is.
    pub fn reset(&mut self) {
        self.active_query.clear();
        self.active_matches.clear();
        tracing::debug!("nav: query reset");
    }

    /// Route a [`NavEvent`] to the matching transition.
    pub fn apply(&mut self, event: &NavEvent) -> Result<(), NotFound> {
        match event {
            NavEvent::Expand(id) => self.expand(id),
            NavEvent::Collapse(id) => self.collapse(id),
            NavEvent::Toggle(id) => self.toggle(id).map(|_| ()),
            NavEvent::ExpandAll => {
                self.expand_all();
                Ok(())
            }
            NavEvent::CollapseAll => {
                self.collapse_all();
                Ok(())
            }
            NavEvent::SetQuery(text) => {
                self.set_query(text);
                Ok(())
            }
            NavEvent::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    /// Swap in a rebuilt snapshot. Expansion of ids that no longer exist is
    /// dropped and the active query is re-run against the new index.
    pub fn replace_snapshot(&mut self, snapshot: Arc<Snapshot>) {
        self.snapshot = snapshot;
        let store = self.snapshot.store();
        let before = self.expanded_ids.len();
        self.expanded_ids.retain(|id| store.contains(id));
        let dropped = before - self.expanded_ids.len();

        if !self.active_query.is_empty() {
            let query = std::mem::take(&mut self.active_query);
            self.set_query(&query);
        }
        tracing::info!(
            nodes = self.store().len(),
            dropped_expansions = dropped,
            "nav: snapshot replaced"
        );
    }

    // -----------------------------------------------------------------------
    // Flattening
    // -----------------------------------------------------------------------

    /// Pre-order rows for every root and every node under an expanded one.
    pub fn visible(&self) -> Vec<VisibleRow> {
        let store = self.store();
        let matched: HashSet<&str> = self.active_matches.iter().map(String::as_str).collect();
        let mut rows = Vec::new();
        let mut stack: Vec<&Node> = store.roots();
        stack.reverse();

        while let Some(node) = stack.pop() {
            let expanded = self.is_expanded(&node.id);
            rows.push(VisibleRow {
                depth: node.depth,
                id: node.id.clone(),
                label: node.label.clone(),
                target_ref: node.target_ref.clone(),
                has_children: node.has_children(),
                expanded,
                matched: matched.contains(node.id.as_str()),
            });
            if expanded {
                if let Ok(children) = store.children(&node.id) {
                    stack.extend(children.into_iter().rev());
                }
            }
        }
        rows
    }
}

/// Expand every ancestor of every id in `matches`, returning how many ids were
/// newly opened. A match the store cannot resolve means the index and store
/// disagree; it is logged and skipped.
fn reveal_ancestors(
    store: &NodeStore,
    matches: &[String],
    expanded_ids: &mut BTreeSet<String>,
) -> usize {
    let before = expanded_ids.len();
    for id in matches {
        match store.path(id) {
            Ok(path) => {
                if let Some((_, ancestors)) = path.split_last() {
                    expanded_ids.extend(ancestors.iter().map(|n| n.id.clone()));
                }
            }
            Err(err) => {
                tracing::error!(node = %id, error = %err, "nav: search match missing from store");
            }
        }
    }
    expanded_ids.len() - before
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
