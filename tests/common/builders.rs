//! Test builders: ergonomic constructors for forests and controllers.
//!
//! These are designed for readability in test assertions, not for production
//! use. They panic on invalid input rather than returning `Result`.

use doctree::{ForestEntry, NavigationController, Node, NodeStore, TreeBuilder};
use fake::faker::lorem::en::Word;
use fake::Fake;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Route `tracing` output to the test writer. `RUST_LOG=debug cargo test`
/// shows every navigation transition.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();
}

// ---------------------------------------------------------------------------
// Stores and controllers
// ---------------------------------------------------------------------------

pub fn store_of(forest: &Value) -> NodeStore {
    TreeBuilder::from_value(forest).expect("fixture forest must build")
}

pub fn controller_of(forest: &Value) -> NavigationController {
    doctree::build(forest).expect("fixture forest must build")
}

/// Walk a store back into typed entries: roots, then recursive children.
pub fn reconstruct(store: &NodeStore) -> Vec<ForestEntry> {
    fn entry(store: &NodeStore, node: &Node) -> ForestEntry {
        let children = store
            .children(&node.id)
            .expect("child ids must resolve")
            .into_iter()
            .map(|child| entry(store, child))
            .collect();
        ForestEntry::leaf(node.label.clone(), node.target_ref.clone()).with_children(children)
    }
    store.roots().into_iter().map(|root| entry(store, root)).collect()
}

pub fn labels(nodes: &[&Node]) -> Vec<String> {
    nodes.iter().map(|n| n.label.clone()).collect()
}

pub fn ids(nodes: &[&Node]) -> Vec<String> {
    nodes.iter().map(|n| n.id.clone()).collect()
}

// ---------------------------------------------------------------------------
// Synthetic forests
// ---------------------------------------------------------------------------

/// A random CamelCase class name, e.g. `DoloremEditor`.
pub fn class_name() -> String {
    let head: String = Word().fake();
    let tail: String = Word().fake();
    format!("{}{}", capitalise(&head), capitalise(&tail))
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A forest with `roots` top-level entries, each `fanout` wide and `depth`
/// levels deep, labelled with random class names.
pub fn synthetic_forest(roots: usize, fanout: usize, depth: usize) -> Vec<ForestEntry> {
    fn subtree(fanout: usize, depth: usize) -> ForestEntry {
        let label = class_name();
        let target = format!("class{label}.html");
        let children = if depth == 0 {
            Vec::new()
        } else {
            (0..fanout).map(|_| subtree(fanout, depth - 1)).collect()
        };
        ForestEntry::leaf(label, target).with_children(children)
    }
    (0..roots).map(|_| subtree(fanout, depth)).collect()
}
