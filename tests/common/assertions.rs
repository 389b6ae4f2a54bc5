//! Domain-specific assertion macros for doctree harnesses.
//!
//! These add context-rich failure messages that make it clear *which* store
//! invariant was violated and for *which* node.

use doctree::NodeStore;

// ---------------------------------------------------------------------------
// Id resolution
// ---------------------------------------------------------------------------

/// Assert that every id in a list resolves in the store.
///
/// ```rust
/// assert_all_resolve!(store, nav.active_matches());
/// ```
#[macro_export]
macro_rules! assert_all_resolve {
    ($store:expr, $ids:expr) => {{
        let store: &doctree::NodeStore = &$store;
        for id in $ids.iter() {
            let id: &str = id.as_ref();
            if let Err(err) = store.get(id) {
                panic!("assert_all_resolve! failed: {err}");
            }
        }
    }};
}

/// Assert that a search returns exactly these ids, in this order.
///
/// ```rust
/// assert_search!(index, "spike", ["SpikeObject"]);
/// ```
#[macro_export]
macro_rules! assert_search {
    ($index:expr, $query:expr, [$($id:expr),* $(,)?]) => {{
        let actual: Vec<String> = $index.search($query);
        let expected: Vec<String> = vec![$($id.to_string()),*];
        if actual != expected {
            panic!(
                "assert_search! failed for query {:?}\n  expected: {:#?}\n  actual:   {:#?}",
                $query, expected, actual
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Structural invariants
// ---------------------------------------------------------------------------

/// Check referential integrity and parent/depth consistency for every node.
pub fn assert_store_invariants(store: &NodeStore) {
    for node in store.iter() {
        for child_id in &node.child_ids {
            let child = store
                .get(child_id)
                .unwrap_or_else(|e| panic!("child of {:?} does not resolve: {e}", node.id));
            assert_eq!(
                child.parent_id.as_deref(),
                Some(node.id.as_str()),
                "child {:?} does not name {:?} as its parent",
                child.id,
                node.id
            );
            assert_eq!(child.depth, node.depth + 1, "depth of {:?}", child.id);
        }
        match &node.parent_id {
            Some(parent_id) => {
                let parent = store
                    .get(parent_id)
                    .unwrap_or_else(|e| panic!("parent of {:?} does not resolve: {e}", node.id));
                assert!(
                    parent.child_ids.contains(&node.id),
                    "{:?} is missing from its parent's child list",
                    node.id
                );
            }
            None => assert_eq!(node.depth, 0, "root {:?} must be depth 0", node.id),
        }
        let path = store.path(&node.id).expect("path of a stored node");
        assert_eq!(path.len(), node.depth + 1, "path length of {:?}", node.id);
    }
}
