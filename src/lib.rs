//! doctree: hierarchical documentation symbol index.
//!
//! Loads a documentation generator's class hierarchy (a Doxygen `classes.js`
//! style forest), validates it into an immutable node store, indexes every
//! label for filter-as-you-type search, and tracks expand/collapse state for a
//! navigation UI. The three workspace crates are re-exported here so
//! integration tests and embedding applications can import them from one
//! place.
//!
//! # Architecture
//!
//! ```text
//! sources ──► TreeBuilder ──► NodeStore ──► SearchIndex
//!                                 │              │
//!                                 └── Snapshot ──┴──► NavigationController ──► renderer
//! ```
//!
//! Nothing here spawns threads or does I/O outside [`open`] / [`reload`].

pub use doctree_core::{
    builder, config, derive_id, error, search, snapshot, store, types, BuildError, EntryPath,
    ForestEntry, IndexError, Node, NodeStore, NotFound, Payload, SearchIndex, Snapshot,
    TreeBuilder,
};
pub use doctree_nav::{build, build_with, NavEvent, NavigationController, NodeView, VisibleRow};
pub use doctree_sources::{load_forest, load_payload, parse_js_dump, JsDump, SourceError};

use anyhow::Context;
use std::path::Path;
use std::sync::Arc;

/// Load a forest file (and optionally a passthrough payload) from disk and
/// build a controller over it.
pub fn open(
    forest_path: &Path,
    payload_path: Option<&Path>,
    config: &config::Config,
) -> anyhow::Result<NavigationController> {
    let snapshot = load_snapshot(forest_path, payload_path, config)?;
    Ok(NavigationController::new(
        Arc::new(snapshot),
        config.navigation.clone(),
    ))
}

/// Rebuild from disk and swap the result into `controller`. On any error the
/// controller keeps its current snapshot.
pub fn reload(
    controller: &mut NavigationController,
    forest_path: &Path,
    payload_path: Option<&Path>,
    config: &config::Config,
) -> anyhow::Result<()> {
    let snapshot = load_snapshot(forest_path, payload_path, config)?;
    controller.replace_snapshot(Arc::new(snapshot));
    Ok(())
}

fn load_snapshot(
    forest_path: &Path,
    payload_path: Option<&Path>,
    config: &config::Config,
) -> anyhow::Result<Snapshot> {
    let forest = load_forest(forest_path)
        .with_context(|| format!("loading forest from {}", forest_path.display()))?;
    let mut snapshot = Snapshot::from_value(&forest, &config.index)
        .with_context(|| format!("building index for {}", forest_path.display()))?;

    if let Some(path) = payload_path {
        let payload = load_payload(path)
            .with_context(|| format!("loading payload from {}", path.display()))?;
        snapshot = snapshot.with_payload(payload);
    }

    tracing::info!(
        forest = %forest_path.display(),
        nodes = snapshot.store().len(),
        payload = snapshot.payload().is_some(),
        "doctree: snapshot loaded"
    );
    Ok(snapshot)
}
