//! doctree-nav: navigation state for tree UIs.
//!
//! The renderer owns painting; this crate owns which nodes are open, what the
//! user is searching for, and what that means for the visible rows.

pub mod controller;
pub mod event;
pub mod view;

pub use controller::NavigationController;
pub use event::NavEvent;
pub use view::{NodeView, VisibleRow};

use doctree_core::config::Config;
use doctree_core::{BuildError, Snapshot};
use serde_json::Value;
use std::sync::Arc;

/// Build a controller over `forest` with the built-in configuration.
pub fn build(forest: &Value) -> Result<NavigationController, BuildError> {
    build_with(forest, &Config::defaults())
}

/// Build a controller over `forest` with an explicit configuration.
pub fn build_with(forest: &Value, config: &Config) -> Result<NavigationController, BuildError> {
    let snapshot = Snapshot::from_value(forest, &config.index)?;
    Ok(NavigationController::new(
        Arc::new(snapshot),
        config.navigation.clone(),
    ))
}
