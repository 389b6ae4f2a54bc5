//! Snapshot: one loaded document set, meaning the [`NodeStore`], its derived
//! [`SearchIndex`], and the opaque [`Payload`] that rides along with it.
//!
//! Snapshots are immutable. Readers share them behind an `Arc`; a reload
//! builds a brand-new snapshot and swaps the reference, so nobody ever sees a
//! half-built structure.

use crate::builder::TreeBuilder;
use crate::config::IndexConfig;
use crate::error::BuildError;
use crate::search::SearchIndex;
use crate::store::NodeStore;
use crate::types::{ForestEntry, Payload};
use chrono::{DateTime, Utc};
use serde_json::Value;

#[derive(Debug)]
pub struct Snapshot {
    store: NodeStore,
    index: SearchIndex,
    payload: Option<Payload>,
    built_at: DateTime<Utc>,
}

impl Snapshot {
    /// Build store and index from a raw forest.
    pub fn from_value(forest: &Value, config: &IndexConfig) -> Result<Self, BuildError> {
        Self::from_store(TreeBuilder::from_value(forest)?, config)
    }

    /// Build store and index from a typed forest.
    pub fn from_entries(entries: &[ForestEntry], config: &IndexConfig) -> Result<Self, BuildError> {
        Self::from_store(TreeBuilder::from_entries(entries)?, config)
    }

    fn from_store(store: NodeStore, config: &IndexConfig) -> Result<Self, BuildError> {
        let started = std::time::Instant::now();
        let index = SearchIndex::build(&store, config)?;
        tracing::info!(
            nodes = store.len(),
            ngrams = index.stats().ngrams,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "snapshot: built"
        );
        Ok(Self {
            store,
            index,
            payload: None,
            built_at: Utc::now(),
        })
    }

    /// Attach the passthrough payload. It is stored as given.
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }
}
