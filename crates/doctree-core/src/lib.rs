//! doctree-core: hierarchical documentation symbol index.
//!
//! This crate holds the data layers; everything here is synchronous and
//! immutable once built.
//!
//! # Architecture
//!
//! ```text
//! forest ──► TreeBuilder ──► NodeStore ──► SearchIndex
//!                                │              │
//!                                └── Snapshot ──┘──► navigation controller
//! ```
//!
//! The search index is derived data: it is rebuilt whenever the store is
//! replaced and refers to nodes by id only.

pub mod builder;
pub mod config;
pub mod error;
pub mod search;
pub mod snapshot;
pub mod store;
pub mod types;

pub use builder::{derive_id, TreeBuilder};
pub use error::{BuildError, EntryPath, IndexError, NotFound};
pub use search::SearchIndex;
pub use snapshot::Snapshot;
pub use store::NodeStore;
pub use types::{ForestEntry, Node, Payload};
