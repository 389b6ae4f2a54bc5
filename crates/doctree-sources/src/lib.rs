//! doctree-sources: input adapters for doctree.
//!
//! Each adapter reads something the documentation generator wrote and turns
//! it into what [`doctree_core`] consumes: a forest as a
//! [`serde_json::Value`], or an opaque [`Payload`].

pub mod dump;

pub use dump::{parse_js_dump, JsDump};

use doctree_core::Payload;
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("forest body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("input is neither a `var <name> = ...;` dump nor a JSON document")]
    NotADump,
}

/// Read a forest from a `.js` navigation dump or a plain `.json` file.
pub fn load_forest(path: &Path) -> Result<Value, SourceError> {
    let text = read(path)?;
    let dump = parse_js_dump(&text)?;
    tracing::debug!(path = %path.display(), name = ?dump.name, "sources: forest loaded");
    Ok(dump.value)
}

/// Read a passthrough payload. The file content is kept exactly as written.
pub fn load_payload(path: &Path) -> Result<Payload, SourceError> {
    let text = read(path)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "sources: payload loaded");
    Ok(Payload::new(text))
}

fn read(path: &Path) -> Result<String, SourceError> {
    std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}
