//! Error types shared by the build and lookup paths.

use std::fmt;

/// Sibling-index path from the top of the input to an entry, e.g. `[0, 6, 7]`
/// for the eighth child of the seventh child of the first root.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryPath(pub Vec<usize>);

impl EntryPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn child(&self, index: usize) -> Self {
        let mut path = self.0.clone();
        path.push(index);
        Self(path)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for EntryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{index}")?;
        }
        write!(f, "]")
    }
}

/// Why a build was aborted. No store is ever published alongside one of these.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BuildError {
    /// The input does not follow the `(label, target_ref, children)` contract.
    #[error("malformed entry at {path}: {reason}")]
    MalformedEntry { path: EntryPath, reason: String },

    /// Two derived ids coincided. Id derivation is injective for well-formed
    /// input, so this is always a defect in the builder.
    #[error("duplicate id {id:?} derived at {path}")]
    DuplicateId { id: String, path: EntryPath },

    #[error("search index construction failed: {0}")]
    Index(#[from] IndexError),
}

impl BuildError {
    /// The offending entry's location, when the error is tied to one.
    pub fn path(&self) -> Option<&EntryPath> {
        match self {
            BuildError::MalformedEntry { path, .. } | BuildError::DuplicateId { path, .. } => {
                Some(path)
            }
            BuildError::Index(_) => None,
        }
    }
}

/// A caller referenced an id absent from the current snapshot.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("node not found: {0:?}")]
pub struct NotFound(pub String);

impl NotFound {
    pub fn id(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("fst construction failed: {0}")]
    Fst(#[from] fst::Error),
}

impl PartialEq for IndexError {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for IndexError {}
