//! Tree builder: turns a serialized nested forest into a validated
//! [`NodeStore`].
//!
//! # Input
//!
//! An ordered array of `[label, target_ref, children]` entries, where
//! `children` is `null` or another array of the same shape. This is exactly
//! the body of a Doxygen `classes.js` navigation dump.
//!
//! # Ids
//!
//! Ids are derived, not read: each entry gets the segment
//! `escape(label)` plus `~N` when it is the N-th repeat of that label among its
//! siblings, appended to its parent's id with `/`. Escaping `%`, `/` and `~`
//! keeps the mapping injective, so reordering unrelated siblings never changes
//! an id and duplicate labels never collide.
//!
//! # Guarantees
//!
//! One depth-first pass; every node is written exactly once, after its
//! children are known. Either the whole store is returned or a
//! [`BuildError`] pointing at the offending entry.

use crate::error::{BuildError, EntryPath};
use crate::store::NodeStore;
use crate::types::{ForestEntry, Node};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

const SEPARATOR: char = '/';
const OCCURRENCE_MARK: char = '~';

// ---------------------------------------------------------------------------
// Entry views
// ---------------------------------------------------------------------------

/// A borrowed view over one input entry, raw JSON or typed.
#[derive(Clone, Copy)]
enum EntryRef<'a> {
    Json(&'a Value),
    Typed(&'a ForestEntry),
}

#[derive(Clone, Copy)]
enum Siblings<'a> {
    Json(&'a [Value]),
    Typed(&'a [ForestEntry]),
}

struct Fields<'a> {
    label: &'a str,
    target_ref: &'a str,
    children: Option<Siblings<'a>>,
}

impl<'a> Siblings<'a> {
    fn len(self) -> usize {
        match self {
            Siblings::Json(values) => values.len(),
            Siblings::Typed(entries) => entries.len(),
        }
    }

    fn get(self, index: usize) -> EntryRef<'a> {
        match self {
            Siblings::Json(values) => EntryRef::Json(&values[index]),
            Siblings::Typed(entries) => EntryRef::Typed(&entries[index]),
        }
    }
}

impl<'a> EntryRef<'a> {
    /// Check the 3-tuple contract and borrow the fields out.
    fn fields(self) -> Result<Fields<'a>, String> {
        match self {
            EntryRef::Typed(entry) => {
                if entry.label.is_empty() {
                    return Err("label must not be empty".to_string());
                }
                Ok(Fields {
                    label: &entry.label,
                    target_ref: &entry.target_ref,
                    children: (!entry.children.is_empty())
                        .then_some(Siblings::Typed(&entry.children)),
                })
            }
            EntryRef::Json(value) => {
                let items = value.as_array().ok_or_else(|| {
                    format!(
                        "entry must be a [label, target_ref, children] array, found {}",
                        kind(value)
                    )
                })?;
                if items.len() != 3 {
                    return Err(format!(
                        "entry must have exactly 3 elements, found {}",
                        items.len()
                    ));
                }
                let label = match &items[0] {
                    Value::String(s) if !s.is_empty() => s.as_str(),
                    Value::String(_) => return Err("label must not be empty".to_string()),
                    Value::Null => return Err("label is missing".to_string()),
                    other => return Err(format!("label must be a string, found {}", kind(other))),
                };
                let target_ref = match &items[1] {
                    Value::String(s) => s.as_str(),
                    Value::Null => "",
                    other => {
                        return Err(format!(
                            "target_ref must be a string or null, found {}",
                            kind(other)
                        ))
                    }
                };
                let children = match &items[2] {
                    Value::Null => None,
                    Value::Array(values) if values.is_empty() => None,
                    Value::Array(values) => Some(Siblings::Json(values)),
                    other => {
                        return Err(format!(
                            "children must be an array or null, found {}",
                            kind(other)
                        ))
                    }
                };
                Ok(Fields {
                    label,
                    target_ref,
                    children,
                })
            }
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Id derivation
// ---------------------------------------------------------------------------

/// Derive the id of the `occurrence`-th (0-based) sibling labelled `label`
/// under `parent`.
pub fn derive_id(parent: Option<&str>, label: &str, occurrence: usize) -> String {
    let mut id = match parent {
        Some(parent) => {
            let mut id = String::with_capacity(parent.len() + label.len() + 1);
            id.push_str(parent);
            id.push(SEPARATOR);
            id
        }
        None => String::with_capacity(label.len()),
    };
    for c in label.chars() {
        match c {
            '%' => id.push_str("%25"),
            SEPARATOR => id.push_str("%2F"),
            OCCURRENCE_MARK => id.push_str("%7E"),
            c => id.push(c),
        }
    }
    if occurrence > 0 {
        id.push(OCCURRENCE_MARK);
        id.push_str(&occurrence.to_string());
    }
    id
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct TreeBuilder {
    /// Pre-order slots; each is filled once its subtree is complete.
    slots: Vec<Option<Node>>,
    seen: HashSet<String>,
}

impl TreeBuilder {
    /// Build from raw JSON, e.g. the parsed body of a `classes.js` dump.
    pub fn from_value(forest: &Value) -> Result<NodeStore, BuildError> {
        let roots = forest.as_array().ok_or_else(|| BuildError::MalformedEntry {
            path: EntryPath::root(),
            reason: format!("forest must be an array, found {}", kind(forest)),
        })?;
        Self::default().run(Siblings::Json(roots))
    }

    /// Build from a typed forest.
    pub fn from_entries(entries: &[ForestEntry]) -> Result<NodeStore, BuildError> {
        Self::default().run(Siblings::Typed(entries))
    }

    fn run(mut self, roots: Siblings<'_>) -> Result<NodeStore, BuildError> {
        self.visit(roots, None, 0, &EntryPath::root())?;

        let nodes: Vec<Node> = self.slots.into_iter().flatten().collect();
        let store = NodeStore::from_nodes(nodes);
        tracing::debug!(
            nodes = store.len(),
            roots = store.roots().len(),
            "tree: built"
        );
        Ok(store)
    }

    /// Visit one sibling list, returning the ids assigned to it in order.
    fn visit(
        &mut self,
        siblings: Siblings<'_>,
        parent: Option<&str>,
        depth: usize,
        path: &EntryPath,
    ) -> Result<Vec<String>, BuildError> {
        let mut ids = Vec::with_capacity(siblings.len());
        let mut occurrences: HashMap<&str, usize> = HashMap::new();

        for index in 0..siblings.len() {
            let entry_path = path.child(index);
            let fields = siblings
                .get(index)
                .fields()
                .map_err(|reason| BuildError::MalformedEntry {
                    path: entry_path.clone(),
                    reason,
                })?;

            let occurrence = occurrences.entry(fields.label).or_insert(0);
            let id = derive_id(parent, fields.label, *occurrence);
            *occurrence += 1;

            if !self.seen.insert(id.clone()) {
                tracing::error!(id = %id, path = %entry_path, "tree: duplicate derived id");
                return Err(BuildError::DuplicateId {
                    id,
                    path: entry_path,
                });
            }

            let slot = self.slots.len();
            self.slots.push(None);

            let child_ids = match fields.children {
                Some(children) => self.visit(children, Some(&id), depth + 1, &entry_path)?,
                None => Vec::new(),
            };

            self.slots[slot] = Some(Node {
                id: id.clone(),
                label: fields.label.to_string(),
                target_ref: fields.target_ref.to_string(),
                parent_id: parent.map(str::to_string),
                child_ids,
                depth,
            });
            ids.push(id);
        }

        Ok(ids)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
