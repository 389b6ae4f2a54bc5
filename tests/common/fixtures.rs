//! Static forests used across harnesses.
//!
//! `CLASSES_JS` is a real Doxygen class-hierarchy dump (94 entries, 44 roots,
//! `ProcessorList` reachable from two parents). The smaller forests are the
//! shapes the behavioural tests reason about by hand.

use serde_json::{json, Value};

/// Doxygen `classes.js` as written by the generator.
pub const CLASSES_JS: &str = include_str!("../fixtures/classes.js");

/// Doxygen `about.js`; treated as an opaque blob.
pub const ABOUT_JS: &str = include_str!("../fixtures/about.js");

pub const CLASSES_NODE_COUNT: usize = 94;
pub const CLASSES_ROOT_COUNT: usize = 44;

/// Parsed body of [`CLASSES_JS`].
pub fn classes_forest() -> Value {
    doctree::parse_js_dump(CLASSES_JS)
        .expect("classes.js fixture must parse")
        .value
}

/// `[("A", "", [("B", "u1", none)]), ("C", "u2", none)]`
pub fn abc_forest() -> Value {
    json!([
        ["A", "", [["B", "u1", null]]],
        ["C", "u2", null]
    ])
}

/// Two children with the same label under one parent.
pub fn duplicate_sibling_forest() -> Value {
    json!([
        ["Root", "", [
            ["X", "x-first.html", null],
            ["X", "x-second.html", null]
        ]]
    ])
}

/// Three levels: `Base → Mid → Leaf`, plus an unrelated root.
pub fn deep_forest() -> Value {
    json!([
        ["Base", "classBase.html", [
            ["Mid", "classMid.html", [
                ["Leaf", "classLeaf.html", null]
            ]],
            ["Other", "classOther.html", null]
        ]],
        ["Standalone", "classStandalone.html", null]
    ])
}
