//! Doxygen navigation dump parsing.
//!
//! Doxygen emits its class hierarchy as a script, e.g.
//!
//! ```text
//! var classes =
//! [
//!     [ "AccessClass", "classAccessClass.html", [ ... ] ],
//!     [ "AudioComponent", "classAudioComponent.html", null ],
//! ];
//! ```
//!
//! The right-hand side is plain JSON. [`parse_js_dump`] strips the
//! `var <name> =` wrapper (and any leading comments) and hands the body to
//! `serde_json`. A bare JSON document is accepted as well.

use crate::SourceError;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static DUMP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)\A\s*(?:(?://[^\n]*(?:\n|\z)|/\*.*?\*/)\s*)*var\s+([A-Za-z_$][\w$]*)\s*=\s*(.*?)\s*;?\s*\z",
    )
    .expect("dump pattern must compile")
});

/// A parsed dump: the declared variable name (if any) and its JSON value.
#[derive(Debug, Clone, PartialEq)]
pub struct JsDump {
    pub name: Option<String>,
    pub value: Value,
}

const BYTE_ORDER_MARK: char = '\u{feff}';

pub fn parse_js_dump(text: &str) -> Result<JsDump, SourceError> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    if let Some(caps) = DUMP_PATTERN.captures(text) {
        let name = caps.get(1).map(|m| m.as_str().to_string());
        let body = caps.get(2).map_or("", |m| m.as_str());
        let value = serde_json::from_str(body)?;
        tracing::debug!(name = ?name, bytes = body.len(), "sources: js dump parsed");
        return Ok(JsDump { name, value });
    }

    let trimmed = text.trim_start();
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        let value = serde_json::from_str(trimmed)?;
        tracing::debug!(bytes = trimmed.len(), "sources: bare json parsed");
        return Ok(JsDump { name: None, value });
    }

    Err(SourceError::NotADump)
}
