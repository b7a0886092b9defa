//! Document shape detection.
//!
//! Exports carry no type marker, so the kind of a document is sniffed from
//! its JSON shape alone: top-level type, key presence, and — for flat
//! message lists — the number of distinct author usernames. No field is
//! trusted to declare its own type.

use std::collections::BTreeSet;
use std::fmt;

use serde_json::Value;

/// The detected shape of an export document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocKind {
    /// A plain channel log: a flat message list.
    Chat,
    /// A direct-message log: a flat list with exactly two authors, or a
    /// wrapper with `channels` and `messages`.
    Dm,
    /// A search-result log: a wrapper with `total_results` and `messages`.
    Search,
    /// Anything else; unknown documents are skipped, not converted.
    Unknown,
}

impl DocKind {
    /// Returns the lowercase tag used in output file names.
    pub fn as_str(self) -> &'static str {
        match self {
            DocKind::Chat => "chat",
            DocKind::Dm => "dm",
            DocKind::Search => "search",
            DocKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a parsed export document by shape.
///
/// A flat list must open with a message object carrying both a `timestamp`
/// and an `author` key to be recognized at all; exactly two distinct
/// author usernames make it a dm, anything else a chat. A genuine
/// two-person channel log is therefore indistinguishable from a dm — that
/// ambiguity comes with the export format and is preserved, because output
/// naming depends on it.
pub fn classify(doc: &Value) -> DocKind {
    match doc {
        Value::Array(items) => classify_list(items),
        Value::Object(map) => {
            if map.contains_key("total_results") && map.contains_key("messages") {
                DocKind::Search
            } else if map.contains_key("channels") && map.contains_key("messages") {
                DocKind::Dm
            } else {
                DocKind::Unknown
            }
        }
        _ => DocKind::Unknown,
    }
}

fn classify_list(items: &[Value]) -> DocKind {
    let Some(first) = items.first().and_then(Value::as_object) else {
        return DocKind::Unknown;
    };
    if !first.contains_key("timestamp") || !first.contains_key("author") {
        return DocKind::Unknown;
    }

    let mut usernames = BTreeSet::new();
    for item in items {
        let Some(obj) = item.as_object() else {
            continue;
        };
        if let Some(author) = obj.get("author") {
            let name = author
                .get("username")
                .and_then(Value::as_str)
                .unwrap_or("Unknown");
            usernames.insert(name);
        }
    }

    if usernames.len() == 2 {
        DocKind::Dm
    } else {
        DocKind::Chat
    }
}
