//! Open-ended formatting attributes attached to delta operations.
//!
//! Quill mixes run-level keys (bold, link, color, ...) and line-level keys
//! (header, list, align, ...) in one object. The reduction pass never splits
//! them apart; it attaches the whole object wherever the operation lands, so
//! this type keeps the raw JSON map and only offers typed views of the keys
//! the pass itself reads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys Quill applies to a whole line rather than a run.
pub const LINE_ATTRIBUTE_KEYS: &[&str] = &[
    "header",
    "align",
    "direction",
    "indent",
    "blockquote",
    "code-block",
    "list",
];

/// Attribute object of an operation, run or paragraph.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Map<String, Value>);

/// Value of the line-level `list` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Bullet,
    /// Any other list flavour the editor emits (e.g. `checked`)
    Other(String),
}

impl ListKind {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "ordered" => ListKind::Ordered,
            "bullet" => ListKind::Bullet,
            other => ListKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ListKind::Ordered => "ordered",
            ListKind::Bullet => "bullet",
            ListKind::Other(raw) => raw,
        }
    }
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy when constructing deltas in code.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// The paragraph's list kind, if the `list` key holds a string.
    pub fn list(&self) -> Option<ListKind> {
        self.0
            .get("list")
            .and_then(Value::as_str)
            .map(ListKind::parse)
    }

    /// Hyperlink target of a run, if any.
    pub fn link(&self) -> Option<&str> {
        self.0.get("link").and_then(Value::as_str)
    }

    /// Line-level keys present in this object.
    pub fn line_keys(&self) -> impl Iterator<Item = &str> {
        self.0
            .keys()
            .map(String::as_str)
            .filter(|key| LINE_ATTRIBUTE_KEYS.contains(key))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Attributes {
    fn from(map: Map<String, Value>) -> Self {
        Attributes(map)
    }
}
