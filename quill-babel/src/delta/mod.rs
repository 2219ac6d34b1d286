//! The delta input model.
//!
//! A delta is the flat, ordered list of insert operations a Quill editor
//! produces for a document. Paragraph boundaries are implicit: a `"\n"` insert
//! closes the line before it and carries that line's formatting.

pub mod attributes;
mod decode;
pub mod ops;

pub use attributes::{Attributes, ListKind};
pub use ops::{Classified, Embed, Insert, OpKind, Operation};

use crate::error::DeltaError;
use serde_json::Value;

/// A full document delta.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Delta {
    pub ops: Vec<Operation>,
}

impl Delta {
    pub fn new(ops: Vec<Operation>) -> Self {
        Delta { ops }
    }

    /// Decode Quill JSON. Accepts `{"ops": [...]}` or a bare `[...]`.
    pub fn from_json(source: &str) -> Result<Self, DeltaError> {
        let value: Value =
            serde_json::from_str(source).map_err(|e| DeltaError::Json(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, DeltaError> {
        decode::decode_document(value).map(Delta::new)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl From<Vec<Operation>> for Delta {
    fn from(ops: Vec<Operation>) -> Self {
        Delta::new(ops)
    }
}
