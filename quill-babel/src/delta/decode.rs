//! Decoding raw Quill JSON into typed operations.
//!
//! The editor hands us loosely shaped JSON: `insert` is either a string or an
//! object keyed by the embed type. Shape errors are caller contract violations,
//! so decoding stops at the first bad operation and reports its index instead of
//! guessing.

use super::attributes::Attributes;
use super::ops::{Embed, Insert, Operation};
use crate::error::DeltaError;
use serde_json::{Map, Value};

pub(crate) fn decode_document(value: Value) -> Result<Vec<Operation>, DeltaError> {
    let ops = match value {
        Value::Array(ops) => ops,
        Value::Object(mut doc) => match doc.remove("ops") {
            Some(Value::Array(ops)) => ops,
            Some(other) => {
                return Err(DeltaError::Json(format!(
                    "'ops' must be an array, found {}",
                    describe(&other)
                )))
            }
            None => return Err(DeltaError::Json("missing 'ops' array".to_string())),
        },
        other => {
            return Err(DeltaError::Json(format!(
                "expected a delta object or an array of operations, found {}",
                describe(&other)
            )))
        }
    };

    ops.into_iter()
        .enumerate()
        .map(|(index, op)| decode_operation(index, op))
        .collect()
}

fn decode_operation(index: usize, value: Value) -> Result<Operation, DeltaError> {
    let mut op = match value {
        Value::Object(op) => op,
        other => {
            return Err(DeltaError::Json(format!(
                "operation {index} must be an object, found {}",
                describe(&other)
            )))
        }
    };

    let attributes = match op.remove("attributes") {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => Some(Attributes::from(map)),
        Some(_) => return Err(DeltaError::InvalidAttributes { index }),
    };

    let insert = match op.remove("insert") {
        None => return Err(DeltaError::MissingInsert { index }),
        Some(Value::String(text)) => Insert::Text(text),
        Some(Value::Object(embed)) => decode_embed(index, embed)?,
        Some(other) => {
            return Err(DeltaError::InvalidInsert {
                index,
                found: describe(&other).to_string(),
            })
        }
    };

    Ok(Operation { insert, attributes })
}

fn decode_embed(index: usize, embed: Map<String, Value>) -> Result<Insert, DeltaError> {
    if embed.len() > 1 {
        return Err(DeltaError::AmbiguousEmbed {
            index,
            keys: embed.keys().cloned().collect(),
        });
    }
    let Some((key, value)) = embed.into_iter().next() else {
        return Err(DeltaError::UnknownEmbed { index, key: None });
    };
    let payload = match value {
        Value::String(payload) => payload,
        _ => return Err(DeltaError::InvalidEmbedValue { index, key }),
    };
    match key.as_str() {
        "image" => Ok(Insert::Embed(Embed::Image(payload))),
        "video" => Ok(Insert::Embed(Embed::Video(payload))),
        "formula" => Ok(Insert::Formula(payload)),
        _ => Err(DeltaError::UnknownEmbed {
            index,
            key: Some(key),
        }),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
