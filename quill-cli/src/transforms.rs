//! CLI-specific transforms
//!
//! This module defines all the transform combinations available to `inspect`.
//! Each transform is a stage + format combination (e.g., "paragraphs-treeviz").
//!
//! ## Transform Pipeline
//!
//! 1. **Decoding** - Quill JSON → typed operations
//!    - `delta-json`: Operations with their classifier verdict
//!    - `delta-simple`: One operation kind per line
//!    - `delta-pprint`: Operation kinds, with a blank line after each line break
//!
//! 2. **Conversion** - Operations → paragraph model
//!    - `paragraphs-json`: The converted document
//!    - `paragraphs-treeviz`: Tree visualization with Unicode icons
//!
//! ## Extra Parameters
//!
//! - `attributes`: "false" hides attributes in `paragraphs-treeviz`
//!
//! Example: `quill inspect doc.json paragraphs-treeviz --extra-attributes false`

use quill_babel::delta::{Delta, Insert, OpKind, Operation};
use quill_babel::formats::json::to_json_string;
use quill_babel::formats::treeviz::to_treeviz_str;
use quill_babel::format::parse_bool_option;
use quill_babel::parse_delta;
use serde_json::{json, Value};
use std::collections::HashMap;

/// All available CLI transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] = &[
    "delta-json",
    "delta-simple",
    "delta-pprint",
    "paragraphs-json",
    "paragraphs-treeviz",
];

pub const DEFAULT_TRANSFORM: &str = "paragraphs-treeviz";

/// Execute a named transform on delta source text with optional extra parameters
///
/// # Examples
///
/// ```ignore
/// let params = HashMap::new();
/// let output = execute_transform(r#"[{"insert":"Hi"}]"#, "paragraphs-treeviz", &params)?;
/// ```
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    let delta = Delta::from_json(source).map_err(|e| format!("Transform failed: {e}"))?;

    match transform_name {
        "delta-json" => serde_json::to_string_pretty(&ops_to_json(&delta.ops))
            .map_err(|e| format!("JSON serialization failed: {e}")),
        "delta-simple" => Ok(ops_to_simple(&delta.ops)),
        "delta-pprint" => Ok(ops_to_pprint(&delta.ops)),
        "paragraphs-json" => {
            let doc = parse_delta(&delta).map_err(|e| format!("Transform failed: {e}"))?;
            to_json_string(&doc, true).map_err(|e| e.to_string())
        }
        "paragraphs-treeviz" => {
            let doc = parse_delta(&delta).map_err(|e| format!("Transform failed: {e}"))?;
            let show_attributes = match extra_params.get("attributes") {
                Some(raw) => parse_bool_option("attributes", raw).map_err(|e| e.to_string())?,
                None => true,
            };
            Ok(to_treeviz_str(&doc, show_attributes))
        }
        _ => Err(format!("Unknown transform: {transform_name}")),
    }
}

fn kind_name(kind: OpKind) -> &'static str {
    match kind {
        OpKind::Embed => "EMBED",
        OpKind::Formula => "FORMULA",
        OpKind::LineBreak => "LINE_BREAK",
        OpKind::Text => "TEXT",
    }
}

/// Convert operations to a JSON-friendly structure
fn ops_to_json(ops: &[Operation]) -> Value {
    json!(ops
        .iter()
        .enumerate()
        .map(|(index, op)| {
            let insert = match &op.insert {
                Insert::Text(text) => json!(text),
                Insert::Embed(embed) => json!(embed),
                Insert::Formula(formula) => json!({ "formula": formula }),
            };
            json!({
                "index": index,
                "kind": kind_name(op.kind()),
                "insert": insert,
                "attributes": op.attributes,
            })
        })
        .collect::<Vec<_>>())
}

fn ops_to_simple(ops: &[Operation]) -> String {
    ops.iter()
        .map(|op| kind_name(op.kind()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn ops_to_pprint(ops: &[Operation]) -> String {
    let mut output = String::new();
    for op in ops {
        let kind = op.kind();
        output.push_str(kind_name(kind));
        output.push('\n');
        if kind == OpKind::LineBreak {
            output.push('\n');
        }
    }
    output
}
