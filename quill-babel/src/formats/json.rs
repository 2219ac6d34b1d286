//! JSON output format
//!
//! Emits the paragraph model as the `{paragraphs, setup}` document consumers
//! of the converter read. Options:
//!
//! - `pretty`: "true" (default) for indented output, "false" for one line

use crate::error::FormatError;
use crate::format::{check_known_options, parse_bool_option, Format};
use crate::model::ParsedDelta;
use std::collections::HashMap;

/// Format implementation for the JSON paragraph document
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Paragraph model as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn serialize(&self, doc: &ParsedDelta) -> Result<String, FormatError> {
        to_json_string(doc, true)
    }

    fn serialize_with_options(
        &self,
        doc: &ParsedDelta,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        check_known_options(self.name(), options, &["pretty"])?;
        let pretty = match options.get("pretty") {
            Some(raw) => parse_bool_option("pretty", raw)?,
            None => true,
        };
        to_json_string(doc, pretty)
    }
}

pub fn to_json_string(doc: &ParsedDelta, pretty: bool) -> Result<String, FormatError> {
    let result = if pretty {
        serde_json::to_string_pretty(doc)
    } else {
        serde_json::to_string(doc)
    };
    result.map_err(|e| FormatError::SerializationError(format!("JSON serialization failed: {e}")))
}
