//! Format trait definition
//!
//! This module defines the Format trait every output format implements. A
//! format turns a converted [`ParsedDelta`] into text. Rendering to rich
//! targets (HTML, PDF, DOCX) is left to downstream consumers; the formats here
//! expose the paragraph model itself.

use crate::error::FormatError;
use crate::model::ParsedDelta;
use std::collections::HashMap;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn serialize(&self, doc: &ParsedDelta) -> Result<String, FormatError> {
///         Ok(format!("{} paragraphs", doc.paragraphs.len()))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "json", "treeviz")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    /// Used for format detection from output filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Serialize a converted document
    fn serialize(&self, doc: &ParsedDelta) -> Result<String, FormatError>;

    /// Serialize a converted document, optionally using extra parameters.
    ///
    /// Formats without options can rely on the default implementation, which
    /// rejects any parameter it is given.
    fn serialize_with_options(
        &self,
        doc: &ParsedDelta,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(doc)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}

/// Parse a boolean format option ("true", "1", "yes", ...).
pub fn parse_bool_option(key: &str, raw: &str) -> Result<bool, FormatError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(FormatError::NotSupported(format!(
            "Invalid boolean value '{other}' for option '{key}'"
        ))),
    }
}

/// Reject option keys a format does not understand.
pub fn check_known_options(
    format: &str,
    options: &HashMap<String, String>,
    known: &[&str],
) -> Result<(), FormatError> {
    let mut unknown: Vec<&str> = options
        .keys()
        .map(String::as_str)
        .filter(|key| !known.contains(key))
        .collect();
    if unknown.is_empty() {
        return Ok(());
    }
    unknown.sort_unstable();
    Err(FormatError::NotSupported(format!(
        "Format '{format}' does not support option(s): {}",
        unknown.join(", ")
    )))
}
