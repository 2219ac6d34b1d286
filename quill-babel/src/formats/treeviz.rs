//! Treeviz formatter for the paragraph model
//!
//! A one-line-per-node view of a converted delta, meant for eyeballing how a
//! delta was split into paragraphs and runs.
//!
//! The format is:
//! <prefix><connector> <icon> <label> {attributes}
//!
//! Labels are truncated to 30 characters. Example:
//!
//! ```text
//! ⧉ 3 paragraphs, 1 numbered lists, 0 hyperlinks
//! ├─ ¶ Then this is the first bullet… {list=ordered}
//! │  ├─ ◦ "Then this is the first bullet…"
//! │  └─ ◦ "formatted text in bold" {bold=true}
//! ├─ ▣ base64string
//! └─ ¶ (empty)
//! ```
//!
//! Options:
//! - `attributes`: "false" hides paragraph and run attributes

use super::icons::get_icon;
use crate::delta::Attributes;
use crate::error::FormatError;
use crate::format::{check_known_options, parse_bool_option, Format};
use crate::model::{Paragraph, ParsedDelta, Run};
use serde_json::Value;
use std::collections::HashMap;

const MAX_LABEL_CHARS: usize = 30;

/// Format implementation for the tree visualization
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Paragraph tree visualization"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn serialize(&self, doc: &ParsedDelta) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc, true))
    }

    fn serialize_with_options(
        &self,
        doc: &ParsedDelta,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        check_known_options(self.name(), options, &["attributes"])?;
        let show_attributes = match options.get("attributes") {
            Some(raw) => parse_bool_option("attributes", raw)?,
            None => true,
        };
        Ok(to_treeviz_str(doc, show_attributes))
    }
}

pub fn to_treeviz_str(doc: &ParsedDelta, show_attributes: bool) -> String {
    let mut output = format!(
        "{} {} paragraphs, {} numbered lists, {} hyperlinks\n",
        get_icon("Document"),
        doc.paragraphs.len(),
        doc.setup.numbered_lists,
        doc.setup.hyperlinks.len()
    );

    let count = doc.paragraphs.len();
    for (i, paragraph) in doc.paragraphs.iter().enumerate() {
        format_paragraph(&mut output, paragraph, i + 1 == count, show_attributes);
    }
    output
}

fn format_paragraph(output: &mut String, paragraph: &Paragraph, is_last: bool, show: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    let child_prefix = if is_last { "   " } else { "│  " };
    let attrs = attributes_suffix(paragraph.attributes(), show);

    match paragraph {
        Paragraph::Embed(embed) => {
            let key = embed.embed.key();
            output.push_str(&format!(
                "{connector} {} {}{attrs}\n",
                get_icon(key),
                truncate(embed.embed.source())
            ));
        }
        Paragraph::Runs(runs) => {
            let text = paragraph.plain_text();
            let label = if runs.text_runs.is_empty() {
                "(empty)".to_string()
            } else if text.is_empty() {
                "(no text)".to_string()
            } else {
                truncate(&text)
            };
            output.push_str(&format!(
                "{connector} {} {label}{attrs}\n",
                get_icon("Paragraph")
            ));

            let run_count = runs.text_runs.len();
            for (j, run) in runs.text_runs.iter().enumerate() {
                let run_connector = if j + 1 == run_count { "└─" } else { "├─" };
                let run_attrs = attributes_suffix(run.attributes(), show);
                let body = match run {
                    Run::Text(t) => format!("{} \"{}\"", get_icon("Text"), truncate(&t.text)),
                    Run::Formula(f) => format!("{} {}", get_icon("Formula"), truncate(&f.formula)),
                };
                output.push_str(&format!("{child_prefix}{run_connector} {body}{run_attrs}\n"));
            }
        }
    }
}

fn attributes_suffix(attributes: Option<&Attributes>, show: bool) -> String {
    match attributes {
        Some(attributes) if show => {
            let pairs: Vec<String> = attributes
                .iter()
                .map(|(key, value)| match value {
                    Value::String(s) => format!("{key}={s}"),
                    other => format!("{key}={other}"),
                })
                .collect();
            format!(" {{{}}}", pairs.join(", "))
        }
        _ => String::new(),
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_LABEL_CHARS {
        text.to_string()
    } else {
        let head: String = text.chars().take(MAX_LABEL_CHARS).collect();
        format!("{head}…")
    }
}
