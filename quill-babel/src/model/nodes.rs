//! Core data structures of the paragraph model.
//!
//! Field names follow the JSON shape consumers of the converter expect
//! (`textRuns`, `numberedLists`). `attributes` is omitted whenever the input
//! carried none: absence, not an empty object, means "no formatting".

use crate::delta::{Attributes, Embed, ListKind};
use crate::error::FormatError;
use crate::formats::json::to_json_string;
use serde::{Deserialize, Serialize};

/// The converted document: paragraphs plus document-level metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedDelta {
    pub paragraphs: Vec<Paragraph>,
    pub setup: Setup,
}

/// Document metadata collected during conversion.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setup {
    /// Number of distinct groupings of consecutive ordered-list paragraphs
    pub numbered_lists: usize,
    /// Every linked run, in input order, duplicates included
    pub hyperlinks: Vec<Hyperlink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hyperlink {
    pub text: String,
    pub link: String,
}

/// A paragraph holds either one embed or a (possibly empty) sequence of runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Paragraph {
    Embed(EmbedParagraph),
    Runs(RunParagraph),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedParagraph {
    pub embed: Embed,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunParagraph {
    pub text_runs: Vec<Run>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

/// A contiguous span inside a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Run {
    Text(TextRun),
    Formula(FormulaRun),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaRun {
    pub formula: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

impl ParsedDelta {
    /// Compact JSON document.
    pub fn to_json(&self) -> Result<String, FormatError> {
        to_json_string(self, false)
    }

    pub fn to_json_pretty(&self) -> Result<String, FormatError> {
        to_json_string(self, true)
    }
}

impl Paragraph {
    /// A fresh, empty run paragraph.
    pub fn empty() -> Self {
        Paragraph::Runs(RunParagraph::default())
    }

    pub fn is_embed(&self) -> bool {
        matches!(self, Paragraph::Embed(_))
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Paragraph::Embed(p) => p.attributes.as_ref(),
            Paragraph::Runs(p) => p.attributes.as_ref(),
        }
    }

    /// Runs of a run paragraph; `None` for embeds.
    pub fn runs(&self) -> Option<&[Run]> {
        match self {
            Paragraph::Embed(_) => None,
            Paragraph::Runs(p) => Some(&p.text_runs),
        }
    }

    pub fn embed(&self) -> Option<&Embed> {
        match self {
            Paragraph::Embed(p) => Some(&p.embed),
            Paragraph::Runs(_) => None,
        }
    }

    pub fn list_kind(&self) -> Option<ListKind> {
        self.attributes().and_then(Attributes::list)
    }

    /// Concatenated text of the text runs; formulas and embeds contribute nothing.
    pub fn plain_text(&self) -> String {
        self.runs()
            .unwrap_or_default()
            .iter()
            .filter_map(|run| match run {
                Run::Text(t) => Some(t.text.as_str()),
                Run::Formula(_) => None,
            })
            .collect()
    }
}

impl Run {
    pub fn text(text: impl Into<String>, attributes: Option<Attributes>) -> Self {
        Run::Text(TextRun {
            text: text.into(),
            attributes,
        })
    }

    pub fn formula(formula: impl Into<String>, attributes: Option<Attributes>) -> Self {
        Run::Formula(FormulaRun {
            formula: formula.into(),
            attributes,
        })
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Run::Text(r) => r.attributes.as_ref(),
            Run::Formula(r) => r.attributes.as_ref(),
        }
    }
}
