//! Paragraph model produced from a delta.
//!
//! Embeds always sit in a paragraph of their own; every other paragraph holds
//! an ordered list of text and formula runs.

pub mod nodes;

pub use nodes::{
    EmbedParagraph, FormulaRun, Hyperlink, Paragraph, ParsedDelta, Run, RunParagraph, Setup,
    TextRun,
};
