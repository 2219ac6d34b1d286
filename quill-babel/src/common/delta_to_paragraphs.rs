//! Converts a flat delta operation stream into the nested paragraph model.
//!
//! # The High-Level Concept
//!
//! A delta never says "a paragraph starts here". Paragraph boundaries are
//! newline characters, either as a standalone `"\n"` insert (which also carries
//! the formatting of the line it closes) or buried inside ordinary text. The
//! converter walks the operations once, left to right, keeping a "current
//! paragraph" (always the last element of the output list) that runs are
//! appended to until a newline closes it.
//!
//! # The Algorithm
//!
//! Each operation is classified (see [`Operation::classify`]) and dispatched:
//!
//! 1. **Embed** (image, video): push a paragraph holding only the embed, then
//!    open a fresh run paragraph. Embeds close any open ordered-list group.
//! 2. **Formula**: append a formula run to the current paragraph.
//! 3. **Line break** (`"\n"` exactly): give the current paragraph the
//!    operation's attributes (if any), feed its `list` kind to the list
//!    tracker, then open the next paragraph.
//! 4. **Text**: split on `\n`. Text pieces become runs carrying the operation's
//!    attributes (empty pieces included); each newline opens a new paragraph and
//!    closes any ordered-list group.
//!
//! Any handler except the embed handler first opens a paragraph when the
//! output is still empty.
//!
//! # Ordered List Grouping
//!
//! The delta marks each line as "part of an ordered list" but not which list.
//! Grouping is inferred from adjacency: the first ordered line after anything
//! else starts a new group, later consecutive ordered lines continue it, and any
//! other paragraph (bullet, plain, embed) ends it.
//!
//! # Session State
//!
//! The output list, the group flag and the collected metadata live in a
//! [`DeltaReducer`] built fresh inside every call of [`delta_to_paragraphs`], so
//! concurrent or repeated conversions never share state.

use crate::common::lines::{split_lines, Segment};
use crate::delta::{Attributes, Classified, Embed, ListKind, Operation};
use crate::model::{EmbedParagraph, Hyperlink, Paragraph, ParsedDelta, Run, Setup};
use tracing::{debug, trace, warn};

/// Error type for delta-to-paragraph conversion
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// A run was appended while the current paragraph holds an embed
    RunInEmbedParagraph { index: usize },
    /// A run was appended before any paragraph was opened
    NoOpenParagraph { index: usize },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::RunInEmbedParagraph { index } => {
                write!(f, "Operation {index} appends a run to an embed paragraph")
            }
            ConversionError::NoOpenParagraph { index } => {
                write!(f, "Operation {index} appends a run with no open paragraph")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// Owns the output paragraph list; the last paragraph is the current one.
#[derive(Debug, Default)]
struct ParagraphBuilder {
    paragraphs: Vec<Paragraph>,
}

impl ParagraphBuilder {
    fn open_paragraph(&mut self) {
        self.paragraphs.push(Paragraph::empty());
    }

    fn ensure_open(&mut self) {
        if self.paragraphs.is_empty() {
            self.open_paragraph();
        }
    }

    /// Push a paragraph holding only `embed`, then open the next run paragraph.
    ///
    /// The embed operation's own attributes are kept on the embed paragraph
    /// instead of being dropped. They never reach the list tracker or the
    /// hyperlink collector.
    fn close_with_embed(&mut self, embed: Embed, attributes: Option<Attributes>) {
        self.paragraphs
            .push(Paragraph::Embed(EmbedParagraph { embed, attributes }));
        self.open_paragraph();
    }

    fn append_run(&mut self, index: usize, run: Run) -> Result<(), ConversionError> {
        match self.paragraphs.last_mut() {
            Some(Paragraph::Runs(paragraph)) => {
                paragraph.text_runs.push(run);
                Ok(())
            }
            Some(Paragraph::Embed(_)) => Err(ConversionError::RunInEmbedParagraph { index }),
            None => Err(ConversionError::NoOpenParagraph { index }),
        }
    }

    /// Closes the current paragraph by giving it its line attributes.
    fn attach_line_attributes(&mut self, attributes: Attributes) {
        match self.paragraphs.last_mut() {
            Some(Paragraph::Runs(paragraph)) => paragraph.attributes = Some(attributes),
            Some(Paragraph::Embed(paragraph)) => paragraph.attributes = Some(attributes),
            None => {}
        }
        self.open_paragraph();
    }
}

/// Counts groupings of consecutive ordered-list paragraphs.
#[derive(Debug, Default)]
struct ListGroupTracker {
    group_open: bool,
    groups: usize,
}

impl ListGroupTracker {
    fn observe(&mut self, kind: Option<&ListKind>) {
        match kind {
            Some(ListKind::Ordered) => {
                if !self.group_open {
                    self.group_open = true;
                    self.groups += 1;
                    debug!(group = self.groups, "ordered list group started");
                }
            }
            _ => self.group_open = false,
        }
    }
}

#[derive(Debug, Default)]
struct MetadataCollector {
    hyperlinks: Vec<Hyperlink>,
}

impl MetadataCollector {
    fn record_hyperlink(&mut self, text: &str, link: &str) {
        self.hyperlinks.push(Hyperlink {
            text: text.to_string(),
            link: link.to_string(),
        });
    }
}

/// Per-conversion state for one pass over a delta.
#[derive(Debug, Default)]
pub struct DeltaReducer {
    builder: ParagraphBuilder,
    lists: ListGroupTracker,
    metadata: MetadataCollector,
}

impl DeltaReducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process the operation at position `index`.
    pub fn reduce(&mut self, index: usize, op: &Operation) -> Result<(), ConversionError> {
        let classified = op.classify();
        trace!(index, kind = ?classified.kind(), "classified operation");
        let attributes = op.attributes.as_ref();
        match classified {
            Classified::Embed(embed) => {
                self.insert_embed(embed, attributes);
                Ok(())
            }
            Classified::Formula(formula) => {
                self.builder.ensure_open();
                self.builder
                    .append_run(index, Run::formula(formula, attributes.cloned()))
            }
            Classified::LineBreak => {
                self.insert_line_break(attributes);
                Ok(())
            }
            Classified::Text(text) => self.insert_text(index, text, attributes),
        }
    }

    /// Consume the reducer and return the finished document.
    pub fn finish(self) -> ParsedDelta {
        debug!(
            paragraphs = self.builder.paragraphs.len(),
            numbered_lists = self.lists.groups,
            hyperlinks = self.metadata.hyperlinks.len(),
            "delta converted"
        );
        ParsedDelta {
            paragraphs: self.builder.paragraphs,
            setup: Setup {
                numbered_lists: self.lists.groups,
                hyperlinks: self.metadata.hyperlinks,
            },
        }
    }

    fn insert_embed(&mut self, embed: &Embed, attributes: Option<&Attributes>) {
        self.builder.close_with_embed(embed.clone(), attributes.cloned());
        self.lists.observe(None);
    }

    fn insert_line_break(&mut self, attributes: Option<&Attributes>) {
        // A leading "\n" still closes a (blank) paragraph of its own.
        self.builder.ensure_open();
        match attributes {
            Some(attributes) => {
                self.lists.observe(attributes.list().as_ref());
                self.builder.attach_line_attributes(attributes.clone());
            }
            None => {
                self.lists.observe(None);
                self.builder.open_paragraph();
            }
        }
    }

    fn insert_text(
        &mut self,
        index: usize,
        text: &str,
        attributes: Option<&Attributes>,
    ) -> Result<(), ConversionError> {
        self.builder.ensure_open();
        if !text.contains('\n') {
            return self.insert_text_run(index, text, attributes);
        }

        if let Some(keys) = attributes.map(|a| a.line_keys().collect::<Vec<_>>()) {
            if !keys.is_empty() {
                warn!(
                    index,
                    ?keys,
                    "line attributes on a multi-line text insert are applied to runs only"
                );
            }
        }

        for segment in split_lines(text) {
            match segment {
                Segment::Text(piece) => self.insert_text_run(index, piece, attributes)?,
                Segment::Break => {
                    self.builder.open_paragraph();
                    self.lists.observe(None);
                }
            }
        }
        Ok(())
    }

    fn insert_text_run(
        &mut self,
        index: usize,
        text: &str,
        attributes: Option<&Attributes>,
    ) -> Result<(), ConversionError> {
        self.builder
            .append_run(index, Run::text(text, attributes.cloned()))?;
        if let Some(link) = attributes.and_then(Attributes::link) {
            self.metadata.record_hyperlink(text, link);
        }
        Ok(())
    }
}

/// Converts a delta's operations into paragraphs plus document metadata.
///
/// # Returns
///
/// * `Ok(ParsedDelta)` - The paragraph list and its setup metadata
/// * `Err(ConversionError)` - If a run would land in an embed paragraph
///
/// # Example
///
/// ```ignore
/// use quill_babel::common::delta_to_paragraphs::delta_to_paragraphs;
/// use quill_babel::delta::Operation;
///
/// let parsed = delta_to_paragraphs(&[Operation::text("Hello there!")])?;
/// assert_eq!(parsed.paragraphs.len(), 1);
/// ```
pub fn delta_to_paragraphs(ops: &[Operation]) -> Result<ParsedDelta, ConversionError> {
    debug!(ops = ops.len(), "converting delta");
    let mut reducer = DeltaReducer::new();
    for (index, op) in ops.iter().enumerate() {
        reducer.reduce(index, op)?;
    }
    Ok(reducer.finish())
}
