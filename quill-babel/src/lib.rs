//! Quill delta to paragraph model conversion
//!
//!     This crate converts a Quill "delta" (the flat, ordered list of insert operations a
//!     Quill editor produces) into a structured document: paragraphs holding text and
//!     formula runs or a single embed, per-run and per-paragraph formatting, and document
//!     metadata (how many distinct numbered lists there are, and every hyperlink).
//!
//!     This is a pure lib: no IO, no printing, no env vars. Fetching deltas and rendering
//!     the paragraph model (HTML, PDF, DOCX) belong to the callers. The quill-cli crate is
//!     the shell around it.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── delta                   # Input model + JSON decoding
//!     ├── model                   # Output paragraph model
//!     ├── common                  # The conversion pass
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     └── formats
//!         ├── json.rs             # The paragraph document as JSON
//!         └── treeviz.rs          # Tree visualization
//!
//! Core Algorithm
//!
//!     The delta encodes paragraph boundaries implicitly: a bare "\n" insert closes the
//!     current line and carries that line's formatting, and text inserts may hold any number
//!     of newlines. List identity is implicit too; consecutive ordered-list lines form one
//!     list. A single forward pass (./common/delta_to_paragraphs.rs) rebuilds the nested
//!     structure, with all of its state created per call.
//!
//! Testing
//!     tests
//!     ├── lib.rs                  # Aggregates the test modules below
//!     ├── conversion
//!     │   ├── fixtures.rs         # Editor fixtures: delta in, paragraphs out
//!     │   ├── errors.rs           # Malformed input
//!     │   └── properties.rs       # proptest invariants of the pass
//!     └── formats
//!         ├── json.rs
//!         └── treeviz.rs          # Snapshots of the tree view
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub mod common;
pub mod delta;
pub mod model;

pub use common::delta_to_paragraphs::delta_to_paragraphs;
pub use delta::{Attributes, Delta, Embed, Insert, ListKind, Operation};
pub use error::{BabelError, ConversionError, DeltaError, FormatError};
pub use format::Format;
pub use model::{Paragraph, ParsedDelta, Run};
pub use registry::FormatRegistry;

/// Converts a decoded delta into the paragraph model.
pub fn parse_delta(delta: &Delta) -> Result<ParsedDelta, ConversionError> {
    delta_to_paragraphs(&delta.ops)
}

/// Decodes Quill JSON (`{"ops": [...]}` or a bare op array) and converts it.
///
/// ```ignore
/// let parsed = quill_babel::parse_quill_delta(r#"{"ops":[{"insert":"Hello there!"}]}"#)?;
/// assert_eq!(parsed.paragraphs.len(), 1);
/// assert_eq!(parsed.setup.numbered_lists, 0);
/// ```
pub fn parse_quill_delta(source: &str) -> Result<ParsedDelta, BabelError> {
    let delta = Delta::from_json(source)?;
    Ok(parse_delta(&delta)?)
}
