//! Contains the format-agnostic conversion logic.

pub mod delta_to_paragraphs;
pub mod lines;
