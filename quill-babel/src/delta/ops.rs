//! Typed delta operations.

use super::attributes::Attributes;
use serde::{Deserialize, Serialize};

/// An image or video embed. Serializes as `{"image": src}` / `{"video": src}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Embed {
    Image(String),
    Video(String),
}

impl Embed {
    /// The JSON key naming this embed.
    pub fn key(&self) -> &'static str {
        match self {
            Embed::Image(_) => "image",
            Embed::Video(_) => "video",
        }
    }

    pub fn source(&self) -> &str {
        match self {
            Embed::Image(src) | Embed::Video(src) => src,
        }
    }
}

/// What an operation inserts.
#[derive(Debug, Clone, PartialEq)]
pub enum Insert {
    /// Plain text, possibly containing `\n`
    Text(String),
    Embed(Embed),
    /// A formula embed, which behaves as an inline run
    Formula(String),
}

/// Classifier verdict for an operation; first match wins in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Embed,
    Formula,
    /// Insert is exactly `"\n"`
    LineBreak,
    Text,
}

/// A single insert operation of a document delta.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub insert: Insert,
    pub attributes: Option<Attributes>,
}

impl Operation {
    pub fn new(insert: Insert) -> Self {
        Operation {
            insert,
            attributes: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Insert::Text(text.into()))
    }

    pub fn line_break() -> Self {
        Self::text("\n")
    }

    pub fn image(src: impl Into<String>) -> Self {
        Self::new(Insert::Embed(Embed::Image(src.into())))
    }

    pub fn video(src: impl Into<String>) -> Self {
        Self::new(Insert::Embed(Embed::Video(src.into())))
    }

    pub fn formula(formula: impl Into<String>) -> Self {
        Self::new(Insert::Formula(formula.into()))
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Classify the operation, borrowing its payload.
    pub fn classify(&self) -> Classified<'_> {
        match &self.insert {
            Insert::Embed(embed) => Classified::Embed(embed),
            Insert::Formula(formula) => Classified::Formula(formula),
            Insert::Text(text) if text == "\n" => Classified::LineBreak,
            Insert::Text(text) => Classified::Text(text),
        }
    }

    pub fn kind(&self) -> OpKind {
        self.classify().kind()
    }
}

/// An operation's classifier verdict together with the payload it dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classified<'a> {
    Embed(&'a Embed),
    Formula(&'a str),
    LineBreak,
    Text(&'a str),
}

impl Classified<'_> {
    pub fn kind(&self) -> OpKind {
        match self {
            Classified::Embed(_) => OpKind::Embed,
            Classified::Formula(_) => OpKind::Formula,
            Classified::LineBreak => OpKind::LineBreak,
            Classified::Text(_) => OpKind::Text,
        }
    }
}
