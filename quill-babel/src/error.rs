//! Error types for delta decoding, conversion and format operations

pub use crate::common::delta_to_paragraphs::ConversionError;
use std::fmt;

/// Errors raised while decoding raw Quill JSON into a [`crate::delta::Delta`].
///
/// Every variant that concerns a single operation carries its position in the
/// `ops` array so callers can point at the offending entry.
#[derive(Debug, Clone, PartialEq)]
pub enum DeltaError {
    /// The document is not valid JSON, or not an object/array of ops
    Json(String),
    /// Operation has no `insert` key
    MissingInsert { index: usize },
    /// `insert` is neither a string nor an embed object
    InvalidInsert { index: usize, found: String },
    /// `insert` object names no recognized embed
    UnknownEmbed { index: usize, key: Option<String> },
    /// `insert` object names more than one embed
    AmbiguousEmbed { index: usize, keys: Vec<String> },
    /// Embed payload is not a string
    InvalidEmbedValue { index: usize, key: String },
    /// `attributes` is present but not an object
    InvalidAttributes { index: usize },
}

impl fmt::Display for DeltaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeltaError::Json(msg) => write!(f, "Invalid delta JSON: {msg}"),
            DeltaError::MissingInsert { index } => {
                write!(f, "Operation {index} has no 'insert' field")
            }
            DeltaError::InvalidInsert { index, found } => {
                write!(
                    f,
                    "Operation {index} inserts {found}, expected a string or an embed object"
                )
            }
            DeltaError::UnknownEmbed { index, key: Some(key) } => {
                write!(f, "Operation {index} inserts unknown embed '{key}'")
            }
            DeltaError::UnknownEmbed { index, key: None } => {
                write!(f, "Operation {index} inserts an empty embed object")
            }
            DeltaError::AmbiguousEmbed { index, keys } => {
                write!(
                    f,
                    "Operation {index} inserts more than one embed: {}",
                    keys.join(", ")
                )
            }
            DeltaError::InvalidEmbedValue { index, key } => {
                write!(f, "Operation {index} has a non-string '{key}' embed value")
            }
            DeltaError::InvalidAttributes { index } => {
                write!(f, "Operation {index} has 'attributes' that is not an object")
            }
        }
    }
}

impl std::error::Error for DeltaError {}

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
    /// Unsupported option or operation
    NotSupported(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            FormatError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Any error produced along the decode, convert, serialize pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum BabelError {
    Delta(DeltaError),
    Conversion(ConversionError),
    Format(FormatError),
}

impl fmt::Display for BabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BabelError::Delta(err) => write!(f, "{err}"),
            BabelError::Conversion(err) => write!(f, "{err}"),
            BabelError::Format(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for BabelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BabelError::Delta(err) => Some(err),
            BabelError::Conversion(err) => Some(err),
            BabelError::Format(err) => Some(err),
        }
    }
}

impl From<DeltaError> for BabelError {
    fn from(err: DeltaError) -> Self {
        BabelError::Delta(err)
    }
}

impl From<ConversionError> for BabelError {
    fn from(err: ConversionError) -> Self {
        BabelError::Conversion(err)
    }
}

impl From<FormatError> for BabelError {
    fn from(err: FormatError) -> Self {
        BabelError::Format(err)
    }
}
