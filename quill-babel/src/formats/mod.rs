//! Format implementations
//!
//! Each format serializes a converted [`crate::model::ParsedDelta`] to text.

pub mod icons;
pub mod json;
pub mod treeviz;

pub use json::JsonFormat;
pub use treeviz::TreevizFormat;
