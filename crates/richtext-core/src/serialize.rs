//! Document serialization
//!
//! Converts a rich text document to and from its JSON text form. Non-ASCII
//! characters are written as-is, never as `\u` escapes.

use crate::ast::Root;
use crate::options::{JsonStyle, Options};

/// Error raised when a document cannot be written or read as JSON
#[derive(Debug, thiserror::Error)]
#[error("JSON error: {0}")]
pub struct JsonError(#[from] serde_json::Error);

/// Serialize a document to a JSON string
pub fn serialize(root: &Root, options: &Options) -> Result<String, JsonError> {
    let json = match options.json_style {
        JsonStyle::Compact => serde_json::to_string(root)?,
        JsonStyle::Pretty => serde_json::to_string_pretty(root)?,
    };
    Ok(json)
}

/// Read a document back from its JSON form
pub fn from_json(json: &str) -> Result<Root, JsonError> {
    Ok(serde_json::from_str(json)?)
}
