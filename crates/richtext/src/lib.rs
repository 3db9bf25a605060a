//! # richtext
//!
//! Convert HTML fragments to a rich text JSON document.
//!
//! The output is a `root` node holding headings, paragraphs and lists, which
//! in turn hold text runs (with bold, italic, underline and strikethrough
//! flags) and links. See [`richtext_core`] for the tree itself.
//!
//! ## Design
//!
//! Conversion is tolerant: any string converts. Tags the converter does not
//! recognize degrade to their plain text, and blank blocks are kept as nodes
//! with one empty text run. Each call is independent and pure, so cells can
//! be converted in parallel with one shared [`RichTextService`].
//!
//! The only failures are resource limits (see [`ConvertOptions`]): input
//! that is too long or nested too deeply is rejected for that cell.
//!
//! ## Example
//!
//! ```rust
//! use richtext::convert_cell;
//!
//! let json = convert_cell(Some("<h2>Title</h2><p>Body</p>")).unwrap();
//! assert!(json.starts_with(r#"{"type":"root","children":[{"type":"heading","level":2"#));
//!
//! // Blank cells are skipped
//! assert_eq!(convert_cell(Some("   ")).unwrap(), "");
//! ```

mod convert;
pub mod html;
pub mod tags;
mod service;
mod utilities;

pub use html::{parse_fragment, Fragment};
pub use richtext_core::{Block, Inline, JsonStyle, ListItem, ListType, Mark, Root, Text};
pub use service::{ConvertOptions, RichTextService};
pub use tags::{TagCategory, TagTable};
pub use utilities::normalize_fragment;

/// Error type for rich text conversion
#[derive(Debug, thiserror::Error)]
pub enum RichTextError {
    #[error("Markup nested too deeply: depth {depth} exceeds limit {limit}")]
    NestingTooDeep { depth: usize, limit: usize },

    #[error("Input too large: {len} bytes exceeds limit {limit}")]
    InputTooLarge { len: usize, limit: usize },

    #[error(transparent)]
    Json(#[from] richtext_core::JsonError),
}

pub type Result<T> = std::result::Result<T, RichTextError>;

/// Convert a single cell with default options.
///
/// Returns an empty string for missing or blank input.
pub fn convert_cell(raw: Option<&str>) -> Result<String> {
    RichTextService::new().convert_cell(raw)
}
