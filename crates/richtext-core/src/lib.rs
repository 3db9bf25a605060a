//! richtext-core - Rich text document tree and serialization
//!
//! This crate provides the output data structures of the HTML to rich text
//! conversion and their JSON form. It is used by `richtext`, which builds
//! documents from HTML fragments.
//!
//! # Architecture
//!
//! ```text
//! HTML fragment ──richtext──▶ ┌───────────────┐
//!                             │ Rich text AST │ ──▶ JSON string
//!                             └───────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use richtext_core::{serialize, Block, Inline, Mark, Options, Root, Text};
//!
//! let root = Root::new(vec![
//!     Block::heading(1, "Hello World"),
//!     Block::paragraph(vec![
//!         Inline::text("This is "),
//!         Inline::Text(Text::plain("bold").with(Mark::Bold)),
//!     ]),
//! ]);
//!
//! let json = serialize(&root, &Options::default()).unwrap();
//! assert!(json.starts_with(r#"{"type":"root""#));
//! ```

mod ast;
mod options;
mod serialize;

pub use ast::{Block, Inline, ListItem, ListType, Mark, Root, Text};
pub use options::{JsonStyle, Options};
pub use serialize::{from_json, serialize, JsonError};
