//! Convert a parsed HTML fragment to a rich text document
//!
//! Block parsing runs over the fragment's top-level nodes and delegates
//! inline content to the extractor. Recursion follows element nesting, so
//! callers bound the fragment depth before converting.

mod block;
mod inline;

use richtext_core::{Block, Inline, Root};
use scraper::ElementRef;

use crate::html::{children, tag_name, Fragment};
use crate::tags::{TagCategory, TagTable};

/// Shared state for one conversion
pub(crate) struct Context<'t> {
    tags: &'t TagTable,
}

impl<'t> Context<'t> {
    pub(crate) fn new(tags: &'t TagTable) -> Self {
        Self { tags }
    }

    fn category(&self, element: &ElementRef<'_>) -> TagCategory {
        self.tags.category(tag_name(element))
    }
}

/// Convert a fragment containing markup. The result always holds at least
/// one block.
pub(crate) fn convert_markup(fragment: &Fragment, tags: &TagTable) -> Root {
    let ctx = Context::new(tags);
    let mut blocks = block::parse_siblings(&ctx, children(fragment.root()));
    if blocks.is_empty() {
        blocks.push(Block::empty_paragraph());
    }
    Root::new(blocks)
}

/// Convert input without any element: the trimmed input becomes one
/// paragraph. Only character references are decoded; line endings and
/// control characters stay as written.
pub(crate) fn convert_plain(input: &str) -> Root {
    let text = html_escape::decode_html_entities(input.trim());
    Root::new(vec![Block::paragraph(vec![Inline::text(text)])])
}
