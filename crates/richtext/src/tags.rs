//! Tag classification.
//!
//! Every element is resolved to one [`TagCategory`] before conversion. The
//! built-in table covers the tags the converter understands; anything else
//! is [`TagCategory::Unknown`]. Callers can override single tags through
//! [`TagTable::set`].

use std::collections::HashMap;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use richtext_core::{ListType, Mark};

/// What the converter does with an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCategory {
    /// `h1`..`h6`: heading block with flattened text
    Heading(u8),
    /// `ul` / `ol`: list block built from direct `li` children
    List(ListType),
    /// Paragraph or structural container: recursed at block level
    Container,
    /// Anchor: link with flattened text
    Link,
    /// Formatting wrapper stamping a mark on nested text
    Format(Mark),
    /// Transparent inline wrapper
    InlineContainer,
    /// Dropped with its content
    Skip,
    /// Not recognized: flattened to its text
    Unknown,
}

impl TagCategory {
    /// Block categories end an inline run; everything else joins it
    pub fn is_block(self) -> bool {
        matches!(
            self,
            TagCategory::Heading(_) | TagCategory::List(_) | TagCategory::Container
        )
    }
}

/// Block containers: paragraphs and structural elements
pub const CONTAINER_ELEMENTS: &[&str] = &[
    "p", "div", "section", "article", "main", "aside", "header", "footer", "nav",
    "figure", "figcaption", "address", "blockquote", "pre", "center", "details",
    "summary", "form", "fieldset", "body",
];

/// Transparent inline wrappers
pub const INLINE_CONTAINER_ELEMENTS: &[&str] = &[
    "span", "font", "small", "big", "mark", "abbr", "sub", "sup", "code", "kbd",
    "samp", "q", "time", "label", "bdi", "bdo", "data", "tt",
];

/// Elements dropped together with their content
pub const SKIP_ELEMENTS: &[&str] = &["script", "style", "noscript", "template", "hr", "br"];

const FORMAT_ELEMENTS: &[(&str, Mark)] = &[
    ("em", Mark::Italic),
    ("i", Mark::Italic),
    ("cite", Mark::Italic),
    ("dfn", Mark::Italic),
    ("var", Mark::Italic),
    ("strong", Mark::Bold),
    ("b", Mark::Bold),
    ("u", Mark::Underline),
    ("ins", Mark::Underline),
    ("s", Mark::Strikethrough),
    ("strike", Mark::Strikethrough),
    ("del", Mark::Strikethrough),
];

static BUILTIN: Lazy<HashMap<&'static str, TagCategory>> = Lazy::new(|| {
    let mut table = HashMap::new();

    for (level, tag) in ["h1", "h2", "h3", "h4", "h5", "h6"].into_iter().enumerate() {
        table.insert(tag, TagCategory::Heading(level as u8 + 1));
    }
    table.insert("ul", TagCategory::List(ListType::Unordered));
    table.insert("ol", TagCategory::List(ListType::Ordered));
    table.insert("a", TagCategory::Link);

    for &tag in CONTAINER_ELEMENTS {
        table.insert(tag, TagCategory::Container);
    }
    for &tag in INLINE_CONTAINER_ELEMENTS {
        table.insert(tag, TagCategory::InlineContainer);
    }
    for &tag in SKIP_ELEMENTS {
        table.insert(tag, TagCategory::Skip);
    }
    for &(tag, mark) in FORMAT_ELEMENTS {
        table.insert(tag, TagCategory::Format(mark));
    }

    table
});

/// Category of a tag in the built-in table
pub fn builtin_category(tag: &str) -> TagCategory {
    if let Some(category) = BUILTIN.get(tag) {
        return *category;
    }
    BUILTIN
        .get(tag.to_ascii_lowercase().as_str())
        .copied()
        .unwrap_or(TagCategory::Unknown)
}

/// Tag lookup with caller overrides checked first
#[derive(Debug, Clone, Default)]
pub struct TagTable {
    overrides: IndexMap<String, TagCategory>,
}

impl TagTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the category of a tag
    pub fn set(&mut self, tag: &str, category: TagCategory) {
        self.overrides.insert(tag.to_ascii_lowercase(), category);
    }

    /// Resolve a tag name
    pub fn category(&self, tag: &str) -> TagCategory {
        if self.overrides.is_empty() {
            return builtin_category(tag);
        }
        self.overrides
            .get(tag.to_ascii_lowercase().as_str())
            .copied()
            .unwrap_or_else(|| builtin_category(tag))
    }
}
