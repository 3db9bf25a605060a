//! Rich text document tree
//!
//! This module defines the nodes of the rich text document. Every node
//! serializes as a JSON object whose first key is `type`; the remaining keys
//! follow in declaration order.

use serde::{Deserialize, Serialize};

/// The document root. Exactly one per conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "root")]
pub struct Root {
    pub children: Vec<Block>,
}

impl Root {
    pub fn new(children: Vec<Block>) -> Self {
        Self { children }
    }
}

/// A block-level node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Block {
    /// Heading with level (1-6) and flattened text content
    Heading { level: u8, children: Vec<Inline> },

    /// Paragraph containing inline content
    Paragraph { children: Vec<Inline> },

    /// Ordered or unordered list
    List {
        #[serde(rename = "listType")]
        list_type: ListType,
        children: Vec<ListItem>,
    },
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            children: vec![Inline::Text(Text::plain(text))],
        }
    }

    pub fn paragraph(children: Vec<Inline>) -> Self {
        Block::Paragraph { children }
    }

    /// A paragraph that is present but blank: one empty text run.
    pub fn empty_paragraph() -> Self {
        Block::Paragraph {
            children: vec![Inline::Text(Text::plain(""))],
        }
    }

    pub fn list(list_type: ListType, children: Vec<ListItem>) -> Self {
        Block::List {
            list_type,
            children,
        }
    }
}

/// List flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Ordered,
    Unordered,
}

/// A list item holding inline content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "list-item")]
pub struct ListItem {
    pub children: Vec<Inline>,
}

impl ListItem {
    pub fn new(children: Vec<Inline>) -> Self {
        Self { children }
    }

    /// An item that is present but blank: one empty text run.
    pub fn empty() -> Self {
        Self {
            children: vec![Inline::Text(Text::plain(""))],
        }
    }
}

/// An inline node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Inline {
    /// Hyperlink with a single text child
    Link {
        url: String,
        children: Vec<Inline>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },

    /// Text run with formatting flags
    Text(Text),
}

impl Inline {
    pub fn text(value: impl Into<String>) -> Self {
        Inline::Text(Text::plain(value))
    }

    pub fn link(url: impl Into<String>, text: impl Into<String>, title: Option<String>) -> Self {
        Inline::Link {
            url: url.into(),
            children: vec![Inline::text(text)],
            title,
        }
    }

    /// Stamp a formatting mark. Links are left untouched.
    pub fn apply(&mut self, mark: Mark) {
        if let Inline::Text(text) = self {
            text.apply(mark);
        }
    }
}

/// Formatting flags a text run can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Strikethrough,
}

/// A run of text. Flags are serialized only when set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strikethrough: bool,
}

impl Text {
    /// Text without any formatting
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn with(mut self, mark: Mark) -> Self {
        self.apply(mark);
        self
    }

    pub fn apply(&mut self, mark: Mark) {
        *self.flag_mut(mark) = true;
    }

    pub fn has(&self, mark: Mark) -> bool {
        match mark {
            Mark::Bold => self.bold,
            Mark::Italic => self.italic,
            Mark::Underline => self.underline,
            Mark::Strikethrough => self.strikethrough,
        }
    }

    fn flag_mut(&mut self, mark: Mark) -> &mut bool {
        match mark {
            Mark::Bold => &mut self.bold,
            Mark::Italic => &mut self.italic,
            Mark::Underline => &mut self.underline,
            Mark::Strikethrough => &mut self.strikethrough,
        }
    }
}

fn is_false(flag: &bool) -> bool {
    !*flag
}
