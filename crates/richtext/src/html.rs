//! HTML fragment parsing.
//!
//! Wraps `scraper` (html5ever) and exposes the small surface the converter
//! needs: tag names, ordered mixed children, attribute lookup and text
//! content. Parsing is tolerant; any string yields a fragment.

use scraper::{ElementRef, Html, Node};

/// A parsed HTML fragment
pub struct Fragment {
    document: Html,
}

/// A child of an element: either a text node or an element.
///
/// Comments, doctypes and processing instructions are not represented.
#[derive(Debug, Clone, Copy)]
pub enum Child<'a> {
    Text(&'a str),
    Element(ElementRef<'a>),
}

impl<'a> Child<'a> {
    pub fn as_element(&self) -> Option<ElementRef<'a>> {
        match self {
            Child::Element(element) => Some(*element),
            Child::Text(_) => None,
        }
    }
}

/// Parse an HTML string into a fragment.
///
/// # Example
///
/// ```rust
/// use richtext::parse_fragment;
///
/// let fragment = parse_fragment("<p>Hello <em>World</em></p>");
/// assert!(fragment.has_markup());
/// assert!(!parse_fragment("Hello &amp; welcome").has_markup());
/// ```
pub fn parse_fragment(html: &str) -> Fragment {
    Fragment {
        document: Html::parse_fragment(html),
    }
}

impl Fragment {
    /// The synthetic `<html>` element holding the fragment's top-level nodes
    pub fn root(&self) -> ElementRef<'_> {
        self.document.root_element()
    }

    /// Whether the fragment contains at least one element
    pub fn has_markup(&self) -> bool {
        self.root()
            .descendants()
            .skip(1)
            .any(|node| node.value().is_element())
    }

    /// Deepest element nesting below the root, measured without recursion.
    ///
    /// Stops early and returns the depth reached once it exceeds `limit`.
    pub fn depth(&self, limit: usize) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root(), 0usize)];

        while let Some((element, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            if deepest > limit {
                break;
            }
            stack.extend(
                element
                    .children()
                    .filter_map(ElementRef::wrap)
                    .map(|child| (child, depth + 1)),
            );
        }

        deepest
    }
}

/// Ordered children of an element
pub fn children<'a>(element: ElementRef<'a>) -> impl Iterator<Item = Child<'a>> {
    element.children().filter_map(|node| match node.value() {
        Node::Text(text) => Some(Child::Text(&text.text)),
        Node::Element(_) => ElementRef::wrap(node).map(Child::Element),
        _ => None,
    })
}

/// Lowercase local tag name
pub fn tag_name<'a>(element: &ElementRef<'a>) -> &'a str {
    element.value().name()
}

/// Attribute value by name
pub fn attr<'a>(element: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

/// All descendant text, concatenated in document order
pub fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Descendant text with surrounding whitespace removed
pub fn trimmed_text(element: ElementRef<'_>) -> String {
    let text = text_content(element);
    let trimmed = text.trim();
    if trimmed.len() == text.len() {
        text
    } else {
        trimmed.to_string()
    }
}
