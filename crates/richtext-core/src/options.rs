//! Configuration options for JSON serialization

/// JSON layout options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// Single line, no whitespace between tokens
    #[default]
    Compact,
    /// Indented, one key per line
    Pretty,
}

/// Options for document serialization
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Output layout
    pub json_style: JsonStyle,
}
