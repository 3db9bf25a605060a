//! RichTextService - the main entry point for HTML to rich text conversion.

use richtext_core::{JsonStyle, Options, Root};

use crate::convert::{convert_markup, convert_plain};
use crate::html::{parse_fragment, Fragment};
use crate::tags::{TagCategory, TagTable};
use crate::{Result, RichTextError};

/// Options for RichTextService
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Deepest element nesting accepted before a cell is rejected
    pub max_depth: usize,

    /// Longest input, in bytes, accepted before a cell is rejected
    pub max_input_len: usize,

    /// JSON output layout
    pub json_style: JsonStyle,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_depth: 256,
            max_input_len: 8 * 1024 * 1024,
            json_style: JsonStyle::Compact,
        }
    }
}

/// The main service for converting HTML fragments to rich text documents
#[derive(Debug, Clone, Default)]
pub struct RichTextService {
    options: ConvertOptions,
    tags: TagTable,
}

impl RichTextService {
    /// Create a new RichTextService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a RichTextService with custom options
    pub fn with_options(options: ConvertOptions) -> Self {
        Self {
            options,
            tags: TagTable::new(),
        }
    }

    /// Convert an HTML (or plain text) fragment to a document.
    ///
    /// Unlike [`convert_cell`](Self::convert_cell) this always produces a
    /// document, even for blank input.
    pub fn convert(&self, html: &str) -> Result<Root> {
        let html = html.trim();
        self.check_len(html)?;

        let fragment = parse_fragment(html);
        if !fragment.has_markup() {
            return Ok(convert_plain(html));
        }
        self.convert_markup(&fragment)
    }

    /// Convert a single cell to its JSON form.
    ///
    /// Missing or blank cells produce an empty string, meaning no conversion
    /// took place.
    pub fn convert_cell(&self, raw: Option<&str>) -> Result<String> {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Ok(String::new());
        };

        let root = self.convert(raw)?;
        let options = Options {
            json_style: self.options.json_style,
        };
        let json = richtext_core::serialize(&root, &options)?;

        tracing::debug!(
            input_len = raw.len(),
            output_len = json.len(),
            blocks = root.children.len(),
            "Converted cell"
        );
        Ok(json)
    }

    /// Classify a tag differently from the built-in table
    pub fn map_tag(&mut self, tag: &str, category: TagCategory) -> &mut Self {
        self.tags.set(tag, category);
        self
    }

    /// Drop elements with this tag together with their content
    pub fn skip(&mut self, tag: &str) -> &mut Self {
        self.map_tag(tag, TagCategory::Skip)
    }

    /// Get the current options
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ConvertOptions {
        &mut self.options
    }

    fn convert_markup(&self, fragment: &Fragment) -> Result<Root> {
        let limit = self.options.max_depth;
        let depth = fragment.depth(limit);
        if depth > limit {
            tracing::warn!(depth, limit, "Rejecting deeply nested markup");
            return Err(RichTextError::NestingTooDeep { depth, limit });
        }

        Ok(convert_markup(fragment, &self.tags))
    }

    fn check_len(&self, input: &str) -> Result<()> {
        let limit = self.options.max_input_len;
        if input.len() > limit {
            tracing::warn!(len = input.len(), limit, "Rejecting oversized input");
            return Err(RichTextError::InputTooLarge {
                len: input.len(),
                limit,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use richtext_core::{Block, Inline, Mark, Text};

    #[test]
    fn test_simple_paragraph() {
        let service = RichTextService::new();
        let result = service.convert_cell(Some("<p>Hello World</p>")).unwrap();
        assert_eq!(
            result,
            r#"{"type":"root","children":[{"type":"paragraph","children":[{"type":"text","value":"Hello World"}]}]}"#
        );
    }

    #[test]
    fn test_blank_cells() {
        let service = RichTextService::new();
        assert_eq!(service.convert_cell(None).unwrap(), "");
        assert_eq!(service.convert_cell(Some("")).unwrap(), "");
        assert_eq!(service.convert_cell(Some(" \n\t ")).unwrap(), "");
    }

    #[test]
    fn test_convert_blank_is_empty_paragraph() {
        let service = RichTextService::new();
        assert_eq!(
            service.convert("   ").unwrap(),
            Root::new(vec![Block::paragraph(vec![Inline::text("")])])
        );
    }

    #[test]
    fn test_plain_text_is_single_paragraph() {
        let service = RichTextService::new();
        assert_eq!(
            service.convert("  line one\nline two  ").unwrap(),
            Root::new(vec![Block::paragraph(vec![Inline::text("line one\nline two")])])
        );
    }

    #[test]
    fn test_plain_text_keeps_crlf() {
        let service = RichTextService::new();
        let json = service.convert_cell(Some("line one\r\nline two\r\n")).unwrap();
        assert_eq!(
            json,
            r#"{"type":"root","children":[{"type":"paragraph","children":[{"type":"text","value":"line one\r\nline two"}]}]}"#
        );
    }

    #[test]
    fn test_plain_text_with_angle_brackets() {
        let service = RichTextService::new();
        assert_eq!(
            service.convert("1 < 2 and 3 > 2").unwrap(),
            Root::new(vec![Block::paragraph(vec![Inline::text("1 < 2 and 3 > 2")])])
        );
    }

    #[test]
    fn test_heading_and_emphasis() {
        let service = RichTextService::new();
        assert_eq!(
            service.convert("<h1>Title</h1><p><strong><em>x</em></strong></p>").unwrap(),
            Root::new(vec![
                Block::heading(1, "Title"),
                Block::paragraph(vec![Inline::Text(
                    Text::plain("x").with(Mark::Bold).with(Mark::Italic)
                )]),
            ])
        );
    }

    #[test]
    fn test_depth_limit() {
        let service = RichTextService::with_options(ConvertOptions {
            max_depth: 8,
            ..Default::default()
        });
        let html = format!("{}x{}", "<div>".repeat(10), "</div>".repeat(10));
        match service.convert(&html) {
            Err(RichTextError::NestingTooDeep { depth, limit }) => {
                assert_eq!(limit, 8);
                assert!(depth > 8);
            }
            other => panic!("expected NestingTooDeep, got {other:?}"),
        }

        let shallow = format!("{}x{}", "<div>".repeat(8), "</div>".repeat(8));
        assert!(service.convert(&shallow).is_ok());
    }

    #[test]
    fn test_input_limit() {
        let mut service = RichTextService::new();
        service.options_mut().max_input_len = 16;
        assert!(matches!(
            service.convert_cell(Some("<p>this is longer than sixteen bytes</p>")),
            Err(RichTextError::InputTooLarge { limit: 16, .. })
        ));
        assert!(service.convert_cell(Some("<p>short</p>")).is_ok());
    }

    #[test]
    fn test_skip_and_map_tag() {
        let mut service = RichTextService::new();
        service
            .skip("span")
            .map_tag("font", TagCategory::Format(Mark::Underline));

        assert_eq!(
            service.convert("<p>a<span>hidden</span><font>u</font></p>").unwrap(),
            Root::new(vec![Block::paragraph(vec![
                Inline::text("a"),
                Inline::Text(Text::plain("u").with(Mark::Underline)),
            ])])
        );
    }

    #[test]
    fn test_pretty_output() {
        let service = RichTextService::with_options(ConvertOptions {
            json_style: JsonStyle::Pretty,
            ..Default::default()
        });
        let json = service.convert_cell(Some("Hello")).unwrap();
        assert!(json.contains("\n  \"children\": ["));
    }

    #[test]
    fn test_service_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RichTextService>();
    }
}
