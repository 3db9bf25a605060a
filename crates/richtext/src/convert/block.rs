//! Block parsing
//!
//! Walks block-level elements, recursing into containers, and hands inline
//! content to the extractor.

use richtext_core::{Block, Inline, ListItem, ListType};
use scraper::ElementRef;

use super::inline::{extract, extract_children};
use super::Context;
use crate::html::{children, tag_name, trimmed_text, Child};
use crate::tags::TagCategory;

/// Parse a sequence of sibling nodes into blocks.
///
/// Contiguous text and non-block elements form a run that becomes one
/// paragraph when a block element interrupts it or the siblings end.
/// Unrecognized elements join the run and are flattened to text there. Runs
/// without any inline content (such as whitespace between blocks) produce
/// nothing.
pub(crate) fn parse_siblings<'a>(
    ctx: &Context<'_>,
    nodes: impl IntoIterator<Item = Child<'a>>,
) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut run: Vec<Child<'a>> = Vec::new();

    for node in nodes {
        match node {
            Child::Text(_) => run.push(node),
            Child::Element(element) => {
                let category = ctx.category(&element);
                if category.is_block() {
                    flush_run(ctx, &mut run, &mut blocks);
                    parse_block(ctx, element, category, &mut blocks);
                } else {
                    run.push(node);
                }
            }
        }
    }
    flush_run(ctx, &mut run, &mut blocks);

    blocks
}

fn flush_run<'a>(ctx: &Context<'_>, run: &mut Vec<Child<'a>>, blocks: &mut Vec<Block>) {
    if run.is_empty() {
        return;
    }
    let inlines = extract_children(ctx, run.drain(..));
    if !inlines.is_empty() {
        blocks.push(Block::paragraph(inlines));
    }
}

fn parse_block(
    ctx: &Context<'_>,
    element: ElementRef<'_>,
    category: TagCategory,
    out: &mut Vec<Block>,
) {
    match category {
        TagCategory::Heading(level) => {
            let text = trimmed_text(element);
            if !text.is_empty() {
                out.push(Block::heading(level.clamp(1, 6), text));
            }
        }
        TagCategory::List(list_type) => {
            if let Some(list) = parse_list(ctx, element, list_type) {
                out.push(list);
            }
        }
        TagCategory::Container => parse_container(ctx, element, out),
        _ => {}
    }
}

fn parse_list(ctx: &Context<'_>, element: ElementRef<'_>, list_type: ListType) -> Option<Block> {
    let items: Vec<ListItem> = children(element)
        .filter_map(|child| child.as_element())
        .filter(|child| tag_name(child) == "li")
        .map(|item| {
            let inlines = extract(ctx, item);
            if inlines.is_empty() {
                ListItem::empty()
            } else {
                ListItem::new(inlines)
            }
        })
        .collect();

    if items.is_empty() {
        None
    } else {
        Some(Block::list(list_type, items))
    }
}

/// Containers with block children are split into blocks; otherwise the whole
/// content becomes a single paragraph, blank if nothing inline remains.
fn parse_container(ctx: &Context<'_>, element: ElementRef<'_>, out: &mut Vec<Block>) {
    let has_block_child = children(element)
        .filter_map(|child| child.as_element())
        .any(|child| ctx.category(&child).is_block());

    if has_block_child {
        out.extend(parse_siblings(ctx, children(element)));
        return;
    }

    let inlines: Vec<Inline> = extract(ctx, element);
    if inlines.is_empty() {
        out.push(Block::empty_paragraph());
    } else {
        out.push(Block::paragraph(inlines));
    }
}
