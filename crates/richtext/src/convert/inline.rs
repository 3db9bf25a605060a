//! Inline extraction
//!
//! Flattens the non-block content of an element into an ordered list of text
//! runs and links, merging formatting wrappers into text flags.

use richtext_core::{Inline, Mark, Text};
use scraper::ElementRef;

use super::Context;
use crate::html::{attr, children, tag_name, trimmed_text, Child};
use crate::tags::TagCategory;
use crate::utilities::normalize_fragment;

/// Extract the inline content of an element
pub(crate) fn extract(ctx: &Context<'_>, element: ElementRef<'_>) -> Vec<Inline> {
    extract_children(ctx, children(element))
}

/// Extract the inline content of a run of sibling nodes
pub(crate) fn extract_children<'a>(
    ctx: &Context<'_>,
    nodes: impl IntoIterator<Item = Child<'a>>,
) -> Vec<Inline> {
    let mut inlines = Vec::new();
    for node in nodes {
        push_child(ctx, node, &mut inlines);
    }
    inlines
}

fn push_child(ctx: &Context<'_>, node: Child<'_>, out: &mut Vec<Inline>) {
    match node {
        Child::Text(text) => {
            if let Some(value) = normalize_fragment(text) {
                out.push(Inline::Text(Text::plain(value)));
            }
        }
        Child::Element(element) => push_element(ctx, element, out),
    }
}

fn push_element(ctx: &Context<'_>, element: ElementRef<'_>, out: &mut Vec<Inline>) {
    match ctx.category(&element) {
        TagCategory::Skip => {}
        TagCategory::Link => out.push(link(element)),
        TagCategory::Format(mark) => push_formatted(ctx, element, mark, out),
        TagCategory::InlineContainer => {
            for node in children(element) {
                push_child(ctx, node, out);
            }
        }
        TagCategory::Heading(_)
        | TagCategory::List(_)
        | TagCategory::Container
        | TagCategory::Unknown => push_flattened(element, out),
    }
}

/// Anchors keep only their flattened text; nested formatting is not kept.
fn link(element: ElementRef<'_>) -> Inline {
    Inline::Link {
        url: attr(&element, "href").unwrap_or_default().to_string(),
        children: vec![Inline::text(trimmed_text(element))],
        title: attr(&element, "title").map(str::to_string),
    }
}

fn push_formatted(ctx: &Context<'_>, element: ElementRef<'_>, mark: Mark, out: &mut Vec<Inline>) {
    let start = out.len();
    for node in children(element) {
        push_child(ctx, node, out);
    }
    for inline in &mut out[start..] {
        inline.apply(mark);
    }
}

fn push_flattened(element: ElementRef<'_>, out: &mut Vec<Inline>) {
    let text = trimmed_text(element);
    if text.is_empty() {
        return;
    }
    tracing::trace!(tag = tag_name(&element), "Flattening element to text");
    out.push(Inline::text(text));
}
