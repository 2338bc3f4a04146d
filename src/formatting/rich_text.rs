// src/formatting/rich_text.rs
//! Renders rich text spans to plain text or Markdown.

use crate::types::{RichTextItem, RichTextKind};

/// Concatenates the `plain_text` of every span, in order.
pub fn to_plain_text(items: &[RichTextItem]) -> String {
    items.iter().map(|item| item.plain_text.as_str()).collect()
}

/// Renders spans to Markdown and joins them with no separator.
///
/// Annotations wrap in a fixed order — bold, italic, strikethrough,
/// underline — each around the text accumulated so far, then code wraps
/// the whole result, and a link on a text span wraps last of all. So a
/// bold code span comes out as `` `**x**` ``: bold inside, backticks
/// outside.
pub fn to_markdown(items: &[RichTextItem]) -> String {
    items.iter().map(render_span).collect()
}

fn render_span(item: &RichTextItem) -> String {
    match &item.kind {
        // Equations render as inline TeX and ignore annotations and links.
        RichTextKind::Equation { .. } => format!("${}$", item.plain_text),
        // Mention plain text already includes its leading marker (e.g. "@").
        RichTextKind::Mention { .. } => item.plain_text.clone(),
        _ => {
            let annotations = &item.annotations;
            let mut output = item.plain_text.clone();
            if annotations.bold {
                output = format!("**{}**", output);
            }
            if annotations.italic {
                output = format!("*{}*", output);
            }
            if annotations.strikethrough {
                output = format!("~~{}~~", output);
            }
            if annotations.underline {
                output = format!("<u>{}</u>", output);
            }
            if annotations.code {
                output = format!("`{}`", output);
            }
            if let RichTextKind::Text { text } = &item.kind {
                if let Some(link) = &text.link {
                    output = format!("[{}]({})", output, link.url);
                }
            }
            output
        }
    }
}
