// src/types/mod.rs
//! Shared domain types: identifiers and the rich text wire model.

mod ids;
mod rich_text;

pub use ids::{
    extract_block_id, extract_database_id, extract_id, extract_page_id, format_uuid, is_valid_id,
    NotionId,
};
pub use rich_text::{
    Annotations, Color, EquationData, Link, RichTextItem, RichTextKind, TextContent,
};
