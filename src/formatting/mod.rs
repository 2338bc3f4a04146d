// src/formatting/mod.rs
//! Read-side helpers: rendering rich text and extracting normalized
//! values from pages and blocks.

mod blocks;
mod properties;
mod rich_text;

pub use blocks::get_block_plain_text;
pub use properties::{
    get_page_properties_as_object, get_page_property_names, get_page_title, get_property,
    ExtractedValue,
};
pub use rich_text::{to_markdown, to_plain_text};
