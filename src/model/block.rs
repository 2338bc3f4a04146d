// src/model/block.rs
//! The block wire model, trimmed to what plain-text extraction needs.
//!
//! Blocks are type-tagged the same way properties are: the payload lives
//! under a key named after the `type` tag. Only the text-bearing kinds are
//! modeled with their payloads; everything else lands in `Unsupported` and
//! extracts as empty text.

use crate::model::objects::PartialObject;
use crate::types::{Color, RichTextItem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A full block: distinguished from the partial shape by its `type` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub object: String,
    pub id: String,
    #[serde(default)]
    pub has_children: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_edited_time: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub payload: BlockPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockObject {
    Full(Block),
    Partial(PartialObject),
}

impl BlockObject {
    /// The full block, if this response carried one.
    pub fn as_full(&self) -> Option<&Block> {
        match self {
            BlockObject::Full(block) if block.object == "block" => Some(block),
            _ => None,
        }
    }
}

/// A block is full when it is a block object carrying its `type` payload.
pub fn is_full_block(block: &BlockObject) -> bool {
    block.as_full().is_some()
}

/// Type-tagged block payloads for the text-bearing kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockPayload {
    Paragraph {
        paragraph: TextBlockContent,
    },
    #[serde(rename = "heading_1")]
    Heading1 {
        heading_1: HeadingContent,
    },
    #[serde(rename = "heading_2")]
    Heading2 {
        heading_2: HeadingContent,
    },
    #[serde(rename = "heading_3")]
    Heading3 {
        heading_3: HeadingContent,
    },
    BulletedListItem {
        bulleted_list_item: TextBlockContent,
    },
    NumberedListItem {
        numbered_list_item: TextBlockContent,
    },
    Toggle {
        toggle: TextBlockContent,
    },
    ToDo {
        to_do: ToDoContent,
    },
    Quote {
        quote: TextBlockContent,
    },
    Callout {
        callout: CalloutContent,
    },
    Code {
        code: CodeContent,
    },
    #[serde(other)]
    Unsupported,
}

impl BlockPayload {
    /// The block's rich text, for the kinds that carry one.
    pub fn rich_text(&self) -> Option<&[RichTextItem]> {
        match self {
            Self::Paragraph { paragraph } => Some(&paragraph.rich_text),
            Self::Heading1 { heading_1 } => Some(&heading_1.rich_text),
            Self::Heading2 { heading_2 } => Some(&heading_2.rich_text),
            Self::Heading3 { heading_3 } => Some(&heading_3.rich_text),
            Self::BulletedListItem { bulleted_list_item } => Some(&bulleted_list_item.rich_text),
            Self::NumberedListItem { numbered_list_item } => Some(&numbered_list_item.rich_text),
            Self::Toggle { toggle } => Some(&toggle.rich_text),
            Self::ToDo { to_do } => Some(&to_do.rich_text),
            Self::Quote { quote } => Some(&quote.rich_text),
            Self::Callout { callout } => Some(&callout.rich_text),
            Self::Code { code } => Some(&code.rich_text),
            Self::Unsupported => None,
        }
    }

    /// The wire `type` tag for this payload.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Paragraph { .. } => "paragraph",
            Self::Heading1 { .. } => "heading_1",
            Self::Heading2 { .. } => "heading_2",
            Self::Heading3 { .. } => "heading_3",
            Self::BulletedListItem { .. } => "bulleted_list_item",
            Self::NumberedListItem { .. } => "numbered_list_item",
            Self::Toggle { .. } => "toggle",
            Self::ToDo { .. } => "to_do",
            Self::Quote { .. } => "quote",
            Self::Callout { .. } => "callout",
            Self::Code { .. } => "code",
            Self::Unsupported => "unsupported",
        }
    }
}

/// Common payload of paragraph-like blocks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextBlockContent {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default)]
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeadingContent {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default)]
    pub is_toggleable: bool,
    #[serde(default)]
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ToDoContent {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalloutContent {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default)]
    pub icon: Option<Value>,
    #[serde(default)]
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CodeContent {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default)]
    pub caption: Vec<RichTextItem>,
    #[serde(default)]
    pub language: Option<String>,
}
