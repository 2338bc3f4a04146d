// src/types/rich_text.rs
//! The rich text wire model: annotated spans of text, equations, and
//! mentions.
//!
//! Every span carries a `plain_text` fallback rendering regardless of its
//! kind, which is what makes plain-text extraction total even for span
//! kinds this crate has never heard of.

use serde::{Deserialize, Serialize};

/// One unit of formatted text.
///
/// The `kind` is the type-tagged payload; `plain_text`, `href`, and
/// `annotations` are common to every kind. Absent fields deserialize to
/// their empty defaults so that sparse test fixtures and older API
/// versions both parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextItem {
    #[serde(flatten)]
    pub kind: RichTextKind,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub plain_text: String,
    #[serde(default)]
    pub href: Option<String>,
}

impl RichTextItem {
    /// A plain, unannotated text span — the most common shape in fixtures.
    pub fn plain(text: &str) -> Self {
        Self {
            kind: RichTextKind::Text {
                text: TextContent {
                    content: text.to_string(),
                    link: None,
                },
            },
            annotations: Annotations::default(),
            plain_text: text.to_string(),
            href: None,
        }
    }
}

/// The kind of rich text content, tagged by the wire `type` field.
///
/// The `Unknown` arm absorbs type tags introduced after this crate was
/// written; such spans still render through their `plain_text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextKind {
    Text {
        #[serde(default)]
        text: TextContent,
    },
    Equation {
        equation: EquationData,
    },
    Mention {
        mention: serde_json::Value,
    },
    #[serde(other)]
    Unknown,
}

/// Payload of a text-kind span.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextContent {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

/// Payload of an equation-kind span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationData {
    pub expression: String,
}

/// Style annotations on a span. The flags are orthogonal: any subset may
/// be active at once.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
}

/// Type-safe color enum instead of strings.
///
/// Colors the API adds later fall back to `Default` rather than failing
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Gray,
    Brown,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Red,
    GrayBackground,
    BrownBackground,
    OrangeBackground,
    YellowBackground,
    GreenBackground,
    BlueBackground,
    PurpleBackground,
    PinkBackground,
    RedBackground,
    /// The wire's `"default"`, and the landing spot for colors this crate
    /// does not know. `#[serde(other)]` must sit on the final variant.
    #[default]
    #[serde(other)]
    Default,
}

impl Color {
    /// The wire string for this color.
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Gray => "gray",
            Color::Brown => "brown",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::Red => "red",
            Color::GrayBackground => "gray_background",
            Color::BrownBackground => "brown_background",
            Color::OrangeBackground => "orange_background",
            Color::YellowBackground => "yellow_background",
            Color::GreenBackground => "green_background",
            Color::BlueBackground => "blue_background",
            Color::PurpleBackground => "purple_background",
            Color::PinkBackground => "pink_background",
            Color::RedBackground => "red_background",
            Color::Default => "default",
        }
    }
}
