// src/model/properties.rs
//! The page property wire model.
//!
//! Every property value is tagged by `type`, and the payload lives under a
//! key named after that tag (`{"type": "select", "select": {...}}`), which
//! maps directly onto an internally tagged enum. The platform adds new
//! property kinds over time, so the enum closes with an `Unknown` arm
//! instead of failing deserialization.

use crate::model::objects::UserObject;
use crate::types::{Color, RichTextItem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A property value as it appears in a page's `properties` map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyValue {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub payload: PropertyPayload,
}

impl PropertyValue {
    /// The wire `type` tag for this property value.
    pub fn type_name(&self) -> &'static str {
        self.payload.type_name()
    }
}

/// Type-tagged property payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyPayload {
    Title {
        #[serde(default)]
        title: Vec<RichTextItem>,
    },
    RichText {
        #[serde(default)]
        rich_text: Vec<RichTextItem>,
    },
    Number {
        number: Option<f64>,
    },
    Select {
        select: Option<SelectOption>,
    },
    MultiSelect {
        #[serde(default)]
        multi_select: Vec<SelectOption>,
    },
    Status {
        status: Option<SelectOption>,
    },
    Date {
        date: Option<DateValue>,
    },
    Checkbox {
        checkbox: bool,
    },
    Url {
        url: Option<String>,
    },
    Email {
        email: Option<String>,
    },
    PhoneNumber {
        phone_number: Option<String>,
    },
    People {
        #[serde(default)]
        people: Vec<UserObject>,
    },
    Files {
        #[serde(default)]
        files: Vec<FileReference>,
    },
    Formula {
        formula: FormulaResult,
    },
    Relation {
        #[serde(default)]
        relation: Vec<RelationRef>,
    },
    Rollup {
        rollup: Value,
    },
    CreatedTime {
        created_time: DateTime<Utc>,
    },
    CreatedBy {
        created_by: UserObject,
    },
    LastEditedTime {
        last_edited_time: DateTime<Utc>,
    },
    LastEditedBy {
        last_edited_by: UserObject,
    },
    UniqueId {
        unique_id: UniqueIdValue,
    },
    Verification {
        verification: Option<VerificationValue>,
    },
    Button {
        #[serde(default)]
        button: Value,
    },
    #[serde(other)]
    Unknown,
}

impl PropertyPayload {
    /// The wire `type` tag for this payload.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Title { .. } => "title",
            Self::RichText { .. } => "rich_text",
            Self::Number { .. } => "number",
            Self::Select { .. } => "select",
            Self::MultiSelect { .. } => "multi_select",
            Self::Status { .. } => "status",
            Self::Date { .. } => "date",
            Self::Checkbox { .. } => "checkbox",
            Self::Url { .. } => "url",
            Self::Email { .. } => "email",
            Self::PhoneNumber { .. } => "phone_number",
            Self::People { .. } => "people",
            Self::Files { .. } => "files",
            Self::Formula { .. } => "formula",
            Self::Relation { .. } => "relation",
            Self::Rollup { .. } => "rollup",
            Self::CreatedTime { .. } => "created_time",
            Self::CreatedBy { .. } => "created_by",
            Self::LastEditedTime { .. } => "last_edited_time",
            Self::LastEditedBy { .. } => "last_edited_by",
            Self::UniqueId { .. } => "unique_id",
            Self::Verification { .. } => "verification",
            Self::Button { .. } => "button",
            Self::Unknown => "unknown",
        }
    }
}

/// A select/status/multi-select option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub color: Option<Color>,
}

/// A date or date range. Kept as wire strings: date-only values carry no
/// time component and must not be forced through a timestamp parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateValue {
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
}

/// A file attached to a files property, hosted by Notion or external.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReference {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub source: FileSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileSource {
    File { file: HostedFile },
    External { external: ExternalFile },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostedFile {
    pub url: String,
    #[serde(default)]
    pub expiry_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalFile {
    pub url: String,
}

/// The computed result of a formula property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormulaResult {
    String { string: Option<String> },
    Number { number: Option<f64> },
    Boolean { boolean: Option<bool> },
    Date { date: Option<DateValue> },
    #[serde(other)]
    Unknown,
}

/// A reference to a related page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationRef {
    pub id: String,
}

/// The value of a unique_id property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniqueIdValue {
    pub number: Option<i64>,
    #[serde(default)]
    pub prefix: Option<String>,
}

/// The value of a verification property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationValue {
    pub state: String,
    #[serde(default)]
    pub verified_by: Option<UserObject>,
    #[serde(default)]
    pub date: Option<DateValue>,
}
