// src/model/objects.rs
//! Full/partial response variants and the predicates that tell them apart.
//!
//! Depending on the caller's permissions the API returns either a *full*
//! object (with its type-specific payload) or a *partial* one carrying only
//! the `object` discriminant and `id`. The unions below are built during
//! deserialization: the full shape is attempted first and anything that
//! lacks the distinguishing field lands in the partial arm. Each predicate
//! checks exactly one distinguishing field — no deep validation.

use crate::model::properties::PropertyValue;
use crate::types::RichTextItem;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The shape every partial object shares: discriminant plus id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialObject {
    pub object: String,
    pub id: String,
}

// --- Pages ---

/// A full page: distinguished from the partial shape by its `url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub object: String,
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub properties: IndexMap<String, PropertyValue>,
    #[serde(default)]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_edited_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub public_url: Option<String>,
    #[serde(default)]
    pub parent: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageObject {
    Full(Page),
    Partial(PartialObject),
}

impl PageObject {
    /// The full page, if this response carried one.
    pub fn as_full(&self) -> Option<&Page> {
        match self {
            PageObject::Full(page) if page.object == "page" => Some(page),
            _ => None,
        }
    }
}

/// A page is full when it is a page object carrying its `url`.
pub fn is_full_page(page: &PageObject) -> bool {
    page.as_full().is_some()
}

// --- Data sources and databases ---

/// A data source. The API has no distinguishable partial wire shape for
/// this kind; fullness is structural only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    pub object: String,
    pub id: String,
    #[serde(default)]
    pub title: Vec<RichTextItem>,
    #[serde(default)]
    pub properties: Option<Value>,
    #[serde(default)]
    pub parent: Option<Value>,
}

/// A data source is full whenever the discriminant says so. Deliberately
/// weaker than the page/block predicates; see the pinning test below.
pub fn is_full_data_source(data_source: &DataSource) -> bool {
    data_source.object == "data_source"
}

/// A database container. Like data sources, no secondary field marks
/// fullness on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub object: String,
    pub id: String,
    #[serde(default)]
    pub title: Vec<RichTextItem>,
    #[serde(default)]
    pub data_sources: Option<Value>,
    #[serde(default)]
    pub parent: Option<Value>,
}

/// A database is full whenever the discriminant says so.
pub fn is_full_database(database: &Database) -> bool {
    database.object == "database"
}

// --- Mixed page / data source results ---

/// An item from a heterogeneous result list (search, query) that may be
/// either a page or a data source.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PageOrDataSource {
    Page(PageObject),
    DataSource(DataSource),
}

impl<'de> Deserialize<'de> for PageOrDataSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Dispatch on the discriminant: anything that is not a data source
        // goes through the page union, matching the predicate below.
        let value = Value::deserialize(deserializer)?;
        if value.get("object").and_then(Value::as_str) == Some("data_source") {
            DataSource::deserialize(value)
                .map(PageOrDataSource::DataSource)
                .map_err(serde::de::Error::custom)
        } else {
            PageObject::deserialize(value)
                .map(PageOrDataSource::Page)
                .map_err(serde::de::Error::custom)
        }
    }
}

/// Combinator over mixed result lists: data sources defer to the data
/// source predicate, everything else to the page predicate.
pub fn is_full_page_or_data_source(item: &PageOrDataSource) -> bool {
    match item {
        PageOrDataSource::DataSource(data_source) => is_full_data_source(data_source),
        PageOrDataSource::Page(page) => is_full_page(page),
    }
}

// --- Users ---

/// What kind of account a user object describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserKind {
    Person,
    Bot,
    #[serde(other)]
    Unknown,
}

/// A user. The `type` field is the fullness signal: partial user
/// references (e.g. inside `created_by` stubs) omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserObject {
    pub object: String,
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<UserKind>,
}

/// A user is full when its payload carries a `type` field.
pub fn is_full_user(user: &UserObject) -> bool {
    user.kind.is_some()
}

// --- Comments ---

/// A comment. Partial comments omit `created_by`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentObject {
    pub object: String,
    pub id: String,
    #[serde(default)]
    pub created_by: Option<PartialObject>,
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default)]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub discussion_id: Option<String>,
    #[serde(default)]
    pub parent: Option<Value>,
}

/// A comment is full when its payload carries `created_by`.
pub fn is_full_comment(comment: &CommentObject) -> bool {
    comment.created_by.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn full_page_json() -> Value {
        json!({
            "object": "page",
            "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
            "url": "https://www.notion.so/Page-598337872cf94fdf8782e53db20768a5",
            "created_time": "2022-03-01T19:05:00.000Z",
            "properties": {}
        })
    }

    #[test]
    fn page_with_url_is_full() {
        let page: PageObject = serde_json::from_value(full_page_json()).unwrap();
        assert!(is_full_page(&page));
    }

    #[test]
    fn page_without_url_is_partial() {
        let mut value = full_page_json();
        value.as_object_mut().unwrap().remove("url");
        let page: PageObject = serde_json::from_value(value).unwrap();
        assert!(!is_full_page(&page));
        assert_eq!(page.as_full(), None);
    }

    #[test]
    fn block_shaped_object_is_not_a_full_page() {
        let page: PageObject = serde_json::from_value(json!({
            "object": "block",
            "id": "59833787-2cf9-4fdf-8782-e53db20768a5"
        }))
        .unwrap();
        assert!(!is_full_page(&page));
    }

    // The data source and database predicates check only the discriminant,
    // unlike every other predicate in this family. That asymmetry follows
    // the wire format: neither kind has a partial shape distinguishable by
    // a secondary field. These tests pin the weaker behavior.
    #[test]
    fn data_source_fullness_is_discriminant_only() {
        let data_source: DataSource = serde_json::from_value(json!({
            "object": "data_source",
            "id": "59833787-2cf9-4fdf-8782-e53db20768a5"
        }))
        .unwrap();
        assert!(is_full_data_source(&data_source));

        let mislabeled = DataSource {
            object: "page".to_string(),
            ..data_source
        };
        assert!(!is_full_data_source(&mislabeled));
    }

    #[test]
    fn database_fullness_is_discriminant_only() {
        let database: Database = serde_json::from_value(json!({
            "object": "database",
            "id": "59833787-2cf9-4fdf-8782-e53db20768a5"
        }))
        .unwrap();
        assert!(is_full_database(&database));
    }

    #[test]
    fn mixed_result_dispatches_on_discriminant() {
        let item: PageOrDataSource = serde_json::from_value(json!({
            "object": "data_source",
            "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
            "title": []
        }))
        .unwrap();
        assert!(matches!(item, PageOrDataSource::DataSource(_)));
        assert!(is_full_page_or_data_source(&item));

        let item: PageOrDataSource = serde_json::from_value(full_page_json()).unwrap();
        assert!(matches!(item, PageOrDataSource::Page(_)));
        assert!(is_full_page_or_data_source(&item));

        // A partial page routes through the page predicate and fails it.
        let item: PageOrDataSource = serde_json::from_value(json!({
            "object": "page",
            "id": "59833787-2cf9-4fdf-8782-e53db20768a5"
        }))
        .unwrap();
        assert!(!is_full_page_or_data_source(&item));
    }

    #[test]
    fn user_fullness_follows_type_field() {
        let full: UserObject = serde_json::from_value(json!({
            "object": "user",
            "id": "6794760a-1f15-45cd-9c65-0dfe42f5135a",
            "name": "Aman Gupta",
            "type": "person",
            "person": { "email": "x@example.com" }
        }))
        .unwrap();
        assert!(is_full_user(&full));
        assert_eq!(full.kind, Some(UserKind::Person));

        let partial: UserObject = serde_json::from_value(json!({
            "object": "user",
            "id": "6794760a-1f15-45cd-9c65-0dfe42f5135a"
        }))
        .unwrap();
        assert!(!is_full_user(&partial));
    }

    #[test]
    fn future_user_kind_does_not_break_fullness() {
        let user: UserObject = serde_json::from_value(json!({
            "object": "user",
            "id": "6794760a-1f15-45cd-9c65-0dfe42f5135a",
            "type": "agent"
        }))
        .unwrap();
        assert!(is_full_user(&user));
        assert_eq!(user.kind, Some(UserKind::Unknown));
    }

    #[test]
    fn comment_fullness_follows_created_by() {
        let full: CommentObject = serde_json::from_value(json!({
            "object": "comment",
            "id": "7a793800-3e55-4d5e-8009-2261de026179",
            "created_by": { "object": "user", "id": "e450a39e-9051-4d36-bc4e-8581611fc592" },
            "rich_text": [{ "type": "text", "text": { "content": "Hi" }, "plain_text": "Hi" }]
        }))
        .unwrap();
        assert!(is_full_comment(&full));

        let partial: CommentObject = serde_json::from_value(json!({
            "object": "comment",
            "id": "7a793800-3e55-4d5e-8009-2261de026179"
        }))
        .unwrap();
        assert!(!is_full_comment(&partial));
    }
}
