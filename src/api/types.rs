// src/api/types.rs
//! Wire shapes and call contracts for cursor-paginated list endpoints.

use serde::{Deserialize, Serialize};

/// Generic paginated response from a Notion list endpoint.
///
/// `has_more` is advisory; the pagination engine trusts `next_cursor`
/// alone to decide whether another page exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default)]
    pub object: Option<String>,
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// Response from the template listing endpoint: the same cursor protocol,
/// but the items travel under `templates` instead of `results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateListResponse<T> {
    pub templates: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// One page of results from a cursor-paginated endpoint, however the
/// endpoint names its items field.
pub trait PageBatch<T> {
    /// The cursor for the page after this one, if any.
    fn next_cursor(&self) -> Option<&str>;
    /// The page's items, in response order.
    fn into_items(self) -> Vec<T>;
}

impl<T> PageBatch<T> for PaginatedResponse<T> {
    fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref()
    }

    fn into_items(self) -> Vec<T> {
        self.results
    }
}

impl<T> PageBatch<T> for TemplateListResponse<T> {
    fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref()
    }

    fn into_items(self) -> Vec<T> {
        self.templates
    }
}

/// Argument shape accepted by a paginated list call.
///
/// The engine clones the caller's arguments for every request and
/// overrides only the cursor, so implementations must replace just their
/// `start_cursor` field.
pub trait PaginatedRequest: Clone {
    fn with_start_cursor(self, cursor: Option<String>) -> Self;
}

/// Minimal list-call arguments: a page size and a cursor.
///
/// Endpoint-specific argument types (queries, filters) implement
/// [`PaginatedRequest`] themselves; this shape covers the endpoints that
/// need nothing else.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
}

impl PaginatedRequest for ListRequest {
    fn with_start_cursor(mut self, cursor: Option<String>) -> Self {
        self.start_cursor = cursor;
        self
    }
}

/// Arguments for listing a data source's templates.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ListTemplatesRequest {
    pub data_source_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
}

impl PaginatedRequest for ListTemplatesRequest {
    fn with_start_cursor(mut self, cursor: Option<String>) -> Self {
        self.start_cursor = cursor;
        self
    }
}
