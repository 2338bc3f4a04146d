// src/constants.rs
//! Operational boundaries of the Notion API surface this toolkit talks to.

/// How many objects a Notion list endpoint returns per page of results.
///
/// The API maximum is 100. Callers that do not set `page_size` on their
/// list requests get the server-side default on most endpoints.
pub const NOTION_API_PAGE_SIZE: u32 = 100;

/// Length of a Notion identifier in its compact hex serialization.
pub const COMPACT_ID_LEN: usize = 32;

/// Length of a Notion identifier in its canonical hyphenated serialization.
pub const CANONICAL_ID_LEN: usize = 36;
