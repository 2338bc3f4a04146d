// src/lib.rs
//! notion-toolkit — client-side helpers for the Notion API.
//!
//! This crate covers the cross-cutting mechanisms every Notion client
//! needs, independent of how requests are sent:
//!
//! - **Identifier normalization** — [`extract_id`], [`extract_block_id`],
//!   [`format_uuid`], [`is_valid_id`], and the [`NotionId`] newtype.
//! - **Rich text rendering** — [`to_plain_text`] and [`to_markdown`] over
//!   ordered, annotated spans.
//! - **Response discrimination** — `is_full_*` predicates narrowing the
//!   full/partial unions the API returns depending on caller permissions.
//! - **Property extraction** — [`get_property`] and friends, dispatching
//!   on a page property's type tag to a normalized value.
//! - **Pagination** — [`iterate_paginated`] and [`collect_paginated`],
//!   which turn any cursor-paginated list call into a lazy `Stream` or an
//!   eager `Vec`.
//!
//! The HTTP transport is a collaborator, not a concern of this crate: the
//! pagination engine takes a list-call closure and is generic over its
//! error type, so retry, backoff, and timeouts live wherever requests do.
//! [`error::parse_response`] is the seam for transports that want the
//! typed Notion error vocabulary.
//!
//! Everything outside pagination is a pure, total function: malformed or
//! partial input yields `None`, `false`, `""`, or an empty collection,
//! never a panic, and unrecognized type tags — new property kinds, block
//! kinds, span kinds — degrade to the same fallbacks so the crate keeps
//! working as the API grows.

mod api;
mod constants;
pub mod error;
mod formatting;
mod model;
mod types;

// --- Constants ---
pub use crate::constants::NOTION_API_PAGE_SIZE;

// --- Errors ---
pub use crate::error::{Error, NotionErrorCode};

// --- Identifiers ---
pub use crate::types::{
    extract_block_id, extract_database_id, extract_id, extract_page_id, format_uuid, is_valid_id,
    NotionId,
};

// --- Rich text model ---
pub use crate::types::{Annotations, Color, EquationData, Link, RichTextItem, RichTextKind,
    TextContent};

// --- Response objects and predicates ---
pub use crate::model::{
    is_full_block, is_full_comment, is_full_data_source, is_full_database, is_full_page,
    is_full_page_or_data_source, is_full_user, Block, BlockObject, BlockPayload, CalloutContent,
    CodeContent, CommentObject, DataSource, Database, HeadingContent, Page, PageObject,
    PageOrDataSource, PartialObject, TextBlockContent, ToDoContent, UserKind, UserObject,
};
pub use crate::model::{
    DateValue, ExternalFile, FileReference, FileSource, FormulaResult, HostedFile, PropertyPayload,
    PropertyValue, RelationRef, SelectOption, UniqueIdValue, VerificationValue,
};

// --- Rendering and extraction ---
pub use crate::formatting::{
    get_block_plain_text, get_page_properties_as_object, get_page_property_names, get_page_title,
    get_property, to_markdown, to_plain_text, ExtractedValue,
};

// --- Pagination ---
pub use crate::api::{
    collect_paginated, iterate_paginated, ListRequest, ListTemplatesRequest, PageBatch,
    PaginatedRequest, PaginatedResponse, TemplateListResponse,
};
