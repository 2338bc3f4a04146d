// src/api/mod.rs
//! The pagination engine and the call contracts it consumes.

mod pagination;
mod types;

pub use pagination::{collect_paginated, iterate_paginated};
pub use types::{
    ListRequest, ListTemplatesRequest, PageBatch, PaginatedRequest, PaginatedResponse,
    TemplateListResponse,
};
