// src/model/mod.rs
//! Wire models for API response objects, with the full/partial unions and
//! their discriminating predicates.

mod block;
mod objects;
mod properties;

pub use block::{
    is_full_block, Block, BlockObject, BlockPayload, CalloutContent, CodeContent, HeadingContent,
    TextBlockContent, ToDoContent,
};
pub use objects::{
    is_full_comment, is_full_data_source, is_full_database, is_full_page,
    is_full_page_or_data_source, is_full_user, CommentObject, DataSource, Database, Page,
    PageObject, PageOrDataSource, PartialObject, UserKind, UserObject,
};
pub use properties::{
    DateValue, ExternalFile, FileReference, FileSource, FormulaResult, HostedFile, PropertyPayload,
    PropertyValue, RelationRef, SelectOption, UniqueIdValue, VerificationValue,
};
