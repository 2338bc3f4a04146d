// src/types/ids.rs
//! Notion identifier normalization.
//!
//! Notion serializes its 128-bit identifiers two ways: a compact run of 32
//! hex characters, and the canonical hyphenated 8-4-4-4-12 form. URLs embed
//! the compact form in several places — at the end of a slugged path
//! segment, in `p=`/`page_id=`/`database_id=` query parameters, and in
//! `#block-` fragments. Everything here is total: bad input yields `None`
//! or `false`, never a panic.

use crate::constants::{CANONICAL_ID_LEN, COMPACT_ID_LEN};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

lazy_static::lazy_static! {
    static ref CANONICAL_RE: Regex = Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$"
    )
    .expect("canonical ID pattern is valid");

    static ref COMPACT_RE: Regex =
        Regex::new(r"^[0-9a-fA-F]{32}$").expect("compact ID pattern is valid");

    // Slug-suffixed path segment: the hex run must be exactly 32 characters,
    // directly after a hyphen, inside a slash-delimited segment, and
    // terminated by a path boundary. The input is pre-split at the first
    // `?`/`#`, so end-of-path covers `?` and `#`. The leading `/` keeps
    // hyphen-hex prefixes of bare query strings out of this branch.
    static ref PATH_RE: Regex =
        Regex::new(r"/[^/]*-([0-9a-fA-F]{32})(?:/|$)").expect("path ID pattern is valid");

    static ref QUERY_RE: Regex = Regex::new(
        r"[?&](?:p|page_id|database_id)=([0-9a-fA-F]{32})(?:[&#]|$)"
    )
    .expect("query ID pattern is valid");

    // Standalone run of exactly 32 hex characters: the boundary classes
    // reject runs that are longer than 32.
    static ref STANDALONE_RE: Regex = Regex::new(
        r"(?:^|[^0-9a-fA-F])([0-9a-fA-F]{32})(?:[^0-9a-fA-F]|$)"
    )
    .expect("standalone ID pattern is valid");

    static ref FRAGMENT_RE: Regex =
        Regex::new(r"^(?:block-)?([0-9a-fA-F]{32})$").expect("fragment ID pattern is valid");
}

/// A Notion identifier in canonical form.
///
/// Stored hyphenated and lowercase; `as_compact` recovers the 32-hex form
/// used in URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotionId(String);

impl NotionId {
    /// Parses any of the accepted identifier serializations, including URLs.
    ///
    /// Same rules as [`extract_id`]; exposed as a constructor for callers
    /// that already hold an id-shaped string.
    pub fn parse(input: &str) -> Option<Self> {
        extract_id(input)
    }

    /// The canonical hyphenated, lowercase form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The compact 32-hex form, as embedded in Notion URLs.
    pub fn as_compact(&self) -> String {
        self.0.replace('-', "")
    }

    /// Wraps an already-canonical string without re-validating.
    fn from_canonical(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for NotionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for NotionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NotionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        NotionId::parse(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid Notion ID: {}", value)))
    }
}

/// Reformats a 32-character hex string into the canonical hyphenated form.
///
/// Pure string surgery: lowercases and inserts hyphens at offsets 8, 12,
/// 16, and 20. The caller is responsible for passing exactly 32 characters.
pub fn format_uuid(hex: &str) -> String {
    let hex = hex.to_lowercase();
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

/// Extracts a Notion identifier from a raw ID string, URL, or text blob.
///
/// Resolution order:
/// 1. the canonical hyphenated form, returned lowercased;
/// 2. a bare compact 32-hex string, reformatted;
/// 3. a slug-suffixed path segment (`/Title-<32hex>`);
/// 4. a `p`, `page_id`, or `database_id` query parameter;
/// 5. any standalone run of exactly 32 hex characters.
///
/// Path matches win over query matches so that a database view id in the
/// query string is never mistaken for the resource id in the path.
pub fn extract_id(input: &str) -> Option<NotionId> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if input.len() == CANONICAL_ID_LEN && CANONICAL_RE.is_match(input) {
        return Some(NotionId::from_canonical(input.to_lowercase()));
    }
    if input.len() == COMPACT_ID_LEN && COMPACT_RE.is_match(input) {
        return Some(NotionId::from_canonical(format_uuid(input)));
    }

    // Path portion only: a view id in the query string must not shadow the
    // resource id embedded in the path.
    let path_end = input.find(['?', '#']).unwrap_or(input.len());
    if let Some(captures) = PATH_RE.captures(&input[..path_end]) {
        return Some(NotionId::from_canonical(format_uuid(&captures[1])));
    }

    if let Some(id) = extract_from_query(input) {
        return Some(id);
    }

    STANDALONE_RE
        .captures(input)
        .map(|captures| NotionId::from_canonical(format_uuid(&captures[1])))
}

/// Searches the query string for a known id-bearing parameter.
fn extract_from_query(input: &str) -> Option<NotionId> {
    if let Ok(url) = Url::parse(input) {
        for (key, value) in url.query_pairs() {
            let named = matches!(key.as_ref(), "p" | "page_id" | "database_id");
            if named && value.len() == COMPACT_ID_LEN && COMPACT_RE.is_match(&value) {
                return Some(NotionId::from_canonical(format_uuid(&value)));
            }
        }
        return None;
    }
    // Scheme-less input never parses as a URL; fall back to pattern search.
    QUERY_RE
        .captures(input)
        .map(|captures| NotionId::from_canonical(format_uuid(&captures[1])))
}

/// Extracts a page identifier. Pages share the generic URL anatomy.
pub fn extract_page_id(input: &str) -> Option<NotionId> {
    extract_id(input)
}

/// Extracts a database identifier. Databases share the generic URL anatomy.
pub fn extract_database_id(input: &str) -> Option<NotionId> {
    extract_id(input)
}

/// Extracts a block identifier from a URL fragment.
///
/// Block references only ever appear as `#block-<32hex>` or `#<32hex>`;
/// there is deliberately no fallback to path or query search, since those
/// positions identify the containing page, not the block.
pub fn extract_block_id(input: &str) -> Option<NotionId> {
    let input = input.trim();
    let fragment = &input[input.find('#')? + 1..];
    FRAGMENT_RE
        .captures(fragment)
        .map(|captures| NotionId::from_canonical(format_uuid(&captures[1])))
}

/// Whether the trimmed input is a well-formed identifier in either the
/// canonical hyphenated or compact serialization.
pub fn is_valid_id(input: &str) -> bool {
    let input = input.trim();
    CANONICAL_RE.is_match(input) || COMPACT_RE.is_match(input)
}
