// src/formatting/properties.rs
//! Normalized value extraction from a full page's property map.
//!
//! `get_property` is the dispatch point: title and rich text flatten to
//! plain text, select-like kinds reduce to their option names, and every
//! other kind passes its typed payload through unmodified. Partial pages,
//! missing names, and unknown property kinds all yield `None` — extraction
//! never fails.

use crate::formatting::rich_text::to_plain_text;
use crate::model::{
    DateValue, FileReference, FormulaResult, PageObject, PropertyPayload, RelationRef,
    UniqueIdValue, UserObject, VerificationValue,
};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde_json::Value;

/// A property value normalized for consumption.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractedValue {
    /// Title and rich text properties flattened to plain text; select and
    /// status properties reduced to the option name.
    Text(String),
    /// Multi-select option names, in order.
    Names(Vec<String>),
    Number(f64),
    Bool(bool),
    Date(DateValue),
    Url(String),
    Email(String),
    PhoneNumber(String),
    People(Vec<UserObject>),
    Files(Vec<FileReference>),
    Formula(FormulaResult),
    Relations(Vec<RelationRef>),
    Rollup(Value),
    Timestamp(DateTime<Utc>),
    User(UserObject),
    UniqueId(UniqueIdValue),
    Verification(VerificationValue),
    Button(Value),
}

/// Extracts the named property from a full page.
///
/// Returns `None` when the page is partial, the name is absent, the
/// property's kind is unrecognized, or a nullable payload is null.
pub fn get_property(page: &PageObject, name: &str) -> Option<ExtractedValue> {
    let property = page.as_full()?.properties.get(name)?;
    extract_payload(&property.payload)
}

fn extract_payload(payload: &PropertyPayload) -> Option<ExtractedValue> {
    use ExtractedValue as V;
    match payload {
        PropertyPayload::Title { title } => Some(V::Text(to_plain_text(title))),
        PropertyPayload::RichText { rich_text } => Some(V::Text(to_plain_text(rich_text))),
        PropertyPayload::Select { select: option } | PropertyPayload::Status { status: option } => {
            option.as_ref().map(|o| V::Text(o.name.clone()))
        }
        PropertyPayload::MultiSelect { multi_select } => Some(V::Names(
            multi_select.iter().map(|o| o.name.clone()).collect(),
        )),
        PropertyPayload::Number { number } => number.map(V::Number),
        PropertyPayload::Checkbox { checkbox } => Some(V::Bool(*checkbox)),
        PropertyPayload::Date { date } => date.clone().map(V::Date),
        PropertyPayload::Url { url } => url.clone().map(V::Url),
        PropertyPayload::Email { email } => email.clone().map(V::Email),
        PropertyPayload::PhoneNumber { phone_number } => phone_number.clone().map(V::PhoneNumber),
        PropertyPayload::People { people } => Some(V::People(people.clone())),
        PropertyPayload::Files { files } => Some(V::Files(files.clone())),
        PropertyPayload::Formula { formula } => Some(V::Formula(formula.clone())),
        PropertyPayload::Relation { relation } => Some(V::Relations(relation.clone())),
        PropertyPayload::Rollup { rollup } => Some(V::Rollup(rollup.clone())),
        PropertyPayload::CreatedTime { created_time } => Some(V::Timestamp(*created_time)),
        PropertyPayload::LastEditedTime { last_edited_time } => {
            Some(V::Timestamp(*last_edited_time))
        }
        PropertyPayload::CreatedBy { created_by } => Some(V::User(created_by.clone())),
        PropertyPayload::LastEditedBy { last_edited_by } => Some(V::User(last_edited_by.clone())),
        PropertyPayload::UniqueId { unique_id } => Some(V::UniqueId(unique_id.clone())),
        PropertyPayload::Verification { verification } => {
            verification.clone().map(V::Verification)
        }
        PropertyPayload::Button { button } => Some(V::Button(button.clone())),
        PropertyPayload::Unknown => {
            log::debug!("skipping property with unrecognized type tag");
            None
        }
    }
}

/// All property names on a full page, in map order. Empty for partials.
pub fn get_page_property_names(page: &PageObject) -> Vec<String> {
    match page.as_full() {
        Some(full) => full.properties.keys().cloned().collect(),
        None => Vec::new(),
    }
}

/// Extracts every property on a full page. Empty for partials.
///
/// Keys keep the property map's order; values carry the same `None`
/// fallbacks as [`get_property`].
pub fn get_page_properties_as_object(
    page: &PageObject,
) -> IndexMap<String, Option<ExtractedValue>> {
    match page.as_full() {
        Some(full) => full
            .properties
            .iter()
            .map(|(name, property)| (name.clone(), extract_payload(&property.payload)))
            .collect(),
        None => IndexMap::new(),
    }
}

/// The page title rendered to plain text, or `""`.
///
/// A page has at most one title-typed property; if the map somehow holds
/// several, the first in map order wins.
pub fn get_page_title(page: &PageObject) -> String {
    let Some(full) = page.as_full() else {
        return String::new();
    };
    full.properties
        .values()
        .find_map(|property| match &property.payload {
            PropertyPayload::Title { title } => Some(to_plain_text(title)),
            _ => None,
        })
        .unwrap_or_default()
}
