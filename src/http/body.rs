//! Untyped request-body extraction.
//!
//! The intake body is accepted as raw JSON and picked apart field by
//! field, distinguishing a missing field (a validation concern, 400) from
//! a present field of the wrong JSON type (a type error, 500).

use crate::submission::domain::LeadForm;
use serde_json::Value;
use thiserror::Error;

/// A field was present but not a JSON string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("field '{0}' must be a string")]
pub struct UnexpectedFieldType(pub &'static str);

/// Extracts the lead form from an untyped JSON body.
///
/// Missing and `null` fields become `None`; validation decides whether
/// that is an error.
///
/// # Errors
///
/// Returns [`UnexpectedFieldType`] when the body is not an object or a
/// known field holds a non-string value.
pub fn form_from_value(value: &Value) -> Result<LeadForm, UnexpectedFieldType> {
    if !value.is_object() {
        return Err(UnexpectedFieldType("body"));
    }
    Ok(LeadForm {
        name: string_field(value, "name")?,
        email: string_field(value, "email")?,
        company: string_field(value, "company")?,
        role: string_field(value, "role")?,
        country: string_field(value, "country")?,
        phone: string_field(value, "phone")?,
        number_of_locations: string_field(value, "numberOfLocations")?,
        primary_pos: string_field(value, "primaryPOS")?,
        message: string_field(value, "message")?,
        cta_label: string_field(value, "ctaLabel")?,
        source_page: string_field(value, "sourcePage")?,
        utm_source: string_field(value, "utmSource")?,
        utm_medium: string_field(value, "utmMedium")?,
        utm_campaign: string_field(value, "utmCampaign")?,
    })
}

fn string_field(
    value: &Value,
    key: &'static str,
) -> Result<Option<String>, UnexpectedFieldType> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(UnexpectedFieldType(key)),
    }
}
