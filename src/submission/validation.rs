//! Intake validation rules.
//!
//! Rules run in a fixed order: presence of the nine required fields
//! (collecting every missing field, not just the first), then email shape,
//! then phone shape. The first failing rule stops processing and names the
//! offending fields so the caller can surface an actionable 400.

use crate::submission::domain::{Attribution, LeadForm, LeadPayload};
use std::fmt;
use thiserror::Error;

/// The nine required contact-form fields, named as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    /// `name`
    Name,
    /// `email`
    Email,
    /// `company`
    Company,
    /// `role`
    Role,
    /// `country`
    Country,
    /// `phone`
    Phone,
    /// `numberOfLocations`
    NumberOfLocations,
    /// `primaryPOS`
    PrimaryPos,
    /// `message`
    Message,
}

impl RequiredField {
    /// All required fields in canonical form order.
    pub const ALL: [Self; 9] = [
        Self::Name,
        Self::Email,
        Self::Company,
        Self::Role,
        Self::Country,
        Self::Phone,
        Self::NumberOfLocations,
        Self::PrimaryPos,
        Self::Message,
    ];

    /// Returns the wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Role => "role",
            Self::Country => "country",
            Self::Phone => "phone",
            Self::NumberOfLocations => "numberOfLocations",
            Self::PrimaryPos => "primaryPOS",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failures for an intake form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntakeValidationError {
    /// One or more required fields are missing or blank.
    #[error("missing required fields: {}", format_fields(.0))]
    MissingFields(Vec<RequiredField>),

    /// The email address does not have a `local@domain.tld` shape.
    #[error("invalid email address")]
    InvalidEmail,

    /// The phone number has no run of at least six digits after stripping
    /// separators.
    #[error("invalid phone number")]
    InvalidPhone,
}

impl IntakeValidationError {
    /// Wire names of the fields this error invalidates.
    #[must_use]
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        match self {
            Self::MissingFields(fields) => {
                fields.iter().map(|field| field.as_str()).collect()
            }
            Self::InvalidEmail => vec![RequiredField::Email.as_str()],
            Self::InvalidPhone => vec![RequiredField::Phone.as_str()],
        }
    }
}

fn format_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Minimum consecutive digits a phone number must contain after stripping
/// separators.
const MIN_PHONE_DIGIT_RUN: usize = 6;

/// Validates a raw form and produces the trimmed payload.
///
/// # Errors
///
/// Returns [`IntakeValidationError::MissingFields`] naming every missing or
/// blank required field, [`IntakeValidationError::InvalidEmail`] for a
/// malformed email, or [`IntakeValidationError::InvalidPhone`] for a phone
/// number without a long enough digit run.
pub fn validate(form: &LeadForm) -> Result<LeadPayload, IntakeValidationError> {
    let missing = missing_required_fields(form);
    if !missing.is_empty() {
        return Err(IntakeValidationError::MissingFields(missing));
    }

    let name = trimmed(form.name.as_deref());
    let email = trimmed(form.email.as_deref());
    let company = trimmed(form.company.as_deref());
    let role = trimmed(form.role.as_deref());
    let country = trimmed(form.country.as_deref());
    let phone = trimmed(form.phone.as_deref());
    let number_of_locations = trimmed(form.number_of_locations.as_deref());
    let primary_pos = trimmed(form.primary_pos.as_deref());
    let message = trimmed(form.message.as_deref());

    if !is_valid_email(&email) {
        return Err(IntakeValidationError::InvalidEmail);
    }
    if !is_valid_phone(&phone) {
        return Err(IntakeValidationError::InvalidPhone);
    }

    let attribution = Attribution::new(
        form.cta_label.clone(),
        form.source_page.clone(),
        form.utm_source.clone(),
        form.utm_medium.clone(),
        form.utm_campaign.clone(),
    );

    Ok(LeadPayload::from_parts(
        name,
        email,
        company,
        role,
        country,
        phone,
        number_of_locations,
        primary_pos,
        message,
        attribution,
    ))
}

/// Returns every required field that is absent or blank after trimming, in
/// canonical form order.
#[must_use]
pub fn missing_required_fields(form: &LeadForm) -> Vec<RequiredField> {
    RequiredField::ALL
        .into_iter()
        .filter(|field| is_blank(required_value(form, *field)))
        .collect()
}

const fn required_value(form: &LeadForm, field: RequiredField) -> Option<&String> {
    match field {
        RequiredField::Name => form.name.as_ref(),
        RequiredField::Email => form.email.as_ref(),
        RequiredField::Company => form.company.as_ref(),
        RequiredField::Role => form.role.as_ref(),
        RequiredField::Country => form.country.as_ref(),
        RequiredField::Phone => form.phone.as_ref(),
        RequiredField::NumberOfLocations => form.number_of_locations.as_ref(),
        RequiredField::PrimaryPos => form.primary_pos.as_ref(),
        RequiredField::Message => form.message.as_ref(),
    }
}

fn is_blank(value: Option<&String>) -> bool {
    value.is_none_or(|text| text.trim().is_empty())
}

fn trimmed(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_owned()
}

/// Checks the standard `local@domain.tld` email shape.
///
/// Deliberately lenient beyond the basics: exactly one `@`, a non-empty
/// local part, and a domain containing a dot with non-empty labels either
/// side of it. `a@b` fails, `a@b.com` passes.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let Some(local) = parts.next() else {
        return false;
    };
    let Some(domain) = parts.next() else {
        return false;
    };
    if parts.next().is_some() || local.is_empty() {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Checks that the phone number, after stripping spaces, hyphens, and
/// parentheses, contains a run of at least six consecutive digits.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    let stripped: String = phone
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '-' | '(' | ')'))
        .collect();

    let mut run = 0usize;
    for ch in stripped.chars() {
        if ch.is_ascii_digit() {
            run += 1;
            if run >= MIN_PHONE_DIGIT_RUN {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}
