//! Validated lead payload types.

use serde::{Deserialize, Serialize};

/// Marketing attribution captured alongside a lead.
///
/// All fields are optional; absent values are omitted from the delivered
/// task rather than sent empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    cta_label: Option<String>,
    source_page: Option<String>,
    utm_source: Option<String>,
    utm_medium: Option<String>,
    utm_campaign: Option<String>,
}

impl Attribution {
    /// Creates attribution metadata from optional raw values.
    ///
    /// Blank values are normalised to `None`.
    #[must_use]
    pub fn new(
        cta_label: Option<String>,
        source_page: Option<String>,
        utm_source: Option<String>,
        utm_medium: Option<String>,
        utm_campaign: Option<String>,
    ) -> Self {
        Self {
            cta_label: normalise(cta_label),
            source_page: normalise(source_page),
            utm_source: normalise(utm_source),
            utm_medium: normalise(utm_medium),
            utm_campaign: normalise(utm_campaign),
        }
    }

    /// Label of the call-to-action that opened the form.
    #[must_use]
    pub fn cta_label(&self) -> Option<&str> {
        self.cta_label.as_deref()
    }

    /// Page the form was submitted from.
    #[must_use]
    pub fn source_page(&self) -> Option<&str> {
        self.source_page.as_deref()
    }

    /// UTM source attribution.
    #[must_use]
    pub fn utm_source(&self) -> Option<&str> {
        self.utm_source.as_deref()
    }

    /// UTM medium attribution.
    #[must_use]
    pub fn utm_medium(&self) -> Option<&str> {
        self.utm_medium.as_deref()
    }

    /// UTM campaign attribution.
    #[must_use]
    pub fn utm_campaign(&self) -> Option<&str> {
        self.utm_campaign.as_deref()
    }
}

fn normalise(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
}

/// Validated lead fields.
///
/// Construction goes through [`crate::submission::validation::validate`],
/// so every required field is guaranteed non-empty and trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadPayload {
    name: String,
    email: String,
    company: String,
    role: String,
    country: String,
    phone: String,
    number_of_locations: String,
    primary_pos: String,
    message: String,
    attribution: Attribution,
}

impl LeadPayload {
    /// Assembles a payload from already-validated parts.
    #[expect(
        clippy::too_many_arguments,
        reason = "constructor mirrors the nine required form fields"
    )]
    pub(crate) fn from_parts(
        name: String,
        email: String,
        company: String,
        role: String,
        country: String,
        phone: String,
        number_of_locations: String,
        primary_pos: String,
        message: String,
        attribution: Attribution,
    ) -> Self {
        Self {
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
        }
    }

    /// Contact name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Company name.
    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Contact role within the company.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Company country.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Contact phone number as submitted.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Number of restaurant locations operated.
    #[must_use]
    pub fn number_of_locations(&self) -> &str {
        &self.number_of_locations
    }

    /// Point-of-sale system in use.
    #[must_use]
    pub fn primary_pos(&self) -> &str {
        &self.primary_pos
    }

    /// Free-form message from the prospect.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Marketing attribution metadata.
    #[must_use]
    pub fn attribution(&self) -> &Attribution {
        &self.attribution
    }
}
