//! Untrusted form input carrier.

/// Raw contact-form fields as extracted from an untyped request body.
///
/// Every field is optional at this stage; [`crate::submission::validation`]
/// decides which absences are errors. A `None` means the field was missing
/// from the request entirely, while `Some("")` means it was present but
/// blank; both fail the presence rule identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    /// Contact name.
    pub name: Option<String>,
    /// Contact email address.
    pub email: Option<String>,
    /// Company name.
    pub company: Option<String>,
    /// Contact role within the company.
    pub role: Option<String>,
    /// Company country.
    pub country: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Number of restaurant locations operated.
    pub number_of_locations: Option<String>,
    /// Point-of-sale system in use.
    pub primary_pos: Option<String>,
    /// Free-form message from the prospect.
    pub message: Option<String>,
    /// Label of the call-to-action that opened the form.
    pub cta_label: Option<String>,
    /// Page the form was submitted from.
    pub source_page: Option<String>,
    /// UTM source attribution.
    pub utm_source: Option<String>,
    /// UTM medium attribution.
    pub utm_medium: Option<String>,
    /// UTM campaign attribution.
    pub utm_campaign: Option<String>,
}
