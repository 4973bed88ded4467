//! Unit tests for the submission module.

mod intake_service_tests;

use crate::submission::domain::LeadForm;

/// A fully populated, valid lead form.
fn complete_form() -> LeadForm {
    LeadForm {
        name: Some("Jane Doe".to_owned()),
        email: Some("jane@acme.com".to_owned()),
        company: Some("Acme".to_owned()),
        role: Some("COO".to_owned()),
        country: Some("US".to_owned()),
        phone: Some("5551234567".to_owned()),
        number_of_locations: Some("12".to_owned()),
        primary_pos: Some("Toast".to_owned()),
        message: Some("Interested in a demo".to_owned()),
        cta_label: Some("Request a demo".to_owned()),
        source_page: Some("/pricing".to_owned()),
        utm_source: Some("google".to_owned()),
        utm_medium: Some("cpc".to_owned()),
        utm_campaign: Some("spring-launch".to_owned()),
    }
}
