//! Lead-to-task draft composition.

use crate::config::FieldMappings;
use crate::delivery::domain::{CustomFieldValue, TaskDraft, TaskPriority};
use crate::submission::domain::LeadPayload;

/// Tags attached to every delivered lead task.
const LEAD_TAGS: [&str; 2] = ["lead", "website"];

/// Builds the tracker task draft for a validated lead.
///
/// The description formats every lead and attribution field into a
/// human-readable block so the task is useful even when custom-field
/// enrichment fails. The custom-field list maps each field through the
/// configured identifier; fields without a value are omitted entirely,
/// never sent empty.
#[must_use]
pub fn compose_draft(payload: &LeadPayload, mappings: &FieldMappings) -> TaskDraft {
    let name = format!("New Lead: {} - {}", payload.name(), payload.company());
    TaskDraft::new(name, describe(payload))
        .with_priority(TaskPriority::High)
        .with_tags(LEAD_TAGS.into_iter().map(str::to_owned))
        .with_custom_fields(field_values(payload, mappings))
}

fn describe(payload: &LeadPayload) -> String {
    let mut lines = vec![
        "New demo request from the website.".to_owned(),
        String::new(),
        format!("Name: {}", payload.name()),
        format!("Email: {}", payload.email()),
        format!("Company: {}", payload.company()),
        format!("Role: {}", payload.role()),
        format!("Country: {}", payload.country()),
        format!("Phone: {}", payload.phone()),
        format!("Locations: {}", payload.number_of_locations()),
        format!("Primary POS: {}", payload.primary_pos()),
        String::new(),
        "Message:".to_owned(),
        payload.message().to_owned(),
    ];

    let attribution = payload.attribution();
    let attribution_lines = [
        ("CTA", attribution.cta_label()),
        ("Source page", attribution.source_page()),
        ("UTM source", attribution.utm_source()),
        ("UTM medium", attribution.utm_medium()),
        ("UTM campaign", attribution.utm_campaign()),
    ];
    if attribution_lines.iter().any(|(_, value)| value.is_some()) {
        lines.push(String::new());
        lines.push("Attribution:".to_owned());
        for (label, value) in attribution_lines {
            if let Some(text) = value {
                lines.push(format!("{label}: {text}"));
            }
        }
    }
    lines.join("\n")
}

fn field_values(payload: &LeadPayload, mappings: &FieldMappings) -> Vec<CustomFieldValue> {
    let attribution = payload.attribution();
    let pairs = [
        (&mappings.name, Some(payload.name())),
        (&mappings.email, Some(payload.email())),
        (&mappings.company, Some(payload.company())),
        (&mappings.role, Some(payload.role())),
        (&mappings.country, Some(payload.country())),
        (&mappings.phone, Some(payload.phone())),
        (&mappings.number_of_locations, Some(payload.number_of_locations())),
        (&mappings.primary_pos, Some(payload.primary_pos())),
        (&mappings.message, Some(payload.message())),
        (&mappings.cta_label, attribution.cta_label()),
        (&mappings.source_page, attribution.source_page()),
        (&mappings.utm_source, attribution.utm_source()),
        (&mappings.utm_medium, attribution.utm_medium()),
        (&mappings.utm_campaign, attribution.utm_campaign()),
    ];
    pairs
        .into_iter()
        .filter_map(|(field_id, value)| {
            let text = value?.trim();
            if text.is_empty() {
                return None;
            }
            Some(CustomFieldValue::new(field_id.clone(), text))
        })
        .collect()
}
