//! Task draft, created-task, and receipt types.

use super::CustomFieldId;
use serde::{Deserialize, Serialize};

/// Priority hint forwarded to the tracker.
///
/// Mirrors the tracker's 1–4 urgency scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    /// Urgent (1).
    Urgent,
    /// High (2).
    High,
    /// Normal (3).
    Normal,
    /// Low (4).
    Low,
}

impl TaskPriority {
    /// Returns the tracker's numeric encoding of the priority.
    #[must_use]
    pub const fn as_number(self) -> u8 {
        match self {
            Self::Urgent => 1,
            Self::High => 2,
            Self::Normal => 3,
            Self::Low => 4,
        }
    }
}

/// A value to write into one custom field of a created task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomFieldValue {
    field_id: CustomFieldId,
    value: String,
}

impl CustomFieldValue {
    /// Pairs a field identifier with the value to write.
    #[must_use]
    pub fn new(field_id: CustomFieldId, value: impl Into<String>) -> Self {
        Self {
            field_id,
            value: value.into(),
        }
    }

    /// Target field identifier.
    #[must_use]
    pub fn field_id(&self) -> &CustomFieldId {
        &self.field_id
    }

    /// Value to write.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Custom-field definition advertised by a tracker list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomFieldDefinition {
    id: CustomFieldId,
    name: String,
}

impl CustomFieldDefinition {
    /// Creates a definition from the tracker's advertised id and name.
    #[must_use]
    pub fn new(id: CustomFieldId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Field identifier.
    #[must_use]
    pub fn id(&self) -> &CustomFieldId {
        &self.id
    }

    /// Human-readable field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Everything needed to create one lead task in the tracker.
///
/// Phase 1 of the delivery protocol sends only name, description,
/// priority, and tags; the custom fields are applied best-effort in
/// phase 2 after the task exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    name: String,
    description: String,
    priority: Option<TaskPriority>,
    tags: Vec<String>,
    custom_fields: Vec<CustomFieldValue>,
}

impl TaskDraft {
    /// Creates a draft with the required name and description.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            priority: None,
            tags: Vec::new(),
            custom_fields: Vec::new(),
        }
    }

    /// Sets the priority hint.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Sets the custom-field values to apply after creation.
    #[must_use]
    pub fn with_custom_fields(
        mut self,
        fields: impl IntoIterator<Item = CustomFieldValue>,
    ) -> Self {
        self.custom_fields = fields.into_iter().collect();
        self
    }

    /// Task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Priority hint, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Task tags.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Custom-field values for phase 2.
    #[must_use]
    pub fn custom_fields(&self) -> &[CustomFieldValue] {
        &self.custom_fields
    }
}

/// Identity of a task created in the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTask {
    id: String,
    url: String,
}

impl CreatedTask {
    /// Creates the identity from the tracker's response.
    #[must_use]
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }

    /// Tracker-assigned task identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Browser URL of the created task.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Outcome of a successful delivery.
///
/// Always carries the created task; the field counts report partial
/// enrichment, which callers must treat as success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    task: CreatedTask,
    applied_field_count: usize,
    failed_field_ids: Vec<CustomFieldId>,
}

impl DeliveryReceipt {
    /// Creates a receipt for a created task and its enrichment tallies.
    #[must_use]
    pub fn new(
        task: CreatedTask,
        applied_field_count: usize,
        failed_field_ids: Vec<CustomFieldId>,
    ) -> Self {
        Self {
            task,
            applied_field_count,
            failed_field_ids,
        }
    }

    /// The created task.
    #[must_use]
    pub fn task(&self) -> &CreatedTask {
        &self.task
    }

    /// Number of custom fields applied successfully.
    #[must_use]
    pub const fn applied_field_count(&self) -> usize {
        self.applied_field_count
    }

    /// Identifiers of custom fields that could not be applied.
    #[must_use]
    pub fn failed_field_ids(&self) -> &[CustomFieldId] {
        &self.failed_field_ids
    }
}
