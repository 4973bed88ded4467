//! Transport port for the external tracker API.

use crate::delivery::domain::{
    CreatedTask, CustomFieldDefinition, CustomFieldId, DeliveryError, ListId, TaskDraft,
};
use async_trait::async_trait;

/// Raw tracker API operations.
///
/// Implementations own transport concerns: base URL, authentication,
/// per-call timeouts, and classification of HTTP failures into
/// [`DeliveryError`] kinds. Retry policy lives above this port in the
/// delivery client, so every method here represents exactly one call.
#[async_trait]
pub trait TrackerApi: Send + Sync {
    /// Creates a minimal task (name, description, priority, tags) on the
    /// given list.
    ///
    /// # Errors
    ///
    /// Returns a classified [`DeliveryError`] on any transport or API
    /// failure.
    async fn create_task(
        &self,
        list_id: &ListId,
        draft: &TaskDraft,
    ) -> Result<CreatedTask, DeliveryError>;

    /// Fetches the custom-field definitions advertised by the list.
    ///
    /// # Errors
    ///
    /// Returns a classified [`DeliveryError`] on any transport or API
    /// failure.
    async fn list_custom_fields(
        &self,
        list_id: &ListId,
    ) -> Result<Vec<CustomFieldDefinition>, DeliveryError>;

    /// Writes one custom-field value on an existing task.
    ///
    /// # Errors
    ///
    /// Returns a classified [`DeliveryError`] on any transport or API
    /// failure.
    async fn set_custom_field(
        &self,
        task_id: &str,
        field_id: &CustomFieldId,
        value: &str,
    ) -> Result<(), DeliveryError>;

    /// Authenticated connectivity check with a short timeout.
    ///
    /// # Errors
    ///
    /// Returns a classified [`DeliveryError`] when the tracker is
    /// unreachable or rejects the credentials.
    async fn ping(&self) -> Result<(), DeliveryError>;
}
