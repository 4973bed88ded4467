//! Domain model for task delivery.
//!
//! Models the error taxonomy with its fixed retry policy, the task draft
//! sent to the tracker, and the delivery receipt that reports partial
//! custom-field enrichment without failing the overall outcome.

mod error;
mod ids;
mod task;

pub use error::{DeliveryError, DeliveryErrorKind};
pub use ids::{ApiToken, CustomFieldId, ListId};
pub use task::{
    CreatedTask, CustomFieldDefinition, CustomFieldValue, DeliveryReceipt, TaskDraft, TaskPriority,
};
