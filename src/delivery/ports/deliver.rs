//! Delivery port consumed by the intake service.

use crate::delivery::domain::{DeliveryError, DeliveryReceipt, TaskDraft};
use async_trait::async_trait;

/// Best-effort task delivery.
///
/// A returned error means the task does not exist in the tracker; the
/// caller decides what that means for the stored lead. Partial
/// custom-field enrichment is reported on the receipt and is still
/// success.
#[async_trait]
pub trait TaskDelivery: Send + Sync {
    /// Delivers one lead task to the tracker.
    ///
    /// # Errors
    ///
    /// Returns the last classified [`DeliveryError`] once the retry policy
    /// is exhausted or a non-retryable failure occurs.
    async fn deliver(&self, draft: TaskDraft) -> Result<DeliveryReceipt, DeliveryError>;
}
