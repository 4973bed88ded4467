//! Intake orchestration: validate, persist, deliver, record.
//!
//! The central policy of the whole pipeline lives here: the pending write
//! must succeed or the request fails, while any delivery failure is
//! recorded on the stored record and swallowed. The caller-facing contract
//! is "your lead is safe", not "your lead reached the tracker".

use crate::config::FieldMappings;
use crate::delivery::domain::DeliveryReceipt;
use crate::delivery::ports::TaskDelivery;
use crate::submission::{
    domain::{ExternalTaskRef, LeadForm, SubmissionId, SubmissionRecord},
    ports::{SubmissionRepository, SubmissionRepositoryError},
    services::compose::compose_draft,
    validation::{self, IntakeValidationError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

/// Caller-facing outcome of an accepted submission.
///
/// Returned for every durably stored lead, whether or not delivery
/// succeeded; the task fields are present only when it did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeAccepted {
    submission_id: SubmissionId,
    task_id: Option<String>,
    task_url: Option<String>,
}

impl IntakeAccepted {
    /// Identifier of the stored submission record.
    #[must_use]
    pub const fn submission_id(&self) -> SubmissionId {
        self.submission_id
    }

    /// Tracker task identifier, when delivery succeeded.
    #[must_use]
    pub fn task_id(&self) -> Option<&str> {
        self.task_id.as_deref()
    }

    /// Tracker task URL, when delivery succeeded.
    #[must_use]
    pub fn task_url(&self) -> Option<&str> {
        self.task_url.as_deref()
    }
}

/// Failures that surface to the caller.
///
/// Delivery failures are deliberately absent: they resolve the stored
/// record but never fail the request.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// The form failed validation.
    #[error(transparent)]
    Invalid(#[from] IntakeValidationError),

    /// The lead could not be durably stored.
    #[error(transparent)]
    Storage(#[from] SubmissionRepositoryError),
}

/// Result type for intake operations.
pub type IntakeResult<T> = Result<T, IntakeError>;

/// Intake orchestration service.
pub struct IntakeService<R, D, C>
where
    R: SubmissionRepository,
    D: TaskDelivery,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    delivery: Option<Arc<D>>,
    field_mappings: FieldMappings,
    clock: Arc<C>,
}

impl<R, D, C> IntakeService<R, D, C>
where
    R: SubmissionRepository,
    D: TaskDelivery,
    C: Clock + Send + Sync,
{
    /// Creates an intake service.
    ///
    /// A `None` delivery port puts the pipeline in store-only mode: leads
    /// are persisted and marked `failed` with a configuration reason for
    /// an operator to process manually.
    #[must_use]
    pub const fn new(
        repository: Arc<R>,
        delivery: Option<Arc<D>>,
        field_mappings: FieldMappings,
        clock: Arc<C>,
    ) -> Self {
        Self {
            repository,
            delivery,
            field_mappings,
            clock,
        }
    }

    /// Processes one form submission end to end.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Invalid`] when validation fails and
    /// [`IntakeError::Storage`] when the pending write fails. Delivery
    /// failures do not error; they resolve the record to `failed`.
    pub async fn submit(&self, form: LeadForm) -> IntakeResult<IntakeAccepted> {
        let payload = validation::validate(&form)?;
        let mut record = SubmissionRecord::new_pending(payload, &*self.clock);
        self.repository.store(&record).await?;
        info!(submission_id = %record.id(), "lead stored pending delivery");

        let Some(delivery) = &self.delivery else {
            self.resolve_failed(
                &mut record,
                "delivery not configured: tracker credentials or list id missing",
            )
            .await;
            return Ok(accepted(&record, None));
        };

        let draft = compose_draft(record.payload(), &self.field_mappings);
        match delivery.deliver(draft).await {
            Ok(receipt) => {
                let delivered = self.resolve_success(&mut record, &receipt).await;
                Ok(accepted(&record, delivered.then_some(&receipt)))
            }
            Err(err) => {
                warn!(
                    submission_id = %record.id(),
                    kind = %err.kind(),
                    "delivery failed; lead remains stored for manual processing"
                );
                self.resolve_failed(
                    &mut record,
                    format!("delivery failed ({}): {}", err.kind(), err.message()),
                )
                .await;
                Ok(accepted(&record, None))
            }
        }
    }

    /// Resolves the record from a delivery receipt. Returns whether the
    /// record actually reached `success`; an unusable task reference
    /// resolves it to `failed` instead, and the caller must not report
    /// task details for it.
    async fn resolve_success(
        &self,
        record: &mut SubmissionRecord,
        receipt: &DeliveryReceipt,
    ) -> bool {
        let reference = if receipt.task().url().trim().is_empty() {
            receipt.task().id()
        } else {
            receipt.task().url()
        };
        match ExternalTaskRef::new(reference) {
            Ok(task_ref) => {
                if let Err(err) = record.mark_success(task_ref, &*self.clock) {
                    error!(submission_id = %record.id(), error = %err, "invalid success transition");
                    return false;
                }
                self.persist_resolution(record).await;
                true
            }
            Err(err) => {
                error!(submission_id = %record.id(), error = %err, "tracker returned empty task reference");
                self.resolve_failed(record, "tracker returned an empty task reference")
                    .await;
                false
            }
        }
    }

    async fn resolve_failed(&self, record: &mut SubmissionRecord, detail: impl Into<String>) {
        if let Err(err) = record.mark_failed(detail, &*self.clock) {
            error!(submission_id = %record.id(), error = %err, "invalid failure transition");
            return;
        }
        self.persist_resolution(record).await;
    }

    /// Writes the resolved record back. An update failure here is logged
    /// and swallowed: the pending record is already durable, which is the
    /// guarantee that matters.
    async fn persist_resolution(&self, record: &SubmissionRecord) {
        if let Err(err) = self.repository.update(record).await {
            error!(
                submission_id = %record.id(),
                error = %err,
                "final status update failed; record remains pending in store"
            );
        }
    }
}

fn accepted(record: &SubmissionRecord, receipt: Option<&DeliveryReceipt>) -> IntakeAccepted {
    let task = receipt.map(DeliveryReceipt::task);
    IntakeAccepted {
        submission_id: record.id(),
        task_id: task.and_then(|created| non_blank(created.id())),
        task_url: task.and_then(|created| non_blank(created.url())),
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
