//! Durable submission record and its lifecycle.

use super::{ExternalTaskRef, LeadPayload, ParseSubmissionStatusError, SubmissionDomainError,
            SubmissionId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Delivery status of a stored lead.
///
/// Starts `Pending` and transitions exactly once to `Success` or `Failed`
/// after the delivery attempt completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// Stored, delivery not yet attempted or still in flight.
    Pending,
    /// Delivered to the external tracker.
    Success,
    /// Delivery failed or was skipped; the record holds the reason.
    Failed,
}

impl SubmissionStatus {
    /// Returns the canonical lowercase status name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = ParseSubmissionStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "success" => Ok(Self::Success),
            "failed" => Ok(Self::Failed),
            other => Err(ParseSubmissionStatusError(other.to_owned())),
        }
    }
}

/// Durable record of one captured lead.
///
/// Created once per form submission with status `pending`, strictly before
/// any delivery attempt, and mutated exactly once by the same request to
/// record the delivery outcome. Never deleted by this subsystem.
///
/// Invariants, enforced by the transition methods together with
/// [`ExternalTaskRef`] construction: a `Success` record always carries a
/// non-empty external task reference, a `Failed` record always carries a
/// non-empty error detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    id: SubmissionId,
    payload: LeadPayload,
    status: SubmissionStatus,
    external_task_ref: Option<ExternalTaskRef>,
    error_detail: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SubmissionRecord {
    /// Creates a pending record for a validated payload.
    #[must_use]
    pub fn new_pending(payload: LeadPayload, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: SubmissionId::new(),
            payload,
            status: SubmissionStatus::Pending,
            external_task_ref: None,
            error_detail: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Record identifier.
    #[must_use]
    pub const fn id(&self) -> SubmissionId {
        self.id
    }

    /// Validated lead payload.
    #[must_use]
    pub fn payload(&self) -> &LeadPayload {
        &self.payload
    }

    /// Current delivery status.
    #[must_use]
    pub const fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Reference to the delivered task, present only on `Success`.
    #[must_use]
    pub fn external_task_ref(&self) -> Option<&ExternalTaskRef> {
        self.external_task_ref.as_ref()
    }

    /// Human-readable failure reason, present only on `Failed`.
    #[must_use]
    pub fn error_detail(&self) -> Option<&str> {
        self.error_detail.as_deref()
    }

    /// Creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Timestamp of the most recent mutation.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Resolves the record as successfully delivered.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionDomainError::AlreadyResolved`] when the record
    /// already left the `pending` state.
    pub fn mark_success(
        &mut self,
        task_ref: ExternalTaskRef,
        clock: &impl Clock,
    ) -> Result<(), SubmissionDomainError> {
        self.ensure_pending()?;
        self.status = SubmissionStatus::Success;
        self.external_task_ref = Some(task_ref);
        self.updated_at = clock.utc();
        Ok(())
    }

    /// Resolves the record as failed with a human-readable reason.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionDomainError::EmptyErrorDetail`] when the detail
    /// is blank, or [`SubmissionDomainError::AlreadyResolved`] when the
    /// record already left the `pending` state.
    pub fn mark_failed(
        &mut self,
        detail: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), SubmissionDomainError> {
        let detail_text = detail.into();
        if detail_text.trim().is_empty() {
            return Err(SubmissionDomainError::EmptyErrorDetail);
        }
        self.ensure_pending()?;
        self.status = SubmissionStatus::Failed;
        self.error_detail = Some(detail_text);
        self.updated_at = clock.utc();
        Ok(())
    }

    const fn ensure_pending(&self) -> Result<(), SubmissionDomainError> {
        match self.status {
            SubmissionStatus::Pending => Ok(()),
            resolved => Err(SubmissionDomainError::AlreadyResolved(resolved)),
        }
    }
}
