//! Repository port for durable submission persistence.

use crate::submission::domain::{SubmissionId, SubmissionRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for submission repository operations.
pub type SubmissionRepositoryResult<T> = Result<T, SubmissionRepositoryError>;

/// Submission persistence contract.
///
/// The pipeline's durability guarantee rests on this port: a record is
/// stored with status `pending` strictly before any delivery attempt, and
/// the final status update strictly follows the delivery outcome.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Stores a new submission record.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionRepositoryError::DuplicateSubmission`] when the
    /// record identifier already exists.
    async fn store(&self, record: &SubmissionRecord) -> SubmissionRepositoryResult<()>;

    /// Persists the resolved state of an existing record (status, external
    /// reference, error detail, timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionRepositoryError::NotFound`] when the record does
    /// not exist.
    async fn update(&self, record: &SubmissionRecord) -> SubmissionRepositoryResult<()>;

    /// Finds a record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn find_by_id(&self, id: SubmissionId)
    -> SubmissionRepositoryResult<Option<SubmissionRecord>>;
}

/// Errors returned by submission repository implementations.
#[derive(Debug, Clone, Error)]
pub enum SubmissionRepositoryError {
    /// A record with the same identifier already exists.
    #[error("duplicate submission identifier: {0}")]
    DuplicateSubmission(SubmissionId),

    /// The record was not found.
    #[error("submission not found: {0}")]
    NotFound(SubmissionId),

    /// The backing store is not configured for this deployment.
    #[error("submission store is not configured")]
    NotConfigured,

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SubmissionRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
