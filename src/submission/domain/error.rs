//! Error types for submission domain validation and parsing.

use super::record::SubmissionStatus;
use thiserror::Error;

/// Errors returned while constructing or transitioning domain submission
/// values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionDomainError {
    /// The external task reference is empty after trimming.
    #[error("external task reference must not be empty")]
    EmptyExternalTaskRef,

    /// The failure detail is empty after trimming.
    #[error("failure detail must not be empty")]
    EmptyErrorDetail,

    /// The record already left the `pending` state; a second transition is
    /// not permitted.
    #[error("submission already resolved to {0}")]
    AlreadyResolved(SubmissionStatus),
}

/// Error returned while parsing submission statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown submission status: {0}")]
pub struct ParseSubmissionStatusError(pub String);
