//! Domain model for lead submissions.
//!
//! The submission domain models the lifecycle of a captured lead: an
//! untrusted form becomes a validated payload, the payload becomes a
//! pending record, and the record resolves exactly once to `success` or
//! `failed` after the delivery attempt completes. Infrastructure concerns
//! stay outside the domain boundary.

mod error;
mod form;
mod ids;
mod payload;
mod record;

pub use error::{ParseSubmissionStatusError, SubmissionDomainError};
pub use form::LeadForm;
pub use ids::{ExternalTaskRef, SubmissionId};
pub use payload::{Attribution, LeadPayload};
pub use record::{SubmissionRecord, SubmissionStatus};
