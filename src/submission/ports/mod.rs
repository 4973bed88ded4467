//! Port contracts for the submission module.

mod repository;

pub use repository::{SubmissionRepository, SubmissionRepositoryError, SubmissionRepositoryResult};
