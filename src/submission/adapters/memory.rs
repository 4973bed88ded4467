//! In-memory submission repository.
//!
//! Stands in for the durable fallback store in tests and the demo binary.
//! The pipeline only requires read-after-write consistency within one
//! request, which a `RwLock`-guarded map provides trivially.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::submission::{
    domain::{SubmissionId, SubmissionRecord},
    ports::{SubmissionRepository, SubmissionRepositoryError, SubmissionRepositoryResult},
};

/// Thread-safe in-memory submission repository.
#[derive(Debug, Clone, Default)]
pub struct InMemorySubmissionRepository {
    records: Arc<RwLock<HashMap<SubmissionId, SubmissionRecord>>>,
}

impl InMemorySubmissionRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn len(&self) -> SubmissionRepositoryResult<usize> {
        let records = self.records.read().map_err(|err| {
            SubmissionRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(records.len())
    }

    /// Reports whether the repository holds no records.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn is_empty(&self) -> SubmissionRepositoryResult<bool> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn store(&self, record: &SubmissionRecord) -> SubmissionRepositoryResult<()> {
        let mut records = self.records.write().map_err(|err| {
            SubmissionRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if records.contains_key(&record.id()) {
            return Err(SubmissionRepositoryError::DuplicateSubmission(record.id()));
        }
        records.insert(record.id(), record.clone());
        Ok(())
    }

    async fn update(&self, record: &SubmissionRecord) -> SubmissionRepositoryResult<()> {
        let mut records = self.records.write().map_err(|err| {
            SubmissionRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !records.contains_key(&record.id()) {
            return Err(SubmissionRepositoryError::NotFound(record.id()));
        }
        records.insert(record.id(), record.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: SubmissionId,
    ) -> SubmissionRepositoryResult<Option<SubmissionRecord>> {
        let records = self.records.read().map_err(|err| {
            SubmissionRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(records.get(&id).cloned())
    }
}
