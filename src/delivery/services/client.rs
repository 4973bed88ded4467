//! Two-phase task-delivery client.
//!
//! Phase 1 creates a minimal task under the retry policy; phase 2 applies
//! custom fields best-effort, validating identifiers against the list's
//! cached field definitions. Phase 2 failures degrade the receipt, never
//! the outcome.

use crate::delivery::{
    adapters::clickup::ClickUpApi,
    cache::TtlCache,
    domain::{
        CreatedTask, CustomFieldDefinition, CustomFieldId, CustomFieldValue, DeliveryError,
        DeliveryReceipt, ListId, TaskDraft,
    },
    ports::{TaskDelivery, TrackerApi},
    retry::{BackoffSchedule, Jitter, Sleeper, ThreadRngJitter, TokioSleeper},
};
use async_trait::async_trait;
use chrono::TimeDelta;
use mockable::{Clock, DefaultClock};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// How long fetched custom-field definitions stay valid.
const FIELD_DEFINITION_TTL_MINUTES: i64 = 5;

/// Production delivery client wiring.
pub type LiveDeliveryClient = DeliveryClient<ClickUpApi, TokioSleeper, ThreadRngJitter, DefaultClock>;

/// Retrying task-delivery client for one target list.
pub struct DeliveryClient<A, S, J, C>
where
    A: TrackerApi,
    S: Sleeper,
    J: Jitter,
    C: Clock + Send + Sync,
{
    api: Arc<A>,
    list_id: ListId,
    schedule: BackoffSchedule,
    sleeper: S,
    jitter: J,
    clock: Arc<C>,
    field_cache: TtlCache<ListId, Arc<[CustomFieldDefinition]>>,
}

impl<A, S, J, C> DeliveryClient<A, S, J, C>
where
    A: TrackerApi,
    S: Sleeper,
    J: Jitter,
    C: Clock + Send + Sync,
{
    /// Creates a delivery client for the given list.
    #[must_use]
    pub fn new(
        api: Arc<A>,
        list_id: ListId,
        schedule: BackoffSchedule,
        sleeper: S,
        jitter: J,
        clock: Arc<C>,
    ) -> Self {
        Self {
            api,
            list_id,
            schedule,
            sleeper,
            jitter,
            clock,
            field_cache: TtlCache::new(TimeDelta::minutes(FIELD_DEFINITION_TTL_MINUTES)),
        }
    }

    /// Phase 1: minimal task creation under the retry policy.
    async fn create_with_retry(&self, draft: &TaskDraft) -> Result<CreatedTask, DeliveryError> {
        let mut attempt = 0u32;
        loop {
            match self.api.create_task(&self.list_id, draft).await {
                Ok(task) => {
                    if attempt > 0 {
                        info!(attempt = attempt + 1, task_id = task.id(), "task created after retries");
                    }
                    return Ok(task);
                }
                Err(err) if err.is_retryable() && attempt < self.schedule.max_retries() => {
                    let delay = self.schedule.jittered_delay(attempt, &self.jitter);
                    warn!(
                        kind = %err.kind(),
                        attempt = attempt + 1,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        "task creation failed; backing off before retry"
                    );
                    self.sleeper.sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => {
                    warn!(
                        kind = %err.kind(),
                        attempt = attempt + 1,
                        retryable = err.is_retryable(),
                        "task creation failed; giving up"
                    );
                    return Err(err);
                }
            }
        }
    }

    /// Phase 2: independent best-effort field writes.
    ///
    /// Returns the applied count and the identifiers that failed. Empty
    /// values are skipped silently; identifiers the list does not know are
    /// recorded as failed without a write attempt.
    async fn apply_custom_fields(
        &self,
        task: &CreatedTask,
        fields: &[CustomFieldValue],
    ) -> (usize, Vec<CustomFieldId>) {
        let known = self.known_field_ids().await;
        let mut applied = 0usize;
        let mut failed = Vec::new();

        for field in fields {
            if field.value().trim().is_empty() {
                continue;
            }
            if let Some(known_ids) = &known
                && !known_ids.contains(field.field_id())
            {
                debug!(field_id = %field.field_id(), "field not defined on list; skipping write");
                failed.push(field.field_id().clone());
                continue;
            }
            match self
                .api
                .set_custom_field(task.id(), field.field_id(), field.value())
                .await
            {
                Ok(()) => applied += 1,
                Err(err) => {
                    warn!(field_id = %field.field_id(), error = %err, "custom field write failed");
                    failed.push(field.field_id().clone());
                }
            }
        }
        (applied, failed)
    }

    /// Returns the list's known field identifiers, from cache when fresh.
    ///
    /// `None` means the definitions could not be fetched; callers degrade
    /// to attempting every field unvalidated.
    async fn known_field_ids(&self) -> Option<HashSet<CustomFieldId>> {
        let now = self.clock.utc();
        if let Some(definitions) = self.field_cache.get(&self.list_id, now) {
            return Some(ids_of(&definitions));
        }
        match self.api.list_custom_fields(&self.list_id).await {
            Ok(definitions) => {
                let shared: Arc<[CustomFieldDefinition]> = definitions.into();
                self.field_cache.insert(self.list_id.clone(), shared.clone(), now);
                Some(ids_of(&shared))
            }
            Err(err) => {
                warn!(error = %err, "field definitions unavailable; applying fields unvalidated");
                None
            }
        }
    }
}

fn ids_of(definitions: &[CustomFieldDefinition]) -> HashSet<CustomFieldId> {
    definitions
        .iter()
        .map(|definition| definition.id().clone())
        .collect()
}

#[async_trait]
impl<A, S, J, C> TaskDelivery for DeliveryClient<A, S, J, C>
where
    A: TrackerApi,
    S: Sleeper,
    J: Jitter,
    C: Clock + Send + Sync,
{
    async fn deliver(&self, draft: TaskDraft) -> Result<DeliveryReceipt, DeliveryError> {
        let task = self.create_with_retry(&draft).await?;
        let (applied, failed) = if draft.custom_fields().is_empty() {
            (0, Vec::new())
        } else {
            self.apply_custom_fields(&task, draft.custom_fields()).await
        };
        info!(
            task_id = task.id(),
            applied_fields = applied,
            failed_fields = failed.len(),
            "lead task delivered"
        );
        Ok(DeliveryReceipt::new(task, applied, failed))
    }
}
