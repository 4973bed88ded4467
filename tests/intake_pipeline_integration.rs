//! End-to-end pipeline tests over the in-memory store and a fake tracker.
//!
//! These drive the intake service through the same wiring the binary uses,
//! verifying the durable-first contract: every valid submission lands in
//! the store with a final status, whatever the tracker does.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code uses indexing after length checks"
)]

use async_trait::async_trait;
use leadrelay::config::FieldMappings;
use leadrelay::delivery::domain::{
    CreatedTask, CustomFieldDefinition, CustomFieldId, DeliveryError, ListId, TaskDraft,
};
use leadrelay::delivery::ports::TrackerApi;
use leadrelay::delivery::retry::{BackoffSchedule, Jitter, Sleeper};
use leadrelay::delivery::services::DeliveryClient;
use leadrelay::submission::adapters::memory::InMemorySubmissionRepository;
use leadrelay::submission::domain::{LeadForm, SubmissionStatus};
use leadrelay::submission::ports::SubmissionRepository;
use leadrelay::submission::services::IntakeService;
use mockable::DefaultClock;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Tracker fake that records drafts and field writes.
#[derive(Default)]
struct FakeTracker {
    create_failures: Mutex<VecDeque<DeliveryError>>,
    drafts: Mutex<Vec<TaskDraft>>,
    writes: Mutex<Vec<(CustomFieldId, String)>>,
    create_calls: AtomicUsize,
}

impl FakeTracker {
    fn healthy() -> Self {
        Self::default()
    }

    fn failing_with(failures: impl IntoIterator<Item = DeliveryError>) -> Self {
        Self {
            create_failures: Mutex::new(failures.into_iter().collect()),
            ..Self::default()
        }
    }

    fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    fn captured_drafts(&self) -> Vec<TaskDraft> {
        self.drafts
            .lock()
            .expect("draft lock should not be poisoned")
            .clone()
    }

    fn captured_writes(&self) -> Vec<(CustomFieldId, String)> {
        self.writes
            .lock()
            .expect("write lock should not be poisoned")
            .clone()
    }
}

#[async_trait]
impl TrackerApi for FakeTracker {
    async fn create_task(
        &self,
        _list_id: &ListId,
        draft: &TaskDraft,
    ) -> Result<CreatedTask, DeliveryError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = self
            .create_failures
            .lock()
            .expect("failure lock should not be poisoned")
            .pop_front()
        {
            return Err(failure);
        }
        self.drafts
            .lock()
            .expect("draft lock should not be poisoned")
            .push(draft.clone());
        Ok(CreatedTask::new("task-1", "https://app.clickup.com/t/task-1"))
    }

    async fn list_custom_fields(
        &self,
        _list_id: &ListId,
    ) -> Result<Vec<CustomFieldDefinition>, DeliveryError> {
        let mappings = FieldMappings::default();
        Ok(vec![
            CustomFieldDefinition::new(mappings.name.clone(), "Name"),
            CustomFieldDefinition::new(mappings.email.clone(), "Email"),
            CustomFieldDefinition::new(mappings.company.clone(), "Company"),
            CustomFieldDefinition::new(mappings.role.clone(), "Role"),
            CustomFieldDefinition::new(mappings.country.clone(), "Country"),
            CustomFieldDefinition::new(mappings.phone.clone(), "Phone"),
            CustomFieldDefinition::new(mappings.number_of_locations.clone(), "Locations"),
            CustomFieldDefinition::new(mappings.primary_pos.clone(), "Primary POS"),
            CustomFieldDefinition::new(mappings.message.clone(), "Message"),
            CustomFieldDefinition::new(mappings.cta_label.clone(), "CTA"),
            CustomFieldDefinition::new(mappings.source_page.clone(), "Source page"),
            CustomFieldDefinition::new(mappings.utm_source.clone(), "UTM source"),
            CustomFieldDefinition::new(mappings.utm_medium.clone(), "UTM medium"),
            CustomFieldDefinition::new(mappings.utm_campaign.clone(), "UTM campaign"),
        ])
    }

    async fn set_custom_field(
        &self,
        _task_id: &str,
        field_id: &CustomFieldId,
        value: &str,
    ) -> Result<(), DeliveryError> {
        self.writes
            .lock()
            .expect("write lock should not be poisoned")
            .push((field_id.clone(), value.to_owned()));
        Ok(())
    }

    async fn ping(&self) -> Result<(), DeliveryError> {
        Ok(())
    }
}

/// Sleeper that returns immediately so retry tests run instantly.
struct InstantSleeper;

#[async_trait]
impl Sleeper for InstantSleeper {
    async fn sleep(&self, _duration: Duration) {}
}

/// Deterministic zero-offset jitter.
struct ZeroJitter;

impl Jitter for ZeroJitter {
    fn offset_within(&self, _range_ms: u64) -> u64 {
        0
    }
}

type PipelineDelivery = DeliveryClient<FakeTracker, InstantSleeper, ZeroJitter, DefaultClock>;
type PipelineService = IntakeService<InMemorySubmissionRepository, PipelineDelivery, DefaultClock>;

fn pipeline_with(
    tracker: Arc<FakeTracker>,
) -> (PipelineService, Arc<InMemorySubmissionRepository>) {
    let repository = Arc::new(InMemorySubmissionRepository::new());
    let delivery = DeliveryClient::new(
        tracker,
        ListId::new("list-1"),
        BackoffSchedule::default(),
        InstantSleeper,
        ZeroJitter,
        Arc::new(DefaultClock),
    );
    let service = IntakeService::new(
        Arc::clone(&repository),
        Some(Arc::new(delivery)),
        FieldMappings::default(),
        Arc::new(DefaultClock),
    );
    (service, repository)
}

fn store_only_pipeline() -> (PipelineService, Arc<InMemorySubmissionRepository>) {
    let repository = Arc::new(InMemorySubmissionRepository::new());
    let service = IntakeService::new(
        Arc::clone(&repository),
        None,
        FieldMappings::default(),
        Arc::new(DefaultClock),
    );
    (service, repository)
}

fn complete_form() -> LeadForm {
    LeadForm {
        name: Some("Jane Doe".to_owned()),
        email: Some("jane@acme.com".to_owned()),
        company: Some("Acme".to_owned()),
        role: Some("COO".to_owned()),
        country: Some("US".to_owned()),
        phone: Some("+1 (555) 123-4567".to_owned()),
        number_of_locations: Some("12".to_owned()),
        primary_pos: Some("Toast".to_owned()),
        message: Some("Interested in a demo".to_owned()),
        cta_label: Some("Request a demo".to_owned()),
        source_page: Some("/pricing".to_owned()),
        utm_source: Some("google".to_owned()),
        utm_medium: Some("cpc".to_owned()),
        utm_campaign: Some("spring-launch".to_owned()),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn valid_lead_flows_from_form_to_delivered_task() {
    let tracker = Arc::new(FakeTracker::healthy());
    let (service, repository) = pipeline_with(Arc::clone(&tracker));

    let accepted = service
        .submit(complete_form())
        .await
        .expect("submission should be accepted");

    assert_eq!(accepted.task_id(), Some("task-1"));
    assert_eq!(accepted.task_url(), Some("https://app.clickup.com/t/task-1"));

    let record = repository
        .find_by_id(accepted.submission_id())
        .await
        .expect("lookup should succeed")
        .expect("record should exist");
    assert_eq!(record.status(), SubmissionStatus::Success);

    let drafts = tracker.captured_drafts();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].name(), "New Lead: Jane Doe - Acme");
    assert!(drafts[0].description().contains("Email: jane@acme.com"));
    assert!(drafts[0].description().contains("UTM campaign: spring-launch"));
    assert_eq!(drafts[0].tags(), &["lead".to_owned(), "website".to_owned()]);
    assert_eq!(tracker.captured_writes().len(), 14);
}

#[tokio::test(flavor = "multi_thread")]
async fn store_only_deployment_keeps_the_lead_for_manual_processing() {
    let (service, repository) = store_only_pipeline();

    let accepted = service
        .submit(complete_form())
        .await
        .expect("submission should be accepted without delivery");

    assert!(accepted.task_id().is_none());
    let record = repository
        .find_by_id(accepted.submission_id())
        .await
        .expect("lookup should succeed")
        .expect("record should exist");
    assert_eq!(record.status(), SubmissionStatus::Failed);
    assert!(
        record
            .error_detail()
            .expect("detail should be recorded")
            .contains("not configured")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn persistent_tracker_outage_exhausts_retries_and_records_failure() {
    let server_error = || DeliveryError::from_status(500, "tracker responded 500");
    let tracker = Arc::new(FakeTracker::failing_with([
        server_error(),
        server_error(),
        server_error(),
        server_error(),
    ]));
    let (service, repository) = pipeline_with(Arc::clone(&tracker));

    let accepted = service
        .submit(complete_form())
        .await
        .expect("delivery failure must not fail the request");

    assert_eq!(tracker.create_calls(), 4);
    let record = repository
        .find_by_id(accepted.submission_id())
        .await
        .expect("lookup should succeed")
        .expect("record should exist");
    assert_eq!(record.status(), SubmissionStatus::Failed);
    let detail = record.error_detail().expect("detail should be recorded");
    assert!(detail.contains("server"), "detail: {detail}");
}

#[tokio::test(flavor = "multi_thread")]
async fn transient_outage_recovers_within_the_retry_budget() {
    let tracker = Arc::new(FakeTracker::failing_with([DeliveryError::from_status(
        429,
        "tracker responded 429",
    )]));
    let (service, repository) = pipeline_with(Arc::clone(&tracker));

    let accepted = service
        .submit(complete_form())
        .await
        .expect("submission should be accepted");

    assert_eq!(tracker.create_calls(), 2);
    let record = repository
        .find_by_id(accepted.submission_id())
        .await
        .expect("lookup should succeed")
        .expect("record should exist");
    assert_eq!(record.status(), SubmissionStatus::Success);
}

#[tokio::test(flavor = "multi_thread")]
async fn repeated_submissions_are_stored_as_distinct_records() {
    let tracker = Arc::new(FakeTracker::healthy());
    let (service, repository) = pipeline_with(tracker);

    let first = service
        .submit(complete_form())
        .await
        .expect("first submission should be accepted");
    let second = service
        .submit(complete_form())
        .await
        .expect("second submission should be accepted");

    assert_ne!(first.submission_id(), second.submission_id());
    assert_eq!(repository.len().expect("store should be readable"), 2);
}
