//! Intake orchestration tests.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use super::complete_form;
use crate::config::FieldMappings;
use crate::delivery::domain::{
    CreatedTask, DeliveryError, DeliveryErrorKind, DeliveryReceipt, TaskDraft,
};
use crate::delivery::ports::TaskDelivery;
use crate::submission::{
    adapters::memory::InMemorySubmissionRepository,
    domain::SubmissionStatus,
    ports::SubmissionRepository,
    services::{IntakeError, IntakeService},
};
use async_trait::async_trait;
use mockable::DefaultClock;
use std::sync::Arc;

mockall::mock! {
    pub Delivery {}

    #[async_trait]
    impl TaskDelivery for Delivery {
        async fn deliver(&self, draft: TaskDraft) -> Result<DeliveryReceipt, DeliveryError>;
    }
}

type TestService = IntakeService<InMemorySubmissionRepository, MockDelivery, DefaultClock>;

fn service_with(delivery: Option<MockDelivery>) -> (TestService, Arc<InMemorySubmissionRepository>) {
    let repository = Arc::new(InMemorySubmissionRepository::new());
    let service = IntakeService::new(
        Arc::clone(&repository),
        delivery.map(Arc::new),
        FieldMappings::default(),
        Arc::new(DefaultClock),
    );
    (service, repository)
}

fn sample_receipt() -> DeliveryReceipt {
    DeliveryReceipt::new(
        CreatedTask::new("task-1", "https://app.clickup.com/t/task-1"),
        3,
        Vec::new(),
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn successful_delivery_resolves_record_to_success() {
    let mut delivery = MockDelivery::new();
    delivery
        .expect_deliver()
        .times(1)
        .returning(|_| Ok(sample_receipt()));
    let (service, repository) = service_with(Some(delivery));

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
    assert_eq!(
        record.external_task_ref().map(AsRef::as_ref),
        Some("https://app.clickup.com/t/task-1")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn unconfigured_delivery_stores_lead_and_still_accepts() {
    let (service, repository) = service_with(None);

    let accepted = service
        .submit(complete_form())
        .await
        .expect("submission should be accepted");

    assert!(accepted.task_id().is_none());
    let record = repository
        .find_by_id(accepted.submission_id())
        .await
        .expect("lookup should succeed")
        .expect("record should exist");
    assert_eq!(record.status(), SubmissionStatus::Failed);
    let detail = record.error_detail().expect("detail should be recorded");
    assert!(detail.contains("not configured"), "detail: {detail}");
}

#[tokio::test(flavor = "multi_thread")]
async fn delivery_failure_is_recorded_but_swallowed() {
    let mut delivery = MockDelivery::new();
    delivery.expect_deliver().times(1).returning(|_| {
        Err(DeliveryError::new(
            DeliveryErrorKind::Auth,
            "tracker responded 401",
        ))
    });
    let (service, repository) = service_with(Some(delivery));

    let accepted = service
        .submit(complete_form())
        .await
        .expect("delivery failure must not fail the request");

    assert!(accepted.task_id().is_none());
    let record = repository
        .find_by_id(accepted.submission_id())
        .await
        .expect("lookup should succeed")
        .expect("record should exist");
    assert_eq!(record.status(), SubmissionStatus::Failed);
    let detail = record.error_detail().expect("detail should be recorded");
    assert!(detail.contains("auth"), "detail: {detail}");
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_task_reference_fails_the_record_and_omits_task_details() {
    let mut delivery = MockDelivery::new();
    delivery
        .expect_deliver()
        .times(1)
        .returning(|_| Ok(DeliveryReceipt::new(CreatedTask::new("", ""), 0, Vec::new())));
    let (service, repository) = service_with(Some(delivery));

    let accepted = service
        .submit(complete_form())
        .await
        .expect("submission should be accepted");

    // The response must agree with the stored record: no task details
    // for a record that resolved to failed.
    assert!(accepted.task_id().is_none());
    assert!(accepted.task_url().is_none());

    let record = repository
        .find_by_id(accepted.submission_id())
        .await
        .expect("lookup should succeed")
        .expect("record should exist");
    assert_eq!(record.status(), SubmissionStatus::Failed);
    let detail = record.error_detail().expect("detail should be recorded");
    assert!(detail.contains("empty task reference"), "detail: {detail}");
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_form_is_rejected_before_any_store_write() {
    let mut form = complete_form();
    form.email = Some("not-an-email".to_owned());
    let (service, repository) = service_with(None);

    let result = service.submit(form).await;
    assert!(matches!(result, Err(IntakeError::Invalid(_))));
    assert!(repository.is_empty().expect("store should be readable"));
}

#[tokio::test(flavor = "multi_thread")]
async fn repeated_submissions_create_distinct_records() {
    let mut delivery = MockDelivery::new();
    delivery
        .expect_deliver()
        .times(2)
        .returning(|_| Ok(sample_receipt()));
    let (service, repository) = service_with(Some(delivery));

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

#[tokio::test(flavor = "multi_thread")]
async fn no_record_is_left_pending_after_submit() {
    let mut delivery = MockDelivery::new();
    delivery.expect_deliver().returning(|_| {
        Err(DeliveryError::new(
            DeliveryErrorKind::Server,
            "tracker responded 500",
        ))
    });
    let (service, repository) = service_with(Some(delivery));

    let accepted = service
        .submit(complete_form())
        .await
        .expect("submission should be accepted");
    let record = repository
        .find_by_id(accepted.submission_id())
        .await
        .expect("lookup should succeed")
        .expect("record should exist");
    assert_ne!(record.status(), SubmissionStatus::Pending);
}

#[tokio::test(flavor = "multi_thread")]
async fn delivered_draft_contains_lead_and_attribution() {
    let mut delivery = MockDelivery::new();
    delivery
        .expect_deliver()
        .withf(|draft: &TaskDraft| {
            draft.name() == "New Lead: Jane Doe - Acme"
                && draft.description().contains("Email: jane@acme.com")
                && draft.description().contains("UTM campaign: spring-launch")
                && draft.custom_fields().len() == 14
        })
        .times(1)
        .returning(|_| Ok(sample_receipt()));
    let (service, _repository) = service_with(Some(delivery));

    service
        .submit(complete_form())
        .await
        .expect("submission should be accepted");
}
