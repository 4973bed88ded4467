//! Probe behaviour tests.

use crate::delivery::domain::{
    CreatedTask, CustomFieldDefinition, CustomFieldId, DeliveryError, DeliveryErrorKind, ListId,
    TaskDraft,
};
use crate::delivery::ports::TrackerApi;
use crate::health::HealthProbe;
use crate::submission::adapters::memory::InMemorySubmissionRepository;
use async_trait::async_trait;
use mockable::DefaultClock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Tracker double exercising only the ping path.
struct PingTracker {
    result: Result<(), DeliveryError>,
    pings: AtomicUsize,
}

impl PingTracker {
    fn new(result: Result<(), DeliveryError>) -> Self {
        Self {
            result,
            pings: AtomicUsize::new(0),
        }
    }

    fn ping_count(&self) -> usize {
        self.pings.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TrackerApi for PingTracker {
    async fn create_task(
        &self,
        _list_id: &ListId,
        _draft: &TaskDraft,
    ) -> Result<CreatedTask, DeliveryError> {
        Err(DeliveryError::new(
            DeliveryErrorKind::Unknown,
            "probe tests never create tasks",
        ))
    }

    async fn list_custom_fields(
        &self,
        _list_id: &ListId,
    ) -> Result<Vec<CustomFieldDefinition>, DeliveryError> {
        Err(DeliveryError::new(
            DeliveryErrorKind::Unknown,
            "probe tests never list fields",
        ))
    }

    async fn set_custom_field(
        &self,
        _task_id: &str,
        _field_id: &CustomFieldId,
        _value: &str,
    ) -> Result<(), DeliveryError> {
        Err(DeliveryError::new(
            DeliveryErrorKind::Unknown,
            "probe tests never write fields",
        ))
    }

    async fn ping(&self) -> Result<(), DeliveryError> {
        self.pings.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

fn probe_with(api: Option<Arc<PingTracker>>) -> HealthProbe<PingTracker, InMemorySubmissionRepository, DefaultClock> {
    HealthProbe::new(
        api,
        Arc::new(InMemorySubmissionRepository::new()),
        Arc::new(DefaultClock),
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn reachable_tracker_reports_healthy() {
    let tracker = Arc::new(PingTracker::new(Ok(())));
    let probe = probe_with(Some(Arc::clone(&tracker)));

    let snapshot = probe.tracker().await;

    assert!(snapshot.report.ok);
    assert!(snapshot.report.error.is_none());
    assert!(!snapshot.cached);
    assert_eq!(tracker.ping_count(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn failing_ping_reports_unhealthy_with_detail() {
    let tracker = Arc::new(PingTracker::new(Err(DeliveryError::from_status(
        401,
        "tracker responded 401",
    ))));
    let probe = probe_with(Some(tracker));

    let snapshot = probe.tracker().await;

    assert!(!snapshot.report.ok);
    let error = snapshot.report.error.as_deref().unwrap_or_default();
    assert!(error.contains("auth"), "error: {error}");
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_credentials_report_unhealthy_without_a_ping() {
    let probe = probe_with(None);

    let snapshot = probe.tracker().await;

    assert!(!snapshot.report.ok);
    let error = snapshot.report.error.as_deref().unwrap_or_default();
    assert!(error.contains("not configured"), "error: {error}");
}

#[tokio::test(flavor = "multi_thread")]
async fn second_tracker_check_within_the_ttl_is_served_from_cache() {
    let tracker = Arc::new(PingTracker::new(Ok(())));
    let probe = probe_with(Some(Arc::clone(&tracker)));

    let first = probe.tracker().await;
    let second = probe.tracker().await;

    assert!(!first.cached);
    assert!(second.cached);
    assert_eq!(second.report, first.report);
    assert_eq!(tracker.ping_count(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn store_probe_reports_healthy_and_caches() {
    let probe = probe_with(None);

    let first = probe.store().await;
    let second = probe.store().await;

    assert!(first.report.ok);
    assert!(!first.cached);
    assert!(second.cached);
}
