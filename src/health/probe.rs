//! Cached health probes.

use crate::delivery::ports::TrackerApi;
use crate::submission::{domain::SubmissionId, ports::SubmissionRepository};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use std::sync::{Arc, RwLock};

/// How long a probe result stays valid.
const PROBE_TTL_SECONDS: i64 = 60;

/// Result of one connectivity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    /// Whether the dependency answered successfully.
    pub ok: bool,
    /// When the check ran.
    pub checked_at: DateTime<Utc>,
    /// Round-trip time of the check in milliseconds.
    pub latency_ms: u64,
    /// Failure description when `ok` is false.
    pub error: Option<String>,
}

/// A report plus its cache provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSnapshot {
    /// The underlying report.
    pub report: HealthReport,
    /// Whether the report was served from cache.
    pub cached: bool,
    /// Age of the report in seconds at serve time.
    pub cache_age_secs: u64,
}

/// Cached connectivity probes over the tracker API and submission store.
///
/// The tracker side holds an optional transport: a deployment without
/// delivery credentials reports unhealthy with a configuration message
/// instead of fabricating a connection attempt.
pub struct HealthProbe<A, R, C>
where
    A: TrackerApi,
    R: SubmissionRepository,
    C: Clock + Send + Sync,
{
    api: Option<Arc<A>>,
    repository: Arc<R>,
    clock: Arc<C>,
    ttl: TimeDelta,
    tracker_cache: RwLock<Option<HealthReport>>,
    store_cache: RwLock<Option<HealthReport>>,
}

impl<A, R, C> HealthProbe<A, R, C>
where
    A: TrackerApi,
    R: SubmissionRepository,
    C: Clock + Send + Sync,
{
    /// Creates a probe set.
    #[must_use]
    pub fn new(api: Option<Arc<A>>, repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            api,
            repository,
            clock,
            ttl: TimeDelta::seconds(PROBE_TTL_SECONDS),
            tracker_cache: RwLock::new(None),
            store_cache: RwLock::new(None),
        }
    }

    /// Checks tracker connectivity, serving a cached report when fresh.
    pub async fn tracker(&self) -> ProbeSnapshot {
        if let Some(snapshot) = self.cached_snapshot(&self.tracker_cache) {
            return snapshot;
        }
        let started = self.clock.utc();
        let outcome = match &self.api {
            Some(api) => api.ping().await.map_err(|err| err.to_string()),
            None => Err("delivery not configured: tracker credentials missing".to_owned()),
        };
        let report = self.report_from(started, outcome);
        store_report(&self.tracker_cache, &report);
        ProbeSnapshot {
            report,
            cached: false,
            cache_age_secs: 0,
        }
    }

    /// Checks store connectivity, serving a cached report when fresh.
    ///
    /// The check is a benign read of a random identifier; a healthy store
    /// answers `None` without a persistence error.
    pub async fn store(&self) -> ProbeSnapshot {
        if let Some(snapshot) = self.cached_snapshot(&self.store_cache) {
            return snapshot;
        }
        let started = self.clock.utc();
        let outcome = self
            .repository
            .find_by_id(SubmissionId::new())
            .await
            .map(|_| ())
            .map_err(|err| err.to_string());
        let report = self.report_from(started, outcome);
        store_report(&self.store_cache, &report);
        ProbeSnapshot {
            report,
            cached: false,
            cache_age_secs: 0,
        }
    }

    fn cached_snapshot(&self, cache: &RwLock<Option<HealthReport>>) -> Option<ProbeSnapshot> {
        let guard = cache.read().ok()?;
        let report = guard.as_ref()?;
        let age = self.clock.utc().signed_duration_since(report.checked_at);
        if age >= self.ttl {
            return None;
        }
        Some(ProbeSnapshot {
            report: report.clone(),
            cached: true,
            cache_age_secs: u64::try_from(age.num_seconds()).unwrap_or_default(),
        })
    }

    fn report_from(&self, started: DateTime<Utc>, outcome: Result<(), String>) -> HealthReport {
        let finished = self.clock.utc();
        let latency = finished.signed_duration_since(started);
        HealthReport {
            ok: outcome.is_ok(),
            checked_at: finished,
            latency_ms: u64::try_from(latency.num_milliseconds()).unwrap_or_default(),
            error: outcome.err(),
        }
    }
}

fn store_report(cache: &RwLock<Option<HealthReport>>, report: &HealthReport) {
    if let Ok(mut guard) = cache.write() {
        *guard = Some(report.clone());
    }
}
