//! Shared handler state.

use crate::delivery::ports::{TaskDelivery, TrackerApi};
use crate::health::HealthProbe;
use crate::submission::ports::SubmissionRepository;
use crate::submission::services::IntakeService;
use mockable::Clock;
use std::sync::Arc;

/// State shared by all handlers.
pub struct AppState<A, R, D, C>
where
    A: TrackerApi,
    R: SubmissionRepository,
    D: TaskDelivery,
    C: Clock + Send + Sync,
{
    intake: Arc<IntakeService<R, D, C>>,
    probe: Arc<HealthProbe<A, R, C>>,
}

impl<A, R, D, C> AppState<A, R, D, C>
where
    A: TrackerApi,
    R: SubmissionRepository,
    D: TaskDelivery,
    C: Clock + Send + Sync,
{
    /// Bundles the services handlers depend on.
    #[must_use]
    pub const fn new(
        intake: Arc<IntakeService<R, D, C>>,
        probe: Arc<HealthProbe<A, R, C>>,
    ) -> Self {
        Self { intake, probe }
    }

    /// Intake orchestration service.
    #[must_use]
    pub fn intake(&self) -> &IntakeService<R, D, C> {
        &self.intake
    }

    /// Health probe set.
    #[must_use]
    pub fn probe(&self) -> &HealthProbe<A, R, C> {
        &self.probe
    }
}

impl<A, R, D, C> Clone for AppState<A, R, D, C>
where
    A: TrackerApi,
    R: SubmissionRepository,
    D: TaskDelivery,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            intake: Arc::clone(&self.intake),
            probe: Arc::clone(&self.probe),
        }
    }
}
