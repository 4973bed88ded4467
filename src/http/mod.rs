//! Axum request surface.
//!
//! Thin translation layer: untyped JSON in, pipeline outcomes out. Every
//! request runs inside a span carrying a generated correlation id, and
//! internal failure detail never leaks to the caller, only a generic
//! message, the correlation id, and a coarse internal code.

mod body;
mod handlers;
mod responses;
mod state;

pub use responses::{
    HealthBody, InternalErrorCode, SubmitErrorBody, SubmitInvalidBody, SubmitSuccessBody,
};
pub use state::AppState;

use crate::delivery::ports::{TaskDelivery, TrackerApi};
use crate::submission::ports::SubmissionRepository;
use axum::Router;
use axum::routing::{get, post};
use mockable::Clock;
use tower_http::trace::TraceLayer;

/// Builds the application router over the shared state.
pub fn router<A, R, D, C>(state: AppState<A, R, D, C>) -> Router
where
    A: TrackerApi + 'static,
    R: SubmissionRepository + 'static,
    D: TaskDelivery + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/api/leads", post(handlers::submit_lead::<A, R, D, C>))
        .route(
            "/api/health/clickup",
            get(handlers::tracker_health::<A, R, D, C>),
        )
        .route(
            "/api/health/storage",
            get(handlers::store_health::<A, R, D, C>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
