//! Request handlers.

use super::body::form_from_value;
use super::responses::{
    HealthBody, InternalErrorCode, SubmitErrorBody, SubmitInvalidBody, SubmitSuccessBody,
};
use super::state::AppState;
use crate::delivery::ports::{TaskDelivery, TrackerApi};
use crate::health::ProbeSnapshot;
use crate::submission::ports::{SubmissionRepository, SubmissionRepositoryError};
use crate::submission::services::IntakeError;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mockable::Clock;
use serde_json::Value;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

/// Confirmation message returned for every durably stored lead.
const ACCEPTED_MESSAGE: &str = "Thanks! Your request has been received.";

/// Generic caller-facing message for internal failures.
const INTERNAL_MESSAGE: &str = "Something went wrong processing your request.";

/// `POST /api/leads`: validates, stores, and delivers one lead.
pub async fn submit_lead<A, R, D, C>(
    State(state): State<AppState<A, R, D, C>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response
where
    A: TrackerApi + 'static,
    R: SubmissionRepository + 'static,
    D: TaskDelivery + 'static,
    C: Clock + Send + Sync + 'static,
{
    let request_id = Uuid::new_v4();
    let span = info_span!("lead_submission", correlation_id = %request_id);
    async move {
        let body = match payload {
            Ok(Json(body)) => body,
            Err(rejection) => {
                error!(error = %rejection, "request body is not valid JSON");
                return internal_error(request_id, InternalErrorCode::ValidationError);
            }
        };
        let form = match form_from_value(&body) {
            Ok(form) => form,
            Err(err) => {
                error!(error = %err, "request body has a mistyped field");
                return internal_error(request_id, InternalErrorCode::TypeError);
            }
        };
        match state.intake().submit(form).await {
            Ok(accepted) => {
                info!(
                    submission_id = %accepted.submission_id(),
                    delivered = accepted.task_id().is_some(),
                    "submission accepted"
                );
                (
                    StatusCode::OK,
                    Json(SubmitSuccessBody {
                        success: true,
                        message: ACCEPTED_MESSAGE.to_owned(),
                        submission_id: accepted.submission_id().to_string(),
                        task_id: accepted.task_id().map(str::to_owned),
                        task_url: accepted.task_url().map(str::to_owned),
                    }),
                )
                    .into_response()
            }
            Err(IntakeError::Invalid(err)) => {
                info!(invalid_fields = ?err.invalid_fields(), "submission rejected");
                (
                    StatusCode::BAD_REQUEST,
                    Json(SubmitInvalidBody {
                        success: false,
                        error: err.to_string(),
                        invalid_fields: err.invalid_fields(),
                    }),
                )
                    .into_response()
            }
            Err(IntakeError::Storage(err)) => {
                error!(error = %err, "lead could not be durably stored");
                let code = match err {
                    SubmissionRepositoryError::NotConfigured => {
                        InternalErrorCode::StorageNotConfigured
                    }
                    _ => InternalErrorCode::InternalError,
                };
                internal_error(request_id, code)
            }
        }
    }
    .instrument(span)
    .await
}

/// `GET /api/health/clickup`: tracker connectivity.
pub async fn tracker_health<A, R, D, C>(State(state): State<AppState<A, R, D, C>>) -> Response
where
    A: TrackerApi + 'static,
    R: SubmissionRepository + 'static,
    D: TaskDelivery + 'static,
    C: Clock + Send + Sync + 'static,
{
    health_response(state.probe().tracker().await)
}

/// `GET /api/health/storage`: submission store connectivity.
pub async fn store_health<A, R, D, C>(State(state): State<AppState<A, R, D, C>>) -> Response
where
    A: TrackerApi + 'static,
    R: SubmissionRepository + 'static,
    D: TaskDelivery + 'static,
    C: Clock + Send + Sync + 'static,
{
    health_response(state.probe().store().await)
}

fn health_response(snapshot: ProbeSnapshot) -> Response {
    let status = if snapshot.report.ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let body = HealthBody {
        ok: snapshot.report.ok,
        timestamp: snapshot.report.checked_at.to_rfc3339(),
        latency_ms: snapshot.report.latency_ms,
        error: snapshot.report.error,
        status_code: status.as_u16(),
        cached: snapshot.cached,
        cache_age: snapshot.cache_age_secs,
    };
    (status, Json(body)).into_response()
}

fn internal_error(request_id: Uuid, code: InternalErrorCode) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(SubmitErrorBody {
            success: false,
            error: INTERNAL_MESSAGE.to_owned(),
            request_id: request_id.to_string(),
            code,
        }),
    )
        .into_response()
}
