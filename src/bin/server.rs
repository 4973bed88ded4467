//! Leadrelay HTTP server.
//!
//! Wires the pipeline from environment configuration: an in-memory
//! fallback store, the ClickUp transport when credentials are present,
//! the retrying delivery client, the intake service, the health probes,
//! and the axum router. Without tracker credentials the server still runs
//! and stores every lead for manual processing.

use leadrelay::config::Config;
use leadrelay::delivery::adapters::clickup::ClickUpApi;
use leadrelay::delivery::retry::{BackoffSchedule, ThreadRngJitter, TokioSleeper};
use leadrelay::delivery::services::LiveDeliveryClient;
use leadrelay::health::HealthProbe;
use leadrelay::http::{self, AppState};
use leadrelay::submission::adapters::memory::InMemorySubmissionRepository;
use leadrelay::submission::services::IntakeService;
use mockable::DefaultClock;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    let repository = Arc::new(InMemorySubmissionRepository::new());
    let clock = Arc::new(DefaultClock);

    let (api, delivery) = match config.clickup.credentials() {
        Some((token, list_id)) => {
            let api = Arc::new(ClickUpApi::new(
                config.clickup.base_url.clone(),
                token.clone(),
            )?);
            let client = Arc::new(LiveDeliveryClient::new(
                Arc::clone(&api),
                list_id.clone(),
                BackoffSchedule::default(),
                TokioSleeper,
                ThreadRngJitter,
                Arc::clone(&clock),
            ));
            (Some(api), Some(client))
        }
        None => {
            warn!("tracker credentials missing; leads will be stored without delivery");
            (None, None)
        }
    };

    let intake = Arc::new(IntakeService::new(
        Arc::clone(&repository),
        delivery,
        config.clickup.fields.clone(),
        Arc::clone(&clock),
    ));
    let probe = Arc::new(HealthProbe::new(
        api,
        Arc::clone(&repository),
        Arc::clone(&clock),
    ));

    let app = http::router(AppState::new(intake, probe));
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "leadrelay listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to install shutdown handler");
        return;
    }
    info!("shutdown signal received");
}
