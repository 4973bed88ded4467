//! Reqwest-backed ClickUp implementation of [`TrackerApi`].
//!
//! Owns transport policy: the API base URL, token authentication, the 10s
//! per-request timeout (5s for health pings), and classification of HTTP
//! and transport failures into [`DeliveryError`] kinds.

use crate::delivery::domain::{
    ApiToken, CreatedTask, CustomFieldDefinition, CustomFieldId, DeliveryError, DeliveryErrorKind,
    ListId, TaskDraft, TaskPriority,
};
use crate::delivery::ports::TrackerApi;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default ClickUp REST API base.
pub const DEFAULT_BASE_URL: &str = "https://api.clickup.com/api/v2";

/// Per-request timeout for task and field calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shorter timeout for connectivity pings.
const PING_TIMEOUT: Duration = Duration::from_secs(5);

/// Longest error-body excerpt carried into a [`DeliveryError`] message.
const ERROR_BODY_EXCERPT_CHARS: usize = 300;

/// ClickUp REST transport.
#[derive(Debug, Clone)]
pub struct ClickUpApi {
    http: reqwest::Client,
    base_url: String,
    token: ApiToken,
}

impl ClickUpApi {
    /// Builds a transport for the given base URL and token.
    ///
    /// # Errors
    ///
    /// Returns a [`DeliveryError`] of kind `unknown` when the underlying
    /// HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>, token: ApiToken) -> Result<Self, DeliveryError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| {
                DeliveryError::new(
                    DeliveryErrorKind::Unknown,
                    format!("failed to build HTTP client: {err}"),
                )
            })?;
        Ok(Self {
            http,
            base_url: normalise_base(base_url.into()),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, DeliveryError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(DeliveryError::from_status(
            status.as_u16(),
            format!("tracker responded {status}: {}", excerpt(&body)),
        ))
    }
}

fn normalise_base(base: String) -> String {
    base.trim_end_matches('/').to_owned()
}

/// Maps a reqwest transport failure onto the delivery taxonomy. Timeouts
/// and connection failures are `network` (retryable); everything else is
/// `unknown`.
fn classify_transport(err: &reqwest::Error) -> DeliveryError {
    let kind = if err.is_timeout() || err.is_connect() {
        DeliveryErrorKind::Network
    } else {
        DeliveryErrorKind::Unknown
    };
    DeliveryError::new(kind, format!("transport failure: {err}"))
}

fn excerpt(body: &str) -> String {
    body.chars().take(ERROR_BODY_EXCERPT_CHARS).collect()
}

#[derive(Serialize)]
struct CreateTaskBody<'a> {
    name: &'a str,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<u8>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<&'a str>,
}

#[derive(Deserialize)]
struct CreateTaskReply {
    id: String,
    url: String,
}

#[derive(Deserialize)]
struct FieldListReply {
    fields: Vec<FieldDto>,
}

#[derive(Deserialize)]
struct FieldDto {
    id: String,
    name: String,
}

#[derive(Serialize)]
struct SetFieldBody<'a> {
    value: &'a str,
}

#[async_trait]
impl TrackerApi for ClickUpApi {
    async fn create_task(
        &self,
        list_id: &ListId,
        draft: &TaskDraft,
    ) -> Result<CreatedTask, DeliveryError> {
        let body = CreateTaskBody {
            name: draft.name(),
            description: draft.description(),
            priority: draft.priority().map(TaskPriority::as_number),
            tags: draft.tags().iter().map(String::as_str).collect(),
        };
        let response = self
            .http
            .post(self.url(&format!("/list/{list_id}/task")))
            .header("Authorization", self.token.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|err| classify_transport(&err))?;
        let reply: CreateTaskReply = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|err| classify_transport(&err))?;
        Ok(CreatedTask::new(reply.id, reply.url))
    }

    async fn list_custom_fields(
        &self,
        list_id: &ListId,
    ) -> Result<Vec<CustomFieldDefinition>, DeliveryError> {
        let response = self
            .http
            .get(self.url(&format!("/list/{list_id}/field")))
            .header("Authorization", self.token.as_str())
            .send()
            .await
            .map_err(|err| classify_transport(&err))?;
        let reply: FieldListReply = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|err| classify_transport(&err))?;
        Ok(reply
            .fields
            .into_iter()
            .map(|dto| CustomFieldDefinition::new(CustomFieldId::new(dto.id), dto.name))
            .collect())
    }

    async fn set_custom_field(
        &self,
        task_id: &str,
        field_id: &CustomFieldId,
        value: &str,
    ) -> Result<(), DeliveryError> {
        let response = self
            .http
            .post(self.url(&format!("/task/{task_id}/field/{field_id}")))
            .header("Authorization", self.token.as_str())
            .json(&SetFieldBody { value })
            .send()
            .await
            .map_err(|err| classify_transport(&err))?;
        Self::check(response).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), DeliveryError> {
        let response = self
            .http
            .get(self.url("/user"))
            .header("Authorization", self.token.as_str())
            .timeout(PING_TIMEOUT)
            .send()
            .await
            .map_err(|err| classify_transport(&err))?;
        Self::check(response).await?;
        Ok(())
    }
}
