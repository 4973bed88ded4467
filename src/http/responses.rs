//! Wire response bodies.

use serde::Serialize;

/// Body of a `200` intake response.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSuccessBody {
    /// Always `true`.
    pub success: bool,
    /// Caller-facing confirmation message.
    pub message: String,
    /// Identifier of the stored submission.
    pub submission_id: String,
    /// Tracker task identifier, when delivery succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    /// Tracker task URL, when delivery succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_url: Option<String>,
}

/// Body of a `400` validation failure.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmitInvalidBody {
    /// Always `false`.
    pub success: bool,
    /// Caller-facing validation message.
    pub error: String,
    /// Wire names of every invalid or missing field.
    pub invalid_fields: Vec<&'static str>,
}

/// Coarse internal failure classification for operator-facing logs and
/// support lookup. Carried on `500` bodies; never any internal detail.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InternalErrorCode {
    /// The fallback store is not configured.
    StorageNotConfigured,
    /// The request body could not be parsed.
    ValidationError,
    /// A field had an unexpected JSON type.
    TypeError,
    /// Anything else.
    InternalError,
}

/// Body of a `500` failure.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmitErrorBody {
    /// Always `false`.
    pub success: bool,
    /// Generic caller-facing message.
    pub error: String,
    /// Correlation id for support lookup.
    pub request_id: String,
    /// Internal failure classification.
    pub code: InternalErrorCode,
}

/// Body of a health probe response.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HealthBody {
    /// Whether the dependency answered successfully.
    pub ok: bool,
    /// RFC 3339 timestamp of the underlying check.
    pub timestamp: String,
    /// Round-trip time of the check in milliseconds.
    pub latency_ms: u64,
    /// Failure description when `ok` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Mirrors the HTTP status of this response.
    pub status_code: u16,
    /// Whether the report was served from cache.
    pub cached: bool,
    /// Age of the report in seconds at serve time.
    pub cache_age: u64,
}
