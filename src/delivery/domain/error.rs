//! Delivery error taxonomy with fixed retryability.

use std::fmt;
use thiserror::Error;

/// Classified failure cause for a tracker API call.
///
/// Each kind carries a fixed retry policy: rate limiting, server faults,
/// and network faults are transient and retryable; authentication,
/// payload, and unclassified failures are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryErrorKind {
    /// Credentials rejected (HTTP 401/403).
    Auth,
    /// The tracker rejected the request body (other 4xx).
    Payload,
    /// Rate limited (HTTP 429).
    RateLimit,
    /// Tracker-side fault (5xx).
    Server,
    /// Transport failure: timeout, connection refused, DNS.
    Network,
    /// Anything that fits no other bucket.
    Unknown,
}

impl DeliveryErrorKind {
    /// Reports whether an error of this kind is worth retrying.
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::RateLimit | Self::Server | Self::Network)
    }

    /// Returns the canonical snake_case kind name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Payload => "payload",
            Self::RateLimit => "rate_limit",
            Self::Server => "server",
            Self::Network => "network",
            Self::Unknown => "unknown",
        }
    }

    /// Classifies an HTTP response status code.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::Auth,
            429 => Self::RateLimit,
            400..=499 => Self::Payload,
            500..=599 => Self::Server,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for DeliveryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified tracker API failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct DeliveryError {
    kind: DeliveryErrorKind,
    message: String,
}

impl DeliveryError {
    /// Creates a classified error.
    pub fn new(kind: DeliveryErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates an error classified from an HTTP response status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        Self::new(DeliveryErrorKind::from_status(status), message)
    }

    /// Error classification.
    #[must_use]
    pub const fn kind(&self) -> DeliveryErrorKind {
        self.kind
    }

    /// Human-readable failure description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Reports whether the retry policy permits another attempt.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
