use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all Cinehall API operations.
///
/// All variants are serializable for structured error reporting. Callers that
/// only care about "the remote call failed" can collapse the variants via
/// [`std::fmt::Display`]; the distinction exists for logging and diagnostics.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, broken transport, etc.).
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The backend answered with a non-2xx status code.
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Response body, possibly truncated, for diagnostics.
        message: String,
    },

    /// Failed to parse the backend's JSON response.
    #[error("Parse error: {detail}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    #[error("Serialization error: {detail}")]
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ApiError {
    /// Whether the failure is transient (a retry by the operator may
    /// succeed). Used for log levelling; the client itself never retries.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
