//! Verifier client error types.

/// Errors from verifier calls.
#[derive(Debug, thiserror::Error)]
pub enum VerifierError {
    /// HTTP transport error (connection refused, DNS failure, ...).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Verifier answered with a status other than 200.
    #[error("verifier {endpoint} returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        endpoint: String,
        status: u16,
        /// The `message` field of the response body, when present.
        message: Option<String>,
    },
    /// A 200 response body did not have the expected shape.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: serde_json::Error,
    },
}

impl VerifierError {
    /// Whether the verifier itself rejected the call, as opposed to the call
    /// never completing.
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}
