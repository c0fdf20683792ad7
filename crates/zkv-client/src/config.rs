//! Verifier client configuration.
//!
//! The base URL and the sign-in request body are explicit values handed to
//! [`VerifierClient::new`](crate::VerifierClient::new).
//! [`VerifierConfig::localhost`] points at a verifier on the operator's machine.

use url::Url;

use crate::types::VerificationRequest;

/// Where the verifier listens unless told otherwise.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3010";

/// Configuration for connecting to the verifier service.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifierConfig {
    /// Base URL of the verifier. Always ends with `/`.
    pub base_url: Url,
    /// Body sent on every `POST /sign-in`.
    pub request: VerificationRequest,
}

impl VerifierConfig {
    /// Configuration for a verifier at `base_url` with the default age query.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            request: VerificationRequest::kyc_age(),
        })
    }

    /// The verifier at [`DEFAULT_BASE_URL`] with the default age query.
    pub fn localhost() -> Result<Self, ConfigError> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Create a configuration pointing to a local mock server (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if `uri` cannot be parsed.
    pub fn local_mock(uri: &str) -> Result<Self, ConfigError> {
        Self::new(uri)
    }

    /// Replace the sign-in request body.
    pub fn with_request(mut self, request: VerificationRequest) -> Self {
        self.request = request;
        self
    }
}

/// Parse a base URL and make sure it ends with `/`, so that joining an
/// endpoint appends to the path instead of replacing its last segment.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url =
        Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(raw.to_string(), e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl(
            raw.to_string(),
            "cannot be used as a base URL".to_string(),
        ));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid verifier URL {0}: {1}")]
    InvalidUrl(String, String),
}
