//! Typed client for the verifier's session endpoints.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST | `/sign-in` | [`VerifierClient::start_verification`] |
//! | GET | `/status?sessionID=` | [`VerifierClient::fetch_status`] |
//! | POST | `/callback?sessionID=` | [`VerifierClient::submit_proof`] |
//!
//! Each call is a single exchange. Only `200 OK` counts as success; anything
//! else becomes [`VerifierError::Status`] carrying the body's `message`.

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::VerifierConfig;
use crate::error::VerifierError;
use crate::types::{SessionId, SessionStart, SessionStatus, VerificationRequest};

/// Query parameter carrying the session identifier.
const SESSION_ID_PARAM: &str = "sessionID";

/// Client for a verifier service.
#[derive(Debug, Clone)]
pub struct VerifierClient {
    http: reqwest::Client,
    base_url: Url,
    request: VerificationRequest,
}

impl VerifierClient {
    /// Create a new verifier client from configuration.
    pub fn new(config: VerifierConfig) -> Result<Self, VerifierError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| VerifierError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;
        Ok(Self::with_http(http, config))
    }

    /// Create a client around an existing [`reqwest::Client`].
    pub fn with_http(http: reqwest::Client, config: VerifierConfig) -> Self {
        Self {
            http,
            base_url: config.base_url,
            request: config.request,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The body sent by [`start_verification`](Self::start_verification).
    pub fn request(&self) -> &VerificationRequest {
        &self.request
    }

    /// Open a verification session.
    ///
    /// Calls `POST {base_url}sign-in` with the configured request as JSON.
    /// The returned `qr_code` is what the holder's wallet scans.
    pub async fn start_verification(&self) -> Result<SessionStart, VerifierError> {
        let endpoint = "POST /sign-in";
        let url = format!("{}sign-in", self.base_url);
        tracing::debug!(%url, chain_id = %self.request.chain_id, "starting verification session");

        let resp = self
            .http
            .post(&url)
            .json(&self.request)
            .send()
            .await
            .map_err(|e| VerifierError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        let body = ok_body(endpoint, resp).await?;
        let start: SessionStart = decode(endpoint, &body)?;
        tracing::info!(session_id = %start.session_id, "verification session started");
        Ok(start)
    }

    /// Fetch the status of a session.
    ///
    /// Calls `GET {base_url}status?sessionID={session_id}`.
    pub async fn fetch_status(&self, session_id: &SessionId) -> Result<SessionStatus, VerifierError> {
        let endpoint = "GET /status";
        let url = format!("{}status", self.base_url);
        tracing::debug!(%url, %session_id, "fetching session status");

        let resp = self
            .http
            .get(&url)
            .query(&[(SESSION_ID_PARAM, session_id.as_str())])
            .send()
            .await
            .map_err(|e| VerifierError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        let body = ok_body(endpoint, resp).await?;
        let status: SessionStatus = decode(endpoint, &body)?;
        tracing::info!(%session_id, status = %status.status, "session status received");
        Ok(status)
    }

    /// Resubmit a JWZ proof for a session.
    ///
    /// Calls `POST {base_url}callback?sessionID={session_id}` with `jwz` as a
    /// `text/plain` body, byte for byte. A JSON response is returned parsed;
    /// any other response text is returned as a JSON string.
    pub async fn submit_proof(&self, session_id: &SessionId, jwz: &str) -> Result<Value, VerifierError> {
        let endpoint = "POST /callback";
        let url = format!("{}callback", self.base_url);
        tracing::debug!(%url, %session_id, jwz_len = jwz.len(), "submitting proof");

        let resp = self
            .http
            .post(&url)
            .query(&[(SESSION_ID_PARAM, session_id.as_str())])
            .header(CONTENT_TYPE, "text/plain")
            .body(jwz.to_owned())
            .send()
            .await
            .map_err(|e| VerifierError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        let body = ok_body(endpoint, resp).await?;
        let result = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(_) => Value::String(body),
        };
        tracing::info!(%session_id, "proof accepted");
        Ok(result)
    }
}

/// Read the response body, failing unless the status is exactly 200.
async fn ok_body(endpoint: &str, resp: reqwest::Response) -> Result<String, VerifierError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| VerifierError::Http {
        endpoint: endpoint.into(),
        source: e,
    })?;

    if status != StatusCode::OK {
        let message = error_message(&body);
        tracing::debug!(
            endpoint,
            status = status.as_u16(),
            reason = message.as_deref().unwrap_or_default(),
            "verifier rejected request"
        );
        return Err(VerifierError::Status {
            endpoint: endpoint.into(),
            status: status.as_u16(),
            message,
        });
    }

    Ok(body)
}

fn decode<T: DeserializeOwned>(endpoint: &str, body: &str) -> Result<T, VerifierError> {
    serde_json::from_str(body).map_err(|e| VerifierError::Deserialization {
        endpoint: endpoint.into(),
        source: e,
    })
}

/// The `message` field of an error body, if the body is a JSON object that
/// has one.
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("message")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
