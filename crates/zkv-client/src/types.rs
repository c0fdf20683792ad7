//! # Verifier Wire Types
//!
//! Request and response shapes exchanged with the verifier service. Field
//! names follow the service's JSON (`chainID`, `circuitID`, `sessionID`,
//! `qrCode`), which is not uniformly camelCase, so the odd ones are renamed
//! individually.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Polygon Amoy testnet.
pub const DEFAULT_CHAIN_ID: &str = "80002";

/// Circuit used for the age-threshold query.
pub const MTP_V2_CIRCUIT: &str = "credentialAtomicQueryMTPV2";

/// JSON-LD context of the KYC credential schema.
pub const KYC_V3_CONTEXT: &str =
    "https://raw.githubusercontent.com/iden3/claim-schema-vocab/main/schemas/json-ld/kyc-v3.json-ld";

/// Credential type queried by [`VerificationRequest::kyc_age`].
pub const KYC_AGE_CREDENTIAL: &str = "KYCAgeCredential";

/// Holders must be born before this date (`YYYYMMDD`).
pub const BIRTHDAY_THRESHOLD: u64 = 20201010;

// -- Request ------------------------------------------------------------------

/// Body of `POST /sign-in`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    #[serde(rename = "chainID")]
    pub chain_id: String,
    pub skip_claim_revocation_check: bool,
    pub scope: Vec<ProofScope>,
}

/// One proof the holder is asked to produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofScope {
    #[serde(rename = "circuitID")]
    pub circuit_id: String,
    pub id: u32,
    pub query: ProofQuery,
}

/// Credential query evaluated inside the circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofQuery {
    pub context: String,
    pub allowed_issuers: Vec<String>,
    #[serde(rename = "type")]
    pub credential_type: String,
    pub skip_claim_revocation_check: bool,
    /// Field-level operators, e.g. `{"birthday": {"$lt": 20201010}}`.
    pub credential_subject: Value,
}

impl VerificationRequest {
    /// The age check sent on every session start: a `KYCAgeCredential` from
    /// any issuer whose `birthday` is before [`BIRTHDAY_THRESHOLD`].
    pub fn kyc_age() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID.to_string(),
            skip_claim_revocation_check: false,
            scope: vec![ProofScope {
                circuit_id: MTP_V2_CIRCUIT.to_string(),
                id: 1,
                query: ProofQuery {
                    context: KYC_V3_CONTEXT.to_string(),
                    allowed_issuers: vec!["*".to_string()],
                    credential_type: KYC_AGE_CREDENTIAL.to_string(),
                    skip_claim_revocation_check: true,
                    credential_subject: serde_json::json!({
                        "birthday": { "$lt": BIRTHDAY_THRESHOLD }
                    }),
                },
            }],
        }
    }
}

impl Default for VerificationRequest {
    fn default() -> Self {
        Self::kyc_age()
    }
}

// -- Responses ----------------------------------------------------------------

/// Successful `POST /sign-in` body.
///
/// Unknown fields are kept in `extra` so the full response can be shown to
/// the operator unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStart {
    #[serde(rename = "sessionID")]
    pub session_id: SessionId,
    #[serde(rename = "qrCode")]
    pub qr_code: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Successful `GET /status` body.
///
/// `status` is taken as-is: usually a string such as `"pending"`, but any
/// JSON value is accepted, and a body without one yields `Null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStatus {
    #[serde(default)]
    pub status: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Opaque session correlation token issued by the verifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
