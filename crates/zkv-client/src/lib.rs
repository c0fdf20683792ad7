//! # zkv-client -- Typed Rust client for a zero-knowledge identity verifier
//!
//! Wraps the three session endpoints of an iden3-style verifier service:
//! - **Sign-in** opens a session for a fixed credential query and returns a
//!   QR payload for the holder's wallet.
//! - **Status** reports where a session stands.
//! - **Callback** accepts a JWZ (JSON Web Zero-knowledge) proof for a session.
//!
//! ## Failure model
//!
//! Every call returns `Result<T, VerifierError>`. A verifier answer other than
//! `200 OK` is [`VerifierError::Status`] with the body's `message`; transport
//! failures are [`VerifierError::Http`]. Nothing is retried.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::VerifierClient;
pub use config::VerifierConfig;
pub use error::VerifierError;
pub use types::{SessionId, SessionStart, SessionStatus, VerificationRequest};
