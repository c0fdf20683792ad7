//! # Dispatch
//!
//! One run of the menu: read a choice, perform at most one verifier call,
//! present the result. There is no loop back to the menu.
//!
//! A verifier rejection (non-200) is printed and ends the run normally.
//! Transport failures and closed input are returned as errors.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use zkv_client::{SessionId, VerifierClient, VerifierError};

use crate::menu::{MenuChoice, MENU_PROMPT};
use crate::present;
use crate::terminal::Terminal;

pub const SESSION_ID_PROMPT: &str = "Enter the session id: ";
pub const RESEND_SESSION_ID_PROMPT: &str = "Enter the session ID: ";
pub const JWZ_PROMPT: &str = "Enter the JWZ: ";

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The action's call succeeded and its result was shown.
    Completed(MenuChoice),
    /// The verifier rejected the call; the error and diagnostic were shown.
    Failed(MenuChoice),
    /// The menu input matched nothing.
    NoAction,
}

/// Show the menu and carry out the chosen action.
pub async fn run<R: BufRead, W: Write>(
    client: &VerifierClient,
    term: &mut Terminal<R, W>,
) -> Result<Outcome> {
    let input = term.prompt(MENU_PROMPT).context("failed to read menu choice")?;

    let Some(choice) = MenuChoice::parse(&input) else {
        tracing::debug!(input = %input, "unrecognized menu choice, nothing to do");
        return Ok(Outcome::NoAction);
    };
    tracing::debug!(%choice, "menu choice");

    match choice {
        MenuChoice::Verify => verify(client, term).await,
        MenuChoice::Check => check(client, term).await,
        MenuChoice::Resend => resend(client, term).await,
    }
}

async fn verify<R: BufRead, W: Write>(
    client: &VerifierClient,
    term: &mut Terminal<R, W>,
) -> Result<Outcome> {
    match client.start_verification().await {
        Ok(start) => {
            present::session_started(term.output(), &start)?;
            Ok(Outcome::Completed(MenuChoice::Verify))
        }
        Err(e) => rejected(term.output(), MenuChoice::Verify, e),
    }
}

async fn check<R: BufRead, W: Write>(
    client: &VerifierClient,
    term: &mut Terminal<R, W>,
) -> Result<Outcome> {
    let session_id = SessionId::from(
        term.prompt(SESSION_ID_PROMPT)
            .context("failed to read session id")?,
    );

    match client.fetch_status(&session_id).await {
        Ok(status) => {
            present::session_status(term.output(), &status)?;
            Ok(Outcome::Completed(MenuChoice::Check))
        }
        Err(e) => rejected(term.output(), MenuChoice::Check, e),
    }
}

async fn resend<R: BufRead, W: Write>(
    client: &VerifierClient,
    term: &mut Terminal<R, W>,
) -> Result<Outcome> {
    let session_id = SessionId::from(
        term.prompt(RESEND_SESSION_ID_PROMPT)
            .context("failed to read session id")?,
    );
    let jwz = term.prompt(JWZ_PROMPT).context("failed to read JWZ")?;

    match client.submit_proof(&session_id, &jwz).await {
        Ok(result) => {
            present::proof_submitted(term.output(), &result)?;
            Ok(Outcome::Completed(MenuChoice::Resend))
        }
        Err(e) => rejected(term.output(), MenuChoice::Resend, e),
    }
}

/// Print a verifier rejection and stop; pass anything else up.
fn rejected<W: Write>(out: &mut W, choice: MenuChoice, err: VerifierError) -> Result<Outcome> {
    match err {
        VerifierError::Status {
            status, message, ..
        } => {
            present::rejected(out, choice, status, message.as_deref())?;
            Ok(Outcome::Failed(choice))
        }
        other => Err(anyhow::Error::new(other).context(format!("{choice} failed"))),
    }
}
