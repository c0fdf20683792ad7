//! # zkv CLI entry point
//!
//! Sets up logging, builds the verifier client for the local verifier, and
//! runs the menu once over stdin/stdout.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use zkv_cli::{Outcome, Terminal};
use zkv_client::{VerifierClient, VerifierConfig};

/// Interactive client for a zero-knowledge identity verifier.
///
/// Presents a menu to start a verification session (and show its QR code),
/// check a session's status, or resubmit a JWZ proof.
#[derive(Parser, Debug)]
#[command(name = "zkv", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run().await {
        Ok(outcome) => {
            tracing::debug!(?outcome, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run() -> Result<Outcome> {
    let config = VerifierConfig::localhost()?;
    tracing::debug!(base_url = %config.base_url, "using verifier");
    let client = VerifierClient::new(config)?;

    let stdin = io::stdin();
    let mut term = Terminal::new(stdin.lock(), io::stdout());
    zkv_cli::run(&client, &mut term).await
}
