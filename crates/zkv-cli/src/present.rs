//! # Presentation
//!
//! Operator-facing output for each menu action. Everything here writes to the
//! terminal's output sink; diagnostics go through `tracing` instead.
//!
//! The QR code uses the half-block renderer (two modules per character cell)
//! with dark and light swapped, which scans reliably off a dark terminal.

use std::io::{self, Write};

use qrcode::render::unicode::Dense1x2;
use qrcode::types::QrError;
use qrcode::QrCode;
use serde::Serialize;
use zkv_client::{SessionStart, SessionStatus};

use crate::menu::MenuChoice;

/// Print a freshly opened session: the full response, its id, and the QR code.
pub fn session_started<W: Write>(out: &mut W, start: &SessionStart) -> anyhow::Result<()> {
    response_data(out, start)?;
    writeln!(out, "Session Id: {}", start.session_id)?;
    let qr = render_qr(&start.qr_code)?;
    writeln!(out, "{qr}")?;
    Ok(())
}

/// Print the `status` field. A JSON string is shown bare, anything else as JSON.
pub fn session_status<W: Write>(out: &mut W, status: &SessionStatus) -> io::Result<()> {
    match &status.status {
        serde_json::Value::String(s) => writeln!(out, "Session Status: {s}"),
        other => writeln!(out, "Session Status: {other}"),
    }
}

pub fn proof_submitted<W: Write>(out: &mut W, result: &serde_json::Value) -> io::Result<()> {
    response_data(out, result)
}

/// Print a verifier rejection followed by the action's diagnostic.
pub fn rejected<W: Write>(
    out: &mut W,
    choice: MenuChoice,
    status: u16,
    message: Option<&str>,
) -> io::Result<()> {
    match message {
        Some(message) => writeln!(out, "Error: {message}")?,
        None => writeln!(out, "Error: HTTP {status}")?,
    }
    writeln!(out, "{}", diagnostic(choice))
}

/// Fixed line printed when an action's verifier call fails.
pub fn diagnostic(choice: MenuChoice) -> &'static str {
    match choice {
        MenuChoice::Verify => "Error getting verify data",
        MenuChoice::Check => "Error getting session status",
        MenuChoice::Resend => "Error posting JWZ",
    }
}

/// Render `data` as a compact terminal QR code.
pub fn render_qr(data: &str) -> Result<String, QrError> {
    let code = QrCode::new(data.as_bytes())?;
    Ok(code
        .render::<Dense1x2>()
        .dark_color(Dense1x2::Light)
        .light_color(Dense1x2::Dark)
        .build())
}

fn response_data<W: Write, T: Serialize>(out: &mut W, data: &T) -> io::Result<()> {
    let pretty = serde_json::to_string_pretty(data).map_err(io::Error::other)?;
    writeln!(out, "Response Data: {pretty}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn output(f: impl FnOnce(&mut Vec<u8>)) -> String {
        let mut buf = Vec::new();
        f(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn session_started_prints_id_and_qr() {
        let start: SessionStart = serde_json::from_value(json!({
            "sessionID": "abc-123",
            "qrCode": "raw-code-string"
        }))
        .unwrap();
        let text = output(|out| session_started(out, &start).unwrap());

        assert!(text.starts_with("Response Data: {"));
        assert!(text.contains("\"sessionID\": \"abc-123\""));
        assert!(text.contains("\nSession Id: abc-123\n"));
        assert!(text.chars().any(|c| matches!(c, '▀' | '▄' | '█')));
        assert!(!text.contains("Error"));
    }

    #[test]
    fn status_prints_status_field_only() {
        let status: SessionStatus =
            serde_json::from_value(json!({"status": "pending", "id": "did:x"})).unwrap();
        let text = output(|out| session_status(out, &status).unwrap());
        assert_eq!(text, "Session Status: pending\n");
    }

    #[test]
    fn status_prints_non_string_values_as_json() {
        let object: SessionStatus =
            serde_json::from_value(json!({"status": {"state": "done"}})).unwrap();
        let text = output(|out| session_status(out, &object).unwrap());
        assert_eq!(text, "Session Status: {\"state\":\"done\"}\n");

        let missing: SessionStatus = serde_json::from_value(json!({"state": "pending"})).unwrap();
        let text = output(|out| session_status(out, &missing).unwrap());
        assert_eq!(text, "Session Status: null\n");
    }

    #[test]
    fn proof_submitted_prints_string_result() {
        let text = output(|out| proof_submitted(out, &json!("ok")).unwrap());
        assert_eq!(text, "Response Data: \"ok\"\n");
    }

    #[test]
    fn rejected_prints_message_then_diagnostic() {
        let text = output(|out| rejected(out, MenuChoice::Resend, 500, Some("bad token")).unwrap());
        assert_eq!(text, "Error: bad token\nError posting JWZ\n");
    }

    #[test]
    fn rejected_without_message_shows_status() {
        let text = output(|out| rejected(out, MenuChoice::Check, 404, None).unwrap());
        assert_eq!(text, "Error: HTTP 404\nError getting session status\n");
    }

    #[test]
    fn qr_is_square_block() {
        let qr = render_qr("iden3comm://?request_uri=http://localhost:3010/sign-in").unwrap();
        let lines: Vec<&str> = qr.lines().collect();
        assert!(lines.len() > 10);
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn qr_is_deterministic() {
        assert_eq!(render_qr("abc").unwrap(), render_qr("abc").unwrap());
        assert_ne!(render_qr("abc").unwrap(), render_qr("abd").unwrap());
    }

    #[test]
    fn qr_rejects_oversized_payload() {
        let huge = "x".repeat(8000);
        assert!(render_qr(&huge).is_err());
    }
}
