//! Top-level menu.

use std::fmt;

/// Shown on start.
pub const MENU_PROMPT: &str = "Tell me what you want to do:
    (v) -> Verify
    (c) -> Check
    (r) -> Resend
";

/// An accepted menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Open a session and show its QR code.
    Verify,
    /// Print a session's status.
    Check,
    /// Resubmit a JWZ proof for a session.
    Resend,
}

impl MenuChoice {
    /// Match operator input exactly: case-sensitive, no trimming.
    /// Anything unrecognized is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "verify" | "v" => Some(Self::Verify),
            "check" | "c" => Some(Self::Check),
            "resend" | "r" => Some(Self::Resend),
            _ => None,
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Verify => "verify",
            Self::Check => "check",
            Self::Resend => "resend",
        })
    }
}
