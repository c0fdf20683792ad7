//! # zkv-cli: Interactive verifier client
//!
//! Provides the `zkv` command: a one-shot menu against a verifier running at
//! `http://localhost:3010`.
//!
//! ## Menu
//!
//! - `v` / `verify`: open a session, print its id, draw its QR code.
//! - `c` / `check`: ask for a session id, print the session's status.
//! - `r` / `resend`: ask for a session id and a JWZ, post the JWZ.
//!
//! Anything else exits without doing anything.
//!
//! ```bash
//! $ zkv
//! Tell me what you want to do:
//!     (v) -> Verify
//!     (c) -> Check
//!     (r) -> Resend
//! c
//! Enter the session id: 5dcda7b2-4db8-47d5-8b02-10929e915ee8
//! Session Status: pending
//! ```

pub mod dispatch;
pub mod menu;
pub mod present;
pub mod terminal;

pub use dispatch::{run, Outcome};
pub use menu::MenuChoice;
pub use terminal::{Terminal, TerminalError};
