//! Device access for CLI commands.
//!
//! The client itself lives in desk-assistant-core. This module opens it
//! from CLI settings and applies the probe-before-act rule.

pub mod session;

#[cfg(test)]
pub(crate) mod mock;

pub use session::{ensure_connected, open_client, Client};
