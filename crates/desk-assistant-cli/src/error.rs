//! Error types for the desk assistant CLI.
//!
//! CliError wraps CoreError from the shared library and adds CLI-specific variants.

use desk_assistant_core::error::CoreError;
use desk_assistant_core::ErrorKind;
use thiserror::Error;

// Re-export core error types so command modules can use them via crate::error
pub use desk_assistant_core::error::{DeviceError, StorageError};

/// Exit codes for the CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NETWORK_ERROR: i32 = 2;
    pub const DEVICE_ERROR: i32 = 3;
    pub const INVALID_ARGS: i32 = 4;
    pub const NOT_CONFIGURED: i32 = 5;
}

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Device at {0} is not reachable or did not identify as a desk assistant")]
    NotConnected(String),

    #[error("{0}")]
    Other(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(CoreError::Device(e)) => match (e.kind(), e) {
                (ErrorKind::Configuration, _) => exit_codes::NOT_CONFIGURED,
                (ErrorKind::Transport, _) => exit_codes::NETWORK_ERROR,
                (ErrorKind::Validation, DeviceError::InvalidInput(_)) => exit_codes::INVALID_ARGS,
                (ErrorKind::Validation, _) => exit_codes::DEVICE_ERROR,
            },
            CliError::Core(_) => exit_codes::GENERAL_ERROR,
            CliError::InvalidArgument(_) => exit_codes::INVALID_ARGS,
            CliError::NotConnected(_) => exit_codes::NETWORK_ERROR,
            CliError::Other(_) => exit_codes::GENERAL_ERROR,
        }
    }

    /// Hint printed under the error message, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::Core(CoreError::Device(DeviceError::NoAddress)) => {
                Some("Run `desk-assistant connect <address>` first.")
            }
            CliError::NotConnected(_) => {
                Some("Check that the device is powered on and on the same network.")
            }
            _ => None,
        }
    }
}

// Conversions from core error subtypes to CliError
impl From<DeviceError> for CliError {
    fn from(e: DeviceError) -> Self {
        CliError::Core(CoreError::Device(e))
    }
}

impl From<StorageError> for CliError {
    fn from(e: StorageError) -> Self {
        CliError::Core(CoreError::Storage(e))
    }
}
