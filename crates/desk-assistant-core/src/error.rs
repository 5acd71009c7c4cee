//! Error types for the desk assistant core.

use thiserror::Error;

/// Core error type for shared operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Device error: {0}")]
    Device(#[from] DeviceError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Device communication errors.
///
/// Grouped by kind: configuration (`NoAddress`), transport (`Transport`,
/// `HttpStatus`) and validation (`InvalidResponse`, `InvalidInput`).
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("No device address configured")]
    NoAddress,

    #[error("Request to {address} failed: {message}")]
    Transport { address: String, message: String },

    #[error("Device {address} returned HTTP {status}: {body}")]
    HttpStatus {
        address: String,
        status: u16,
        body: String,
    },

    #[error("Invalid response from {address}{path}: {message}")]
    InvalidResponse {
        address: String,
        path: String,
        message: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DeviceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeviceError::NoAddress => ErrorKind::Configuration,
            DeviceError::Transport { .. } | DeviceError::HttpStatus { .. } => ErrorKind::Transport,
            DeviceError::InvalidResponse { .. } | DeviceError::InvalidInput(_) => {
                ErrorKind::Validation
            }
        }
    }
}

/// Coarse classification used by callers to decide how to render a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Transport,
    Validation,
}

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access storage directory: {0}")]
    DirectoryAccess(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
