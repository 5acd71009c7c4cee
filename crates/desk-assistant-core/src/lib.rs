//! Shared core for ESP32 Smart Desktop Assistant clients.
//!
//! The [`DeviceClient`] owns the device address, probes the device and
//! issues the typed status/time/alarm/timer/reminder requests. Front ends
//! construct one client and render whatever it returns.

pub mod device;
pub mod error;
pub mod protocol;
pub mod storage;
pub mod types;

pub use device::{DeviceClient, HttpTransport, Transport};
pub use error::{CoreError, DeviceError, ErrorKind, StorageError};
pub use storage::AddressStore;
