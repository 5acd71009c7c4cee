//! Device communication layer.
//!
//! Provides the device client and the HTTP transport it runs on.

pub mod client;
pub mod transport;

pub use client::DeviceClient;
pub use transport::{HttpTransport, Transport, TransportResponse};
