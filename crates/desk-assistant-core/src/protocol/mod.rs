//! Protocol layer for device communication.
//!
//! This module names the device's HTTP endpoints and validates the bodies
//! it sends back.

pub mod endpoints;
pub mod response;

pub use endpoints::{device_url, Endpoint, IDENTITY};
