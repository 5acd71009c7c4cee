//! HTTP transport used by the device client.
//!
//! The client talks to the device through the [`Transport`] trait so tests
//! can substitute a scripted transport for the real network.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::DeviceError;
use crate::protocol::device_url;

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Request/response transport to a device.
///
/// Implementations report connection-level failures as
/// `DeviceError::Transport`; non-2xx statuses are returned as ordinary
/// responses and left to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `path` on the device at `address`.
    async fn get(&self, address: &str, path: &str) -> Result<TransportResponse, DeviceError>;

    /// POST `body` as JSON to `path` on the device at `address`.
    async fn post_json(
        &self,
        address: &str,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<TransportResponse, DeviceError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn get(&self, address: &str, path: &str) -> Result<TransportResponse, DeviceError> {
        (**self).get(address, path).await
    }

    async fn post_json(
        &self,
        address: &str,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<TransportResponse, DeviceError> {
        (**self).post_json(address, path, body).await
    }
}

/// `reqwest`-backed transport over plain HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport. With `timeout` unset, the reqwest default applies.
    pub fn new(timeout: Option<Duration>) -> Result<Self, DeviceError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| DeviceError::Transport {
            address: String::new(),
            message: format!("HTTP client error: {}", e),
        })?;

        Ok(Self { client })
    }

    async fn finish(
        address: &str,
        result: reqwest::Result<reqwest::Response>,
    ) -> Result<TransportResponse, DeviceError> {
        let transport_err = |e: reqwest::Error| DeviceError::Transport {
            address: address.to_string(),
            message: e.to_string(),
        };

        let response = result.map_err(transport_err)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_err)?;

        Ok(TransportResponse { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, address: &str, path: &str) -> Result<TransportResponse, DeviceError> {
        let url = device_url(address, path);
        let result = self.client.get(&url).send().await;
        Self::finish(address, result).await
    }

    async fn post_json(
        &self,
        address: &str,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<TransportResponse, DeviceError> {
        let url = device_url(address, path);
        let result = self.client.post(&url).json(body).send().await;
        Self::finish(address, result).await
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_success_range() {
        assert!(TransportResponse::new(200, "").is_success());
        assert!(TransportResponse::new(204, "").is_success());
        assert!(!TransportResponse::new(301, "").is_success());
        assert!(!TransportResponse::new(500, "").is_success());
    }

    #[test]
    fn test_http_transport_builds() {
        assert!(HttpTransport::new(None).is_ok());
        assert!(HttpTransport::new(Some(Duration::from_secs(3))).is_ok());
    }
}
