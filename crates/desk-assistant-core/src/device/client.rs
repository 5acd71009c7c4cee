//! Device client: address lifecycle, probe and typed requests.

use std::sync::RwLock;

use serde::Serialize;
use tokio::sync::Mutex;

use crate::device::transport::{HttpTransport, Transport};
use crate::error::{CoreError, DeviceError};
use crate::protocol::response::{is_identity_response, parse_json_response};
use crate::protocol::Endpoint;
use crate::storage::AddressStore;
use crate::types::{
    AlarmConfig, DeviceStatus, ReminderConfig, TimeData, TimeFormatRequest, TimerConfig,
};

/// Client for a single desk assistant.
///
/// The stored address is the only state. It is loaded from the
/// [`AddressStore`] on [`DeviceClient::open`] and written back on every
/// [`DeviceClient::set_address`]. Construct one client and hand it to every
/// caller that needs it.
pub struct DeviceClient<T: Transport = HttpTransport> {
    transport: T,
    store: AddressStore,
    address: RwLock<String>,
    /// Serializes address updates so memory and disk agree.
    update_lock: Mutex<()>,
}

impl<T: Transport> DeviceClient<T> {
    /// Open a client, loading the persisted address if there is one.
    pub async fn open(store: AddressStore, transport: T) -> Result<Self, CoreError> {
        let address = store.load().await?.unwrap_or_default();
        tracing::debug!(address = %address, "Loaded device address");

        Ok(Self {
            transport,
            store,
            address: RwLock::new(address),
            update_lock: Mutex::new(()),
        })
    }

    /// Store `host` as the active device and persist it.
    ///
    /// The value is kept exactly as given. Reachability is not checked.
    pub async fn set_address(&self, host: &str) -> Result<(), CoreError> {
        let _guard = self.update_lock.lock().await;

        self.store.save(host).await?;
        *self.address.write().unwrap_or_else(|e| e.into_inner()) = host.to_string();

        tracing::info!(address = %host, "Device address updated");
        Ok(())
    }

    /// The stored address, or an empty string when unconfigured.
    pub fn address(&self) -> String {
        self.address
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn has_address(&self) -> bool {
        !self.address().is_empty()
    }

    /// Probe the device root path.
    ///
    /// Returns `true` only when the device answers with a 2xx status and the
    /// exact identity string. Never fails: a missing address, a transport
    /// error, an error status or a different body all report `false`.
    pub async fn test_connection(&self) -> bool {
        let address = self.address();
        if address.is_empty() {
            tracing::debug!("Connection test skipped: no address configured");
            return false;
        }

        match self.transport.get(&address, Endpoint::Root.path()).await {
            Ok(response) if response.is_success() => {
                let identified = is_identity_response(&response.body);
                if !identified {
                    tracing::warn!(
                        address = %address,
                        body = %response.body,
                        "Device at address did not identify as a desk assistant"
                    );
                }
                identified
            }
            Ok(response) => {
                tracing::warn!(address = %address, status = response.status, "Connection test failed");
                false
            }
            Err(e) => {
                tracing::warn!(address = %address, error = %e, "Connection test failed");
                false
            }
        }
    }

    /// Fetch and validate the full status snapshot.
    pub async fn get_status(&self) -> Result<DeviceStatus, CoreError> {
        let (address, body) = self.get(Endpoint::Status).await?;
        Ok(parse_json_response(&body, &address, Endpoint::Status.path())?)
    }

    /// Fetch the status snapshot as untyped JSON.
    pub async fn get_status_raw(&self) -> Result<serde_json::Value, CoreError> {
        let (address, body) = self.get(Endpoint::Status).await?;
        Ok(parse_json_response(&body, &address, Endpoint::Status.path())?)
    }

    pub async fn set_time(&self, time: &TimeData) -> Result<serde_json::Value, CoreError> {
        self.post(Endpoint::Time, time).await
    }

    pub async fn set_time_format(&self, is_24h: bool) -> Result<serde_json::Value, CoreError> {
        self.post(Endpoint::TimeFormat, &TimeFormatRequest { format_24h: is_24h })
            .await
    }

    pub async fn set_alarm(&self, alarm: &AlarmConfig) -> Result<serde_json::Value, CoreError> {
        self.post(Endpoint::Alarm, alarm).await
    }

    pub async fn set_timer(&self, timer: &TimerConfig) -> Result<serde_json::Value, CoreError> {
        self.post(Endpoint::Timer, timer).await
    }

    pub async fn set_reminder(
        &self,
        reminder: &ReminderConfig,
    ) -> Result<serde_json::Value, CoreError> {
        self.post(Endpoint::Reminder, reminder).await
    }

    fn require_address(&self) -> Result<String, DeviceError> {
        let address = self.address();
        if address.is_empty() {
            return Err(DeviceError::NoAddress);
        }
        Ok(address)
    }

    /// GET an endpoint and return the address used with the 2xx body.
    async fn get(&self, endpoint: Endpoint) -> Result<(String, String), CoreError> {
        let address = self.require_address()?;
        tracing::debug!(address = %address, path = endpoint.path(), "GET");

        let response = self.transport.get(&address, endpoint.path()).await?;
        if !response.is_success() {
            return Err(DeviceError::HttpStatus {
                address,
                status: response.status,
                body: response.body,
            }
            .into());
        }

        Ok((address, response.body))
    }

    /// POST a payload and return the device's JSON acknowledgement.
    ///
    /// An empty acknowledgement body is reported as `Value::Null`.
    async fn post<B: Serialize>(
        &self,
        endpoint: Endpoint,
        payload: &B,
    ) -> Result<serde_json::Value, CoreError> {
        let address = self.require_address()?;
        let body = serde_json::to_value(payload)
            .map_err(|e| CoreError::Other(format!("Failed to encode request: {}", e)))?;
        tracing::debug!(address = %address, path = endpoint.path(), body = %body, "POST");

        let response = self
            .transport
            .post_json(&address, endpoint.path(), &body)
            .await?;
        if !response.is_success() {
            return Err(DeviceError::HttpStatus {
                address,
                status: response.status,
                body: response.body,
            }
            .into());
        }

        if response.body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }

        Ok(parse_json_response(&response.body, &address, endpoint.path())?)
    }
}

impl DeviceClient<HttpTransport> {
    /// Open a client over plain HTTP.
    pub async fn open_http(
        store: AddressStore,
        timeout: Option<std::time::Duration>,
    ) -> Result<Self, CoreError> {
        let transport = HttpTransport::new(timeout)?;
        Self::open(store, transport).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::device::transport::mock::MockTransport;
    use crate::protocol::IDENTITY;
    use crate::types::TimerAction;

    const STATUS_BODY: &str = r#"{
        "current_time": {"year": 2024, "month": 5, "date": 20, "hour": 21, "minute": 3, "second": 0},
        "time_format_24h": true,
        "alarm": {"hour": 6, "minute": 30, "enabled": true},
        "timer": {"hours": 0, "minutes": 0, "seconds": 0, "running": false},
        "reminder": {"title": "Call mom", "description": "", "datetime": "2024-05-21T18:00:00"}
    }"#;

    struct Harness {
        client: DeviceClient<Arc<MockTransport>>,
        transport: Arc<MockTransport>,
        _tmp: tempfile::TempDir,
    }

    async fn harness(transport: MockTransport, address: Option<&str>) -> Harness {
        let tmp = tempfile::tempdir().unwrap();
        let store = AddressStore::new(tmp.path().to_path_buf()).unwrap();
        if let Some(address) = address {
            store.save(address).await.unwrap();
        }
        let transport = Arc::new(transport);
        let client = DeviceClient::open(store, transport.clone()).await.unwrap();
        Harness {
            client,
            transport,
            _tmp: tmp,
        }
    }

    #[tokio::test]
    async fn test_set_then_get_address() {
        let h = harness(MockTransport::new(), None).await;
        assert!(!h.client.has_address());
        assert_eq!(h.client.address(), "");

        for host in ["192.168.1.23", "desk.local:8080", " spaced "] {
            h.client.set_address(host).await.unwrap();
            assert_eq!(h.client.address(), host);
            assert!(h.client.has_address());
        }
    }

    #[tokio::test]
    async fn test_empty_address_means_unconfigured() {
        let h = harness(MockTransport::new(), Some("10.0.0.9")).await;
        assert!(h.client.has_address());

        h.client.set_address("").await.unwrap();
        assert!(!h.client.has_address());
        assert_eq!(h.client.address(), "");
    }

    #[tokio::test]
    async fn test_address_persists_across_open() {
        let tmp = tempfile::tempdir().unwrap();
        let store = AddressStore::new(tmp.path().to_path_buf()).unwrap();
        let client = DeviceClient::open(store.clone(), MockTransport::new())
            .await
            .unwrap();
        client.set_address("192.168.4.1").await.unwrap();
        drop(client);

        let reopened = DeviceClient::open(store, MockTransport::new()).await.unwrap();
        assert_eq!(reopened.address(), "192.168.4.1");
    }

    #[tokio::test]
    async fn test_probe_without_address_makes_no_request() {
        let h = harness(MockTransport::new().respond("/", 200, IDENTITY), None).await;

        assert!(!h.client.test_connection().await);
        assert!(h.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_probe_identity_match() {
        let h = harness(
            MockTransport::new().respond("/", 200, IDENTITY),
            Some("192.168.1.50"),
        )
        .await;

        assert!(h.client.test_connection().await);

        let requests = h.transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].address, "192.168.1.50");
        assert_eq!(requests[0].path, "/");
    }

    #[tokio::test]
    async fn test_probe_other_body_is_false() {
        let h = harness(
            MockTransport::new().respond("/", 200, "Welcome to nginx"),
            Some("192.168.1.50"),
        )
        .await;
        assert!(!h.client.test_connection().await);
    }

    #[tokio::test]
    async fn test_probe_error_status_is_false() {
        let h = harness(
            MockTransport::new().respond("/", 500, IDENTITY),
            Some("192.168.1.50"),
        )
        .await;
        assert!(!h.client.test_connection().await);
    }

    #[tokio::test]
    async fn test_probe_transport_failure_is_false() {
        let h = harness(
            MockTransport::new().fail("/", "connection refused"),
            Some("192.168.1.50"),
        )
        .await;
        assert!(!h.client.test_connection().await);
    }

    #[tokio::test]
    async fn test_operations_without_address_fail_before_network() {
        let h = harness(MockTransport::new(), None).await;
        let c = &h.client;

        let alarm = AlarmConfig::new(7, 0, true).unwrap();
        let timer = TimerConfig::new(0, 1, 0, TimerAction::Start).unwrap();
        let reminder = ReminderConfig {
            title: "t".to_string(),
            description: String::new(),
            datetime: "2024-01-01T00:00:00".to_string(),
        };
        let time = TimeData {
            year: 2024,
            month: 1,
            date: 1,
            hour: 0,
            minute: 0,
            second: 0,
        };

        let results = vec![
            c.get_status().await.map(|_| ()),
            c.get_status_raw().await.map(|_| ()),
            c.set_time(&time).await.map(|_| ()),
            c.set_time_format(true).await.map(|_| ()),
            c.set_alarm(&alarm).await.map(|_| ()),
            c.set_timer(&timer).await.map(|_| ()),
            c.set_reminder(&reminder).await.map(|_| ()),
        ];

        for result in results {
            assert!(matches!(
                result,
                Err(CoreError::Device(DeviceError::NoAddress))
            ));
        }
        assert!(h.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_get_status_parses_snapshot() {
        let h = harness(
            MockTransport::new().respond("/api/status", 200, STATUS_BODY),
            Some("10.1.1.1"),
        )
        .await;

        let status = h.client.get_status().await.unwrap();
        assert!(status.time_format_24h);
        assert_eq!(status.alarm, AlarmConfig::new(6, 30, true).unwrap());
        assert_eq!(status.reminder.title, "Call mom");

        let raw = h.client.get_status_raw().await.unwrap();
        assert_eq!(raw["current_time"]["year"], 2024);
    }

    #[tokio::test]
    async fn test_get_status_rejects_wrong_shape() {
        let h = harness(
            MockTransport::new().respond("/api/status", 200, r#"{"alarm": null}"#),
            Some("10.1.1.1"),
        )
        .await;

        match h.client.get_status().await {
            Err(CoreError::Device(DeviceError::InvalidResponse { path, .. })) => {
                assert_eq!(path, "/api/status")
            }
            other => panic!("expected InvalidResponse, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_error_status_is_transport_error() {
        let h = harness(
            MockTransport::new().respond("/api/status", 503, "busy"),
            Some("10.1.1.1"),
        )
        .await;

        match h.client.get_status().await {
            Err(CoreError::Device(DeviceError::HttpStatus { status, body, .. })) => {
                assert_eq!(status, 503);
                assert_eq!(body, "busy");
            }
            other => panic!("expected HttpStatus, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let h = harness(
            MockTransport::new().fail("/api/alarm", "host unreachable"),
            Some("10.1.1.1"),
        )
        .await;

        let alarm = AlarmConfig::new(7, 30, true).unwrap();
        assert!(matches!(
            h.client.set_alarm(&alarm).await,
            Err(CoreError::Device(DeviceError::Transport { .. }))
        ));
    }

    #[tokio::test]
    async fn test_set_alarm_echo_round_trip() {
        let h = harness(MockTransport::new().echo("/api/alarm"), Some("10.1.1.1")).await;

        let alarm = AlarmConfig::new(7, 30, true).unwrap();
        let ack = h.client.set_alarm(&alarm).await.unwrap();

        assert_eq!(ack["hour"], 7);
        assert_eq!(ack["minute"], 30);
        assert_eq!(ack["enabled"], true);
    }

    #[tokio::test]
    async fn test_set_timer_posts_exact_body_once() {
        let h = harness(
            MockTransport::new().respond("/api/timer", 200, r#"{"status":"success"}"#),
            Some("10.1.1.1"),
        )
        .await;

        let timer = TimerConfig::new(0, 10, 0, TimerAction::Start).unwrap();
        let ack = h.client.set_timer(&timer).await.unwrap();
        assert_eq!(ack["status"], "success");

        let requests = h.transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/api/timer");
        assert_eq!(
            requests[0].body,
            Some(serde_json::json!({"hours": 0, "minutes": 10, "seconds": 0, "action": "start"}))
        );
    }

    #[tokio::test]
    async fn test_write_paths_and_bodies() {
        let h = harness(
            MockTransport::new()
                .echo("/api/time")
                .echo("/api/time_format")
                .echo("/api/reminder"),
            Some("10.1.1.1"),
        )
        .await;

        let time = TimeData {
            year: 2024,
            month: 12,
            date: 31,
            hour: 23,
            minute: 59,
            second: 58,
        };
        h.client.set_time(&time).await.unwrap();
        let ack = h.client.set_time_format(false).await.unwrap();
        assert_eq!(ack, serde_json::json!({"format_24h": false}));

        let reminder = ReminderConfig {
            title: "Dentist".to_string(),
            description: "Bring card".to_string(),
            datetime: "2025-02-03T10:15:00".to_string(),
        };
        h.client.set_reminder(&reminder).await.unwrap();

        let paths: Vec<_> = h
            .transport
            .requests()
            .into_iter()
            .map(|r| r.path)
            .collect();
        assert_eq!(paths, vec!["/api/time", "/api/time_format", "/api/reminder"]);
        assert_eq!(
            h.transport.requests()[0].body,
            Some(serde_json::json!({
                "year": 2024, "month": 12, "date": 31,
                "hour": 23, "minute": 59, "second": 58
            }))
        );
    }

    #[tokio::test]
    async fn test_empty_ack_is_null() {
        let h = harness(
            MockTransport::new().respond("/api/time_format", 200, ""),
            Some("10.1.1.1"),
        )
        .await;
        assert_eq!(
            h.client.set_time_format(true).await.unwrap(),
            serde_json::Value::Null
        );
    }

    #[tokio::test]
    async fn test_non_json_ack_is_invalid_response() {
        let h = harness(
            MockTransport::new().respond("/api/time_format", 200, "OK"),
            Some("10.1.1.1"),
        )
        .await;
        assert!(matches!(
            h.client.set_time_format(true).await,
            Err(CoreError::Device(DeviceError::InvalidResponse { .. }))
        ));
    }

    #[tokio::test]
    async fn test_concurrent_set_address_last_write_wins() {
        let h = harness(MockTransport::new(), None).await;

        let (a, b) = tokio::join!(
            h.client.set_address("10.0.0.1"),
            h.client.set_address("10.0.0.2")
        );
        a.unwrap();
        b.unwrap();

        let in_memory = h.client.address();
        assert!(in_memory == "10.0.0.1" || in_memory == "10.0.0.2");
        let on_disk = h.client.store.load().await.unwrap().unwrap();
        assert_eq!(in_memory, on_disk);
    }
}
