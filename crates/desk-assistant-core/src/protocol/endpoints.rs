//! HTTP endpoints exposed by the desk assistant firmware.
//!
//! Requests go to `http://<address><path>`.

/// Body served at `/` by a genuine device.
pub const IDENTITY: &str = "ESP32 Smart Desktop Assistant API";

/// Device endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Liveness/identity probe (GET)
    Root,
    /// Full state snapshot (GET)
    Status,
    /// Set wall-clock time (POST)
    Time,
    /// Toggle 12h/24h display (POST)
    TimeFormat,
    /// Configure alarm (POST)
    Alarm,
    /// Start/stop/reset countdown (POST)
    Timer,
    /// Set one-shot reminder (POST)
    Reminder,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Root => "/",
            Endpoint::Status => "/api/status",
            Endpoint::Time => "/api/time",
            Endpoint::TimeFormat => "/api/time_format",
            Endpoint::Alarm => "/api/alarm",
            Endpoint::Timer => "/api/timer",
            Endpoint::Reminder => "/api/reminder",
        }
    }

    /// Full URL for this endpoint on the device at `address`.
    pub fn url(&self, address: &str) -> String {
        device_url(address, self.path())
    }
}

/// Build a plain-HTTP URL for `path` on the device at `address`.
pub fn device_url(address: &str, path: &str) -> String {
    format!("http://{}{}", address, path)
}
