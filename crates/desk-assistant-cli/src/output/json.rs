//! JSON-formatted output for CLI.

use serde::Serialize;
use serde_json::{json, Map, Value};

use desk_assistant_core::types::{DeviceStatus, TimerStatus};

use super::OutputFormatter;
use crate::cli::StatusSection;

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }

    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn format_address(&self, address: &str) -> String {
        Self::to_json(&json!({
            "address": address,
            "configured": !address.is_empty()
        }))
    }

    fn format_connection(&self, address: &str, connected: bool) -> String {
        Self::to_json(&json!({
            "address": address,
            "connected": connected
        }))
    }

    fn format_status(
        &self,
        address: &str,
        status: &DeviceStatus,
        section: StatusSection,
    ) -> String {
        let mut output = Map::new();
        output.insert("address".to_string(), json!(address));

        if section.includes(StatusSection::Clock) {
            output.insert("current_time".to_string(), json!(status.current_time));
            output.insert("time_format_24h".to_string(), json!(status.time_format_24h));
        }
        if section.includes(StatusSection::Alarm) {
            output.insert("alarm".to_string(), json!(status.alarm));
        }
        if section.includes(StatusSection::Timer) {
            output.insert("timer".to_string(), json!(status.timer));
        }
        if section.includes(StatusSection::Reminder) {
            let reminder = if status.reminder.is_set() {
                json!(status.reminder)
            } else {
                Value::Null
            };
            output.insert("reminder".to_string(), reminder);
        }

        Self::to_json(&Value::Object(output))
    }

    fn format_ack(&self, address: &str, operation: &str, response: &Value) -> String {
        Self::to_json(&json!({
            "address": address,
            "operation": operation,
            "success": true,
            "response": response
        }))
    }

    fn format_timer_tick(&self, timer: &TimerStatus) -> String {
        // One line per poll so the stream is NDJSON
        serde_json::to_string(timer).unwrap_or_else(|_| "{}".to_string())
    }
}
