//! Output formatting for CLI results.

pub mod json;
pub mod table;

pub use json::JsonOutput;
pub use table::TableOutput;

use desk_assistant_core::types::{DeviceStatus, TimerStatus};
use serde_json::Value;

use crate::cli::StatusSection;

/// Output formatter trait
pub trait OutputFormatter {
    /// Format the saved address (empty means unconfigured)
    fn format_address(&self, address: &str) -> String;

    /// Format a probe result
    fn format_connection(&self, address: &str, connected: bool) -> String;

    /// Format a status snapshot, limited to `section`
    fn format_status(&self, address: &str, status: &DeviceStatus, section: StatusSection)
        -> String;

    /// Format the device's acknowledgement of a write
    fn format_ack(&self, address: &str, operation: &str, response: &Value) -> String;

    /// Format one poll of a running timer
    fn format_timer_tick(&self, timer: &TimerStatus) -> String;
}

/// Get the appropriate formatter based on JSON flag
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonOutput::new())
    } else {
        Box::new(TableOutput::new())
    }
}
