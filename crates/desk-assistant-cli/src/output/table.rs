//! Table-formatted output for CLI.

use colored::*;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use serde_json::Value;

use desk_assistant_core::types::{DeviceStatus, TimeData, TimerStatus};

use super::OutputFormatter;
use crate::cli::StatusSection;

pub struct TableOutput;

impl TableOutput {
    pub fn new() -> Self {
        Self
    }

    fn state_cell(label: &str, color: Color) -> Cell {
        Cell::new(label).fg(color)
    }
}

impl Default for TableOutput {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the device clock the way the device displays it.
pub fn format_clock(time: &TimeData, is_24h: bool) -> String {
    let date = format!("{:04}-{:02}-{:02}", time.year, time.month, time.date);

    if is_24h {
        format!(
            "{} {:02}:{:02}:{:02}",
            date, time.hour, time.minute, time.second
        )
    } else {
        let period = if time.hour >= 12 { "PM" } else { "AM" };
        let hour12 = match time.hour % 12 {
            0 => 12,
            h => h,
        };
        format!(
            "{} {}:{:02}:{:02} {}",
            date, hour12, time.minute, time.second, period
        )
    }
}

impl OutputFormatter for TableOutput {
    fn format_address(&self, address: &str) -> String {
        if address.is_empty() {
            format!("Device address: {}", "not configured".yellow())
        } else {
            format!("Device address: {}", address)
        }
    }

    fn format_connection(&self, address: &str, connected: bool) -> String {
        if connected {
            format!("{} Connected to {}", "[OK]".green(), address)
        } else {
            format!("{} Connection to {} failed", "[FAIL]".red(), address)
        }
    }

    fn format_status(
        &self,
        address: &str,
        status: &DeviceStatus,
        section: StatusSection,
    ) -> String {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Item", "Value", "State"]);

        if section.includes(StatusSection::Clock) {
            let format = if status.time_format_24h { "24h" } else { "12h" };
            table.add_row(vec![
                Cell::new("Clock"),
                Cell::new(format_clock(&status.current_time, status.time_format_24h)),
                Cell::new(format),
            ]);
        }

        if section.includes(StatusSection::Alarm) {
            let state = if status.alarm.enabled {
                Self::state_cell("ON", Color::Green)
            } else {
                Self::state_cell("OFF", Color::Red)
            };
            table.add_row(vec![
                Cell::new("Alarm"),
                Cell::new(status.alarm.time_string()),
                state,
            ]);
        }

        if section.includes(StatusSection::Timer) {
            let state = if status.timer.running {
                Self::state_cell("RUNNING", Color::Green)
            } else {
                Self::state_cell("STOPPED", Color::Yellow)
            };
            table.add_row(vec![
                Cell::new("Timer"),
                Cell::new(status.timer.remaining_string()),
                state,
            ]);
        }

        if section.includes(StatusSection::Reminder) {
            let reminder = &status.reminder;
            if reminder.is_set() {
                let when = reminder
                    .parsed_datetime()
                    .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| reminder.datetime.clone());
                let mut value = format!("{} @ {}", reminder.title, when);
                if !reminder.description.is_empty() {
                    value.push_str(&format!("\n{}", reminder.description));
                }
                table.add_row(vec![
                    Cell::new("Reminder"),
                    Cell::new(value),
                    Self::state_cell("SET", Color::Green),
                ]);
            } else {
                table.add_row(vec![
                    Cell::new("Reminder"),
                    Cell::new("-"),
                    Self::state_cell("NONE", Color::Grey),
                ]);
            }
        }

        format!("Device: {}\n{}", address, table)
    }

    fn format_ack(&self, address: &str, operation: &str, response: &Value) -> String {
        let detail = match response {
            Value::Null => String::new(),
            other => format!("\n{}", serde_json::to_string_pretty(other).unwrap_or_default()),
        };
        format!("{} {} {}{}", "[OK]".green(), address, operation, detail)
    }

    fn format_timer_tick(&self, timer: &TimerStatus) -> String {
        let state = if timer.running {
            "running".green()
        } else {
            "stopped".yellow()
        };
        format!("{}  {}", timer.remaining_string(), state)
    }
}
