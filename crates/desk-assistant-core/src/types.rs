//! Value records exchanged with the device.
//!
//! Field names match the device's JSON API, so most types serialize
//! without renames.

use chrono::{Datelike, Local, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::DeviceError;

/// Format used for reminder datetimes (ISO 8601, no timezone).
pub const REMINDER_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Wall-clock time as the device understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeData {
    pub year: i32,
    /// 1-12
    pub month: u32,
    /// Day of month, 1-31
    pub date: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeData {
    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            date: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
        }
    }

    /// Current local wall-clock time.
    pub fn now() -> Self {
        Self::from_datetime(Local::now().naive_local())
    }
}

/// Body of the time-format request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFormatRequest {
    pub format_24h: bool,
}

/// Alarm configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmConfig {
    /// 0-23
    pub hour: u32,
    /// 0-59
    pub minute: u32,
    pub enabled: bool,
}

impl AlarmConfig {
    pub fn new(hour: u32, minute: u32, enabled: bool) -> Result<Self, DeviceError> {
        if hour > 23 {
            return Err(DeviceError::InvalidInput(format!(
                "Alarm hour {} out of range 0-23",
                hour
            )));
        }
        if minute > 59 {
            return Err(DeviceError::InvalidInput(format!(
                "Alarm minute {} out of range 0-59",
                minute
            )));
        }
        Ok(Self {
            hour,
            minute,
            enabled,
        })
    }

    /// Parse an alarm time in `HH:MM` form.
    pub fn parse_hhmm(value: &str, enabled: bool) -> Result<Self, DeviceError> {
        let time = NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| {
            DeviceError::InvalidInput(format!("Alarm time '{}' is not in HH:MM form", value))
        })?;
        Self::new(time.hour(), time.minute(), enabled)
    }

    /// Display form, always zero-padded `HH:MM`.
    pub fn time_string(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

/// One-shot timer command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerAction {
    Start,
    Stop,
    Reset,
}

impl TimerAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerAction::Start => "start",
            TimerAction::Stop => "stop",
            TimerAction::Reset => "reset",
        }
    }
}

/// Countdown timer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub action: TimerAction,
}

impl TimerConfig {
    /// Default countdown duration offered to the user.
    pub const DEFAULT_MINUTES: u32 = 10;

    pub fn new(
        hours: u32,
        minutes: u32,
        seconds: u32,
        action: TimerAction,
    ) -> Result<Self, DeviceError> {
        if hours > 23 || minutes > 59 || seconds > 59 {
            return Err(DeviceError::InvalidInput(format!(
                "Timer duration {:02}:{:02}:{:02} out of range (max 23:59:59)",
                hours, minutes, seconds
            )));
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
            action,
        })
    }
}

/// Timer section of a status snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerStatus {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub running: bool,
}

impl TimerStatus {
    pub fn remaining_string(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// One-shot reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderConfig {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DDTHH:MM:SS`, local time, no offset
    pub datetime: String,
}

impl ReminderConfig {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        at: NaiveDateTime,
    ) -> Result<Self, DeviceError> {
        let title = title.into();
        if title.is_empty() {
            return Err(DeviceError::InvalidInput(
                "Reminder title cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            title,
            description: description.into(),
            datetime: at.format(REMINDER_DATETIME_FORMAT).to_string(),
        })
    }

    /// The device reports an empty title when no reminder is scheduled.
    pub fn is_set(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn parsed_datetime(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.datetime, REMINDER_DATETIME_FORMAT).ok()
    }
}

/// Parse a user-supplied reminder/sync datetime.
///
/// Accepts `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DDTHH:MM` and the same with a
/// space instead of `T`.
pub fn parse_local_datetime(value: &str) -> Result<NaiveDateTime, DeviceError> {
    const FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];

    let value = value.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| {
            DeviceError::InvalidInput(format!(
                "'{}' is not a datetime in YYYY-MM-DDTHH:MM[:SS] form",
                value
            ))
        })
}

/// Full device state snapshot returned by `/api/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceStatus {
    pub current_time: TimeData,
    pub time_format_24h: bool,
    pub alarm: AlarmConfig,
    pub timer: TimerStatus,
    pub reminder: ReminderConfig,
}
