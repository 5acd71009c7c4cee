//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use desk_assistant_core::types::TimerConfig;

/// Desk Assistant CLI - configure an ESP32 Smart Desktop Assistant over the local network
#[derive(Parser, Debug)]
#[command(name = "desk-assistant")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Request timeout in milliseconds (default: no timeout)
    #[arg(long, global = true, env = "DESK_ASSISTANT_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Directory holding the saved device address
    #[arg(long, global = true, env = "DESK_ASSISTANT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save the device address and test the connection
    Connect(ConnectArgs),

    /// Show the saved device address
    Address,

    /// Test the connection to the saved device
    Probe,

    /// Show device status
    Status(StatusArgs),

    /// Device clock: sync time and display format
    Time(TimeArgs),

    /// Alarm settings
    Alarm(AlarmArgs),

    /// Countdown timer control
    Timer(TimerArgs),

    /// One-shot reminder
    Reminder(ReminderArgs),
}

// ==================== Connect ====================

#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// Device address (IP or hostname, optionally with :port)
    pub address: String,
}

// ==================== Status ====================

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Which part of the status to show
    #[arg(long, value_enum, default_value = "all")]
    pub section: StatusSection,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusSection {
    All,
    Clock,
    Alarm,
    Timer,
    Reminder,
}

impl StatusSection {
    pub fn includes(&self, other: StatusSection) -> bool {
        *self == StatusSection::All || *self == other
    }
}

// ==================== Time ====================

#[derive(Args, Debug)]
pub struct TimeArgs {
    #[command(subcommand)]
    pub command: TimeCommands,
}

#[derive(Subcommand, Debug)]
pub enum TimeCommands {
    /// Push the local wall-clock time to the device
    Sync(TimeSyncArgs),

    /// Switch between 12-hour and 24-hour display
    Format(TimeFormatArgs),
}

#[derive(Args, Debug)]
pub struct TimeSyncArgs {
    /// Send this time instead of now (YYYY-MM-DDTHH:MM[:SS])
    #[arg(long)]
    pub at: Option<String>,
}

#[derive(Args, Debug)]
pub struct TimeFormatArgs {
    /// Display format
    #[arg(value_enum)]
    pub format: ClockFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockFormat {
    #[value(name = "12")]
    Hour12,
    #[value(name = "24")]
    Hour24,
}

impl ClockFormat {
    pub fn is_24h(&self) -> bool {
        matches!(self, ClockFormat::Hour24)
    }
}

// ==================== Alarm ====================

#[derive(Args, Debug)]
pub struct AlarmArgs {
    #[command(subcommand)]
    pub command: AlarmCommands,
}

#[derive(Subcommand, Debug)]
pub enum AlarmCommands {
    /// Show the current alarm
    Show,

    /// Set the alarm time
    Set(AlarmSetArgs),
}

#[derive(Args, Debug)]
pub struct AlarmSetArgs {
    /// Alarm time (HH:MM, 24-hour)
    pub time: String,

    /// Save the alarm switched off
    #[arg(long)]
    pub disabled: bool,
}

// ==================== Timer ====================

#[derive(Args, Debug)]
pub struct TimerArgs {
    #[command(subcommand)]
    pub command: TimerCommands,
}

#[derive(Subcommand, Debug)]
pub enum TimerCommands {
    /// Show the countdown state
    Show,

    /// Start the countdown
    Start(TimerDurationArgs),

    /// Pause the countdown
    Stop(TimerDurationArgs),

    /// Reset the countdown
    Reset(TimerDurationArgs),

    /// Poll the countdown until it stops
    Watch(TimerWatchArgs),
}

#[derive(Args, Debug)]
pub struct TimerDurationArgs {
    /// Hours (0-23)
    #[arg(long, default_value = "0")]
    pub hours: u32,

    /// Minutes (0-59)
    #[arg(long, default_value_t = TimerConfig::DEFAULT_MINUTES)]
    pub minutes: u32,

    /// Seconds (0-59)
    #[arg(long, default_value = "0")]
    pub seconds: u32,
}

#[derive(Args, Debug)]
pub struct TimerWatchArgs {
    /// Polling interval in seconds
    #[arg(long, default_value = "3")]
    pub interval: u64,
}

// ==================== Reminder ====================

#[derive(Args, Debug)]
pub struct ReminderArgs {
    #[command(subcommand)]
    pub command: ReminderCommands,
}

#[derive(Subcommand, Debug)]
pub enum ReminderCommands {
    /// Show the scheduled reminder
    Show,

    /// Schedule a reminder
    Set(ReminderSetArgs),
}

#[derive(Args, Debug)]
pub struct ReminderSetArgs {
    /// Reminder title
    #[arg(short, long)]
    pub title: String,

    /// Optional description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// When to fire (YYYY-MM-DDTHH:MM[:SS], local time)
    #[arg(long)]
    pub at: String,
}
