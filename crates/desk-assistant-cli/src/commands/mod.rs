//! Command implementations.

pub mod alarm;
pub mod connect;
pub mod reminder;
pub mod status;
pub mod time;
pub mod timer;

pub use alarm::run_alarm;
pub use connect::{run_address, run_connect, run_probe};
pub use reminder::run_reminder;
pub use status::run_status;
pub use time::run_time;
pub use timer::run_timer;
