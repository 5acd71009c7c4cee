//! Alarm commands.

use desk_assistant_core::types::AlarmConfig;

use crate::cli::{AlarmArgs, AlarmCommands, StatusSection};
use crate::commands::status::show_status;
use crate::device::{ensure_connected, Client};
use crate::error::CliError;
use crate::output::get_formatter;

/// Run the alarm command
pub async fn run_alarm(client: &Client, args: AlarmArgs, json: bool) -> Result<(), CliError> {
    match args.command {
        AlarmCommands::Show => show_status(client, StatusSection::Alarm, json).await,
        AlarmCommands::Set(args) => {
            let formatter = get_formatter(json);
            let alarm = AlarmConfig::parse_hhmm(&args.time, !args.disabled)?;

            let address = ensure_connected(client).await?;
            let response = client.set_alarm(&alarm).await?;

            let operation = format!(
                "alarm {} ({})",
                alarm.time_string(),
                if alarm.enabled { "on" } else { "off" }
            );
            println!("{}", formatter.format_ack(&address, &operation, &response));
            Ok(())
        }
    }
}
