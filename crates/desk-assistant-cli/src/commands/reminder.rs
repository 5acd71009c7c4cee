//! Reminder commands.

use desk_assistant_core::types::{parse_local_datetime, ReminderConfig};

use crate::cli::{ReminderArgs, ReminderCommands, StatusSection};
use crate::commands::status::show_status;
use crate::device::{ensure_connected, Client};
use crate::error::CliError;
use crate::output::get_formatter;

/// Run the reminder command
pub async fn run_reminder(
    client: &Client,
    args: ReminderArgs,
    json: bool,
) -> Result<(), CliError> {
    match args.command {
        ReminderCommands::Show => show_status(client, StatusSection::Reminder, json).await,
        ReminderCommands::Set(args) => {
            let formatter = get_formatter(json);
            let at = parse_local_datetime(&args.at)?;
            let reminder = ReminderConfig::new(args.title, args.description, at)?;

            let address = ensure_connected(client).await?;
            let response = client.set_reminder(&reminder).await?;

            let operation = format!("reminder '{}' at {}", reminder.title, reminder.datetime);
            println!("{}", formatter.format_ack(&address, &operation, &response));
            Ok(())
        }
    }
}
