//! Clock commands: time sync and display format.

use desk_assistant_core::types::{parse_local_datetime, TimeData};

use crate::cli::{TimeArgs, TimeCommands};
use crate::device::{ensure_connected, Client};
use crate::error::CliError;
use crate::output::get_formatter;

/// Run the time command
pub async fn run_time(client: &Client, args: TimeArgs, json: bool) -> Result<(), CliError> {
    let formatter = get_formatter(json);

    match args.command {
        TimeCommands::Sync(args) => {
            // Parse before probing so bad input never touches the network
            let time = match args.at.as_deref() {
                Some(at) => TimeData::from_datetime(parse_local_datetime(at)?),
                None => TimeData::now(),
            };

            let address = ensure_connected(client).await?;
            let response = client.set_time(&time).await?;

            println!("{}", formatter.format_ack(&address, "time sync", &response));
        }
        TimeCommands::Format(args) => {
            let address = ensure_connected(client).await?;
            let response = client.set_time_format(args.format.is_24h()).await?;

            let operation = if args.format.is_24h() {
                "time format 24h"
            } else {
                "time format 12h"
            };
            println!("{}", formatter.format_ack(&address, operation, &response));
        }
    }

    Ok(())
}
