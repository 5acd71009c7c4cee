//! Status command implementation.

use crate::cli::{StatusArgs, StatusSection};
use crate::device::{ensure_connected, Client};
use crate::error::CliError;
use crate::output::get_formatter;

/// Run the status command
pub async fn run_status(client: &Client, args: StatusArgs, json: bool) -> Result<(), CliError> {
    show_status(client, args.section, json).await
}

/// Probe, fetch the snapshot and print the requested section.
///
/// Shared by `alarm show`, `timer show` and `reminder show`.
pub async fn show_status(
    client: &Client,
    section: StatusSection,
    json: bool,
) -> Result<(), CliError> {
    let formatter = get_formatter(json);
    let address = ensure_connected(client).await?;

    let status = client.get_status().await?;

    println!("{}", formatter.format_status(&address, &status, section));

    Ok(())
}
