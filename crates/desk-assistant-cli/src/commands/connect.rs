//! Address and connectivity commands.

use crate::cli::ConnectArgs;
use crate::device::Client;
use crate::error::CliError;
use crate::output::get_formatter;

/// Save the address, then probe it.
///
/// The address stays saved even when the probe fails, so a device that is
/// switched off right now can still be configured for later.
pub async fn run_connect(client: &Client, args: ConnectArgs, json: bool) -> Result<(), CliError> {
    let formatter = get_formatter(json);

    let address = args.address.trim();
    if address.is_empty() {
        return Err(CliError::InvalidArgument(
            "Device address cannot be empty".to_string(),
        ));
    }

    client.set_address(address).await?;

    let connected = client.test_connection().await;
    println!("{}", formatter.format_connection(address, connected));

    if !connected {
        return Err(CliError::NotConnected(address.to_string()));
    }

    Ok(())
}

/// Print the saved address.
pub fn run_address(client: &Client, json: bool) -> Result<(), CliError> {
    let formatter = get_formatter(json);
    println!("{}", formatter.format_address(&client.address()));
    Ok(())
}

/// Probe the saved address.
pub async fn run_probe(client: &Client, json: bool) -> Result<(), CliError> {
    let formatter = get_formatter(json);

    if !client.has_address() {
        println!("{}", formatter.format_address(""));
        return Err(crate::error::DeviceError::NoAddress.into());
    }

    let address = client.address();
    let connected = client.test_connection().await;
    println!("{}", formatter.format_connection(&address, connected));

    if !connected {
        return Err(CliError::NotConnected(address));
    }

    Ok(())
}
