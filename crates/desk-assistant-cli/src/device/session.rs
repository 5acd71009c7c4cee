//! Client construction and connectivity gate.

use std::path::PathBuf;
use std::time::Duration;

use desk_assistant_core::storage::default_data_dir;
use desk_assistant_core::{AddressStore, DeviceClient, DeviceError, HttpTransport};

use crate::error::CliError;

/// Client type used by every command.
pub type Client = DeviceClient<HttpTransport>;

/// Open the device client with the saved address.
///
/// `data_dir` overrides the platform data directory; `timeout_ms` sets a
/// request timeout, otherwise requests wait for the transport default.
pub async fn open_client(
    data_dir: Option<PathBuf>,
    timeout_ms: Option<u64>,
) -> Result<Client, CliError> {
    let dir = match data_dir {
        Some(dir) => dir,
        None => default_data_dir().ok_or_else(|| {
            CliError::Other("Could not determine a data directory; pass --data-dir".to_string())
        })?,
    };
    tracing::debug!(dir = %dir.display(), "Using data directory");

    let store = AddressStore::new(dir)?;
    let client = DeviceClient::open_http(store, timeout_ms.map(Duration::from_millis)).await?;
    Ok(client)
}

/// Require a saved address and a successful probe before talking to the device.
///
/// Returns the address that answered.
pub async fn ensure_connected(client: &Client) -> Result<String, CliError> {
    if !client.has_address() {
        return Err(DeviceError::NoAddress.into());
    }

    let address = client.address();
    if !client.test_connection().await {
        return Err(CliError::NotConnected(address));
    }

    Ok(address)
}
