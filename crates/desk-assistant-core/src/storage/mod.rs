//! Durable client-side storage.

pub mod address;

pub use address::AddressStore;

/// Get the default data directory for desk assistant tools.
///
/// Uses the `directories` crate to find the appropriate platform-specific
/// data directory.
pub fn default_data_dir() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("", "desk-assistant", "desk-assistant")
        .map(|dirs| dirs.data_dir().to_path_buf())
}
