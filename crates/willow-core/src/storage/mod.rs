mod config;
mod database;
mod memory;

pub use config::{BreathingConfig, Config, Reminder, RemindersConfig};
pub use database::Database;
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::error::StorageError;

/// Key-value persistence used by the daily quote rotation and other
/// collaborators.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Write several values together. Stores that can should apply all of
    /// them or none; the default writes them in order and stops at the
    /// first failure.
    fn set_many(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

impl<S: SettingsStore + ?Sized> SettingsStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        (**self).set_many(entries)
    }
}

/// Returns the Willow data directory, creating it if needed.
///
/// `WILLOW_DATA_DIR` overrides the location. Otherwise this is
/// `~/.config/willow`, or `~/.config/willow-dev` when `WILLOW_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("WILLOW_DATA_DIR") {
        Some(custom) => PathBuf::from(custom),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("WILLOW_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("willow-dev")
            } else {
                base_dir.join("willow")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::NoDataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
