mod config;
pub mod database;
pub mod store;
#[cfg(test)]
pub(crate) mod testing;

pub use config::{AlarmsConfig, Config, FeedbackConfig, LoggingConfig};
pub use database::Database;
pub use store::{KvStore, Store, ALARMS_KEY, ENTRIES_KEY, PROFILE_KEY};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns the application data directory, creating it if needed.
///
/// `CONSCIENTE_DATA_DIR` overrides the location outright. Otherwise the
/// directory is `~/.config/consciente[-dev]/`, with the `-dev` suffix
/// selected by `CONSCIENTE_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("CONSCIENTE_DATA_DIR") {
        Some(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env =
                std::env::var("CONSCIENTE_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("consciente-dev")
            } else {
                base_dir.join("consciente")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
