//! Persistent storage
//!
//! Only UI settings are persisted; chat state lives in memory.

pub mod settings;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing stored files
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not determine the user data directory")]
    NoDataDir,
}

/// Platform data directory for this application
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    directories::ProjectDirs::from("", "", "groupchat-ui")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}
