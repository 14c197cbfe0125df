//! File system operations and path handling utilities

use crate::error::StorageError;
use std::path::Path;

/// Ensure a directory exists, creating it if necessary
pub async fn ensure_directory_exists<P: AsRef<Path>>(path: P) -> Result<(), StorageError> {
    let path = path.as_ref();
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| StorageError::FileIo {
            path: path.to_string_lossy().to_string(),
            source,
        })
}
