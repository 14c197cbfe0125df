//! Result file output
//!
//! Every artifact is written into one output directory. Files are never read
//! back; a name reused by a later run is overwritten.

use crate::error::StorageError;
use crate::utils::file::ensure_directory_exists;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ResultWriter {
    dir: PathBuf,
}

impl ResultWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Where a file of this name is written.
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }

    /// Write `data` as pretty printed JSON.
    pub async fn write_json<T>(&self, filename: &str, data: &T) -> Result<PathBuf, StorageError>
    where
        T: Serialize + ?Sized,
    {
        let content =
            serde_json::to_string_pretty(data).map_err(|e| StorageError::Serialize {
                filename: filename.to_string(),
                message: e.to_string(),
            })?;
        self.write_bytes(filename, content.as_bytes()).await
    }

    /// Write text or raw bytes through unchanged.
    pub async fn write_bytes(
        &self,
        filename: &str,
        content: &[u8],
    ) -> Result<PathBuf, StorageError> {
        ensure_directory_exists(&self.dir).await?;

        let path = self.path_for(filename);
        tokio::fs::write(&path, content)
            .await
            .map_err(|source| StorageError::FileIo {
                path: path.to_string_lossy().to_string(),
                source,
            })?;

        log::info!("Wrote {} bytes to \"{}\".", content.len(), filename);
        Ok(path)
    }
}
