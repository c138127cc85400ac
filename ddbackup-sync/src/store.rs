//! Kind files and their timestamped backups

use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::error::{Result, SyncError};

#[derive(Debug, Clone)]
pub struct FileStore {
    config_dir: PathBuf,
    backup_dir: PathBuf,
}

impl FileStore {
    pub fn new(config_dir: impl Into<PathBuf>, backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            backup_dir: backup_dir.into(),
        }
    }

    /// `{config_dir}/{kind}.yaml`
    pub fn kind_path(&self, kind: &str) -> PathBuf {
        self.config_dir.join(format!("{}.yaml", kind))
    }

    /// `{backup_dir}/{unix_seconds}_{kind}.yaml`
    pub fn backup_path(&self, kind: &str, timestamp: i64) -> PathBuf {
        self.backup_dir.join(format!("{}_{}.yaml", timestamp, kind))
    }

    pub async fn read(&self, kind: &str) -> Result<String> {
        let path = self.kind_path(kind);
        fs::read_to_string(&path)
            .await
            .map_err(|e| SyncError::io(path, e))
    }

    /// Replace the kind file with `contents`
    pub async fn write(&self, kind: &str, contents: &str) -> Result<()> {
        let path = self.kind_path(kind);
        fs::write(&path, contents)
            .await
            .map_err(|e| SyncError::io(path, e))
    }

    /// Copy the current kind file into the backup directory.
    ///
    /// Returns the backup path, or `None` when there was no file to copy.
    pub async fn backup(&self, kind: &str) -> Result<Option<PathBuf>> {
        let source = self.kind_path(kind);
        if !exists(&source).await? {
            debug!(kind, "No existing file to back up");
            return Ok(None);
        }

        let target = self.backup_path(kind, Utc::now().timestamp());
        fs::copy(&source, &target)
            .await
            .map_err(|e| SyncError::io(target.clone(), e))?;

        Ok(Some(target))
    }
}

async fn exists(path: &Path) -> Result<bool> {
    fs::try_exists(path)
        .await
        .map_err(|e| SyncError::io(path, e))
}
