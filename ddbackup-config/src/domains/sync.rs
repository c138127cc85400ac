//! Local file layout and backup policy

use crate::error::ConfigResult;
use crate::validation::{validate_required_string, Validatable};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the per-kind YAML files live and whether pulls keep backups
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SyncConfig {
    /// Directory holding `{kind}.yaml`
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,

    /// Directory receiving `{timestamp}_{kind}.yaml` copies before a pull
    #[serde(default = "default_backup_dir")]
    pub backup_dir: PathBuf,

    /// Copy the current file into `backup_dir` before a pull overwrites it
    #[serde(default = "crate::domains::utils::default_true")]
    pub backup: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            config_dir: default_config_dir(),
            backup_dir: default_backup_dir(),
            backup: true,
        }
    }
}

impl Validatable for SyncConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_required_string(
            &self.config_dir.to_string_lossy(),
            "config_dir",
            self.domain_name(),
        )?;
        if self.backup {
            validate_required_string(
                &self.backup_dir.to_string_lossy(),
                "backup_dir",
                self.domain_name(),
            )?;
        }
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "sync"
    }
}

fn default_config_dir() -> PathBuf {
    PathBuf::from("backup")
}

fn default_backup_dir() -> PathBuf {
    PathBuf::from("backup/history")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_config_defaults() {
        let config = SyncConfig::default();
        assert_eq!(config.config_dir, PathBuf::from("backup"));
        assert_eq!(config.backup_dir, PathBuf::from("backup/history"));
        assert!(config.backup);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_backup_dir_only_required_with_backups() {
        let mut config = SyncConfig {
            backup_dir: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.backup = false;
        assert!(config.validate().is_ok());
    }
}
