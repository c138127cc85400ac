use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Engine settings for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncOptions {
    /// Replace remote objects that share an id with a local element
    pub override_remote: bool,
    /// Perform every read but no remote or local mutation
    pub dry_run: bool,
    /// Back up kind files before a pull overwrites them
    pub do_backup: bool,
    pub config_dir: PathBuf,
    pub backup_dir: PathBuf,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            override_remote: false,
            dry_run: false,
            do_backup: true,
            config_dir: PathBuf::from("backup"),
            backup_dir: PathBuf::from("backup/history"),
        }
    }
}

/// Counters of one operation, for one or more kinds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    pub created: usize,
    pub overridden: usize,
    pub skipped: usize,
    pub deleted: usize,
    pub failed: usize,
    /// Elements written to kind files by pull
    pub written: usize,
}

impl SyncReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(&mut self, other: &SyncReport) {
        self.created += other.created;
        self.overridden += other.overridden;
        self.skipped += other.skipped;
        self.deleted += other.deleted;
        self.failed += other.failed;
        self.written += other.written;
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} created, {} overridden, {} skipped, {} deleted, {} failed, {} written",
            self.created, self.overridden, self.skipped, self.deleted, self.failed, self.written
        )
    }
}
