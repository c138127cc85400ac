#![allow(dead_code)]

use async_trait::async_trait;
use mockall::mock;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

use ddbackup_http::{
    Dashboard, DashboardSummary, DashboardsApi, Downtime, DowntimesApi, HttpError, Monitor,
    MonitorsApi,
};
use ddbackup_sync::{MonitorAdapter, ResourceAdapter, SyncOptions};

mock! {
    pub Monitors {}

    #[async_trait]
    impl MonitorsApi for Monitors {
        async fn list_monitors(&self) -> Result<Vec<Monitor>, HttpError>;
        async fn get_monitor(&self, id: i64) -> Result<Option<Monitor>, HttpError>;
        async fn find_monitors_by_name(&self, name: &str) -> Result<Vec<Monitor>, HttpError>;
        async fn create_monitor(&self, monitor: &Monitor) -> Result<Monitor, HttpError>;
        async fn delete_monitor(&self, id: i64) -> Result<(), HttpError>;
    }
}

mock! {
    pub Dashboards {}

    #[async_trait]
    impl DashboardsApi for Dashboards {
        async fn list_dashboards(&self) -> Result<Vec<DashboardSummary>, HttpError>;
        async fn get_dashboard(&self, id: i64) -> Result<Option<Dashboard>, HttpError>;
        async fn create_dashboard(&self, dashboard: &Dashboard) -> Result<Dashboard, HttpError>;
        async fn delete_dashboard(&self, id: i64) -> Result<(), HttpError>;
    }
}

mock! {
    pub Downtimes {}

    #[async_trait]
    impl DowntimesApi for Downtimes {
        async fn list_downtimes(&self) -> Result<Vec<Downtime>, HttpError>;
        async fn get_downtime(&self, id: i64) -> Result<Option<Downtime>, HttpError>;
        async fn create_downtime(&self, downtime: &Downtime) -> Result<Downtime, HttpError>;
        async fn delete_downtime(&self, id: i64) -> Result<(), HttpError>;
    }
}

pub fn monitor(id: Option<i64>, name: &str) -> Monitor {
    Monitor {
        id,
        name: Some(name.to_string()),
        monitor_type: Some("metric alert".to_string()),
        query: Some(format!("avg(last_5m):avg:{}{{*}} > 90", name)),
        tags: vec!["team:core".to_string()],
        ..Default::default()
    }
}

pub fn rejected(status: u16) -> HttpError {
    HttpError::Status {
        status,
        body: "rejected".to_string(),
    }
}

pub fn monitor_adapter(api: MockMonitors) -> Box<dyn ResourceAdapter> {
    Box::new(MonitorAdapter::new(Arc::new(api)))
}

/// Temporary config and backup directories, removed on drop
pub struct Workspace {
    pub root: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        std::fs::create_dir_all(root.path().join("config")).unwrap();
        std::fs::create_dir_all(root.path().join("history")).unwrap();
        Self { root }
    }

    pub fn config_dir(&self) -> std::path::PathBuf {
        self.root.path().join("config")
    }

    pub fn backup_dir(&self) -> std::path::PathBuf {
        self.root.path().join("history")
    }

    pub fn options(&self) -> SyncOptions {
        SyncOptions {
            override_remote: false,
            dry_run: false,
            do_backup: true,
            config_dir: self.config_dir(),
            backup_dir: self.backup_dir(),
        }
    }

    pub fn write_kind(&self, kind: &str, contents: &str) {
        std::fs::write(self.kind_path(kind), contents).unwrap();
    }

    pub fn read_kind(&self, kind: &str) -> String {
        std::fs::read_to_string(self.kind_path(kind)).unwrap()
    }

    pub fn kind_path(&self, kind: &str) -> std::path::PathBuf {
        self.config_dir().join(format!("{}.yaml", kind))
    }

    pub fn backups(&self) -> Vec<std::path::PathBuf> {
        let mut entries: Vec<_> = std::fs::read_dir(self.backup_dir())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        entries.sort();
        entries
    }
}

pub fn file_name(path: &Path) -> String {
    path.file_name().unwrap().to_string_lossy().to_string()
}
