//! Pull, push and delete of every registered kind

use std::collections::HashSet;
use tracing::{debug, error, info, warn};

use crate::adapters::ResourceAdapter;
use crate::element::{encode_elements, ConfigElement, Resource};
use crate::error::{Result, SyncError};
use crate::store::FileStore;
use crate::types::{SyncOptions, SyncReport};

pub struct SyncEngine {
    options: SyncOptions,
    store: FileStore,
    adapters: Vec<Box<dyn ResourceAdapter>>,
}

impl std::fmt::Debug for SyncEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let adapters: Vec<&str> = self.adapters.iter().map(|a| a.name()).collect();
        f.debug_struct("SyncEngine")
            .field("options", &self.options)
            .field("store", &self.store)
            .field("adapters", &adapters)
            .finish()
    }
}

/// What push decided for one element after the id check
enum IdCheck {
    /// `overriding` is set when the remote object was (or in a dry run would
    /// be) deleted to make room for the element
    Proceed { overriding: bool },
    Skip,
    Failed,
}

impl SyncEngine {
    /// Build an engine over `adapters`, which run in the given order.
    ///
    /// Fails when the config directory is missing, when backups are enabled
    /// and the backup directory is missing, or when two adapters share a kind.
    pub fn new(options: SyncOptions, adapters: Vec<Box<dyn ResourceAdapter>>) -> Result<Self> {
        if !options.config_dir.is_dir() {
            return Err(SyncError::Setup(format!(
                "config directory {} does not exist",
                options.config_dir.display()
            )));
        }
        if options.do_backup && !options.backup_dir.is_dir() {
            return Err(SyncError::Setup(format!(
                "backup directory {} does not exist",
                options.backup_dir.display()
            )));
        }

        let mut seen = HashSet::new();
        for adapter in &adapters {
            if !seen.insert(adapter.name()) {
                return Err(SyncError::Setup(format!(
                    "adapter for {} registered twice",
                    adapter.name()
                )));
            }
        }

        let store = FileStore::new(&options.config_dir, &options.backup_dir);
        debug!(
            "Sync engine ready for {} kinds (dry_run={}, override={}, backup={})",
            adapters.len(),
            options.dry_run,
            options.override_remote,
            options.do_backup
        );

        Ok(Self {
            options,
            store,
            adapters,
        })
    }

    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }

    /// Registered kind names, in run order
    pub fn kinds(&self) -> Vec<&'static str> {
        self.adapters.iter().map(|a| a.name()).collect()
    }

    /// Keep only the adapters for `kinds`. An empty slice keeps everything.
    pub fn retain_kinds<S: AsRef<str>>(&mut self, kinds: &[S]) -> Result<()> {
        if kinds.is_empty() {
            return Ok(());
        }

        let known = self.kinds();
        let wanted: Vec<&str> = kinds.iter().map(|k| k.as_ref()).collect();
        if let Some(unknown) = wanted.iter().copied().find(|k| !known.contains(k)) {
            return Err(SyncError::Setup(format!(
                "unknown kind '{}', expected one of: {}",
                unknown,
                known.join(", ")
            )));
        }

        self.adapters.retain(|a| wanted.contains(&a.name()));
        Ok(())
    }

    /// Overwrite the kind file with everything that exists remotely
    pub async fn pull(&self, adapter: &dyn ResourceAdapter) -> Result<SyncReport> {
        let kind = adapter.name();
        let mut report = SyncReport::new();

        if self.options.do_backup && !self.options.dry_run {
            if let Some(path) = self.store.backup(kind).await? {
                info!(kind, "Backed up previous file to {}", path.display());
            }
        }

        let set = adapter.get_all().await?;

        if self.options.dry_run {
            info!(kind, "Dry run: would write {} elements", set.len());
            return Ok(report);
        }

        let contents = encode_elements(&set.elements)
            .map_err(|source| SyncError::Encode { kind, source })?;
        self.store.write(kind, &contents).await?;
        report.written = set.len();

        info!(
            kind,
            "Wrote {} elements to {}",
            set.len(),
            self.store.kind_path(kind).display()
        );
        Ok(report)
    }

    /// Create every local element that does not exist remotely
    pub async fn push(&self, adapter: &dyn ResourceAdapter) -> Result<SyncReport> {
        let kind = adapter.name();
        let elements = self.load(adapter).await?;
        let mut report = SyncReport::new();

        for element in &elements {
            let name = element.name();
            if name.is_empty() {
                warn!(kind, id = element.id(), "Element has no name, skipping");
                report.skipped += 1;
                continue;
            }

            let mut overriding = false;
            if let Some(id) = element.remote_id() {
                match self.check_id(adapter, id, name).await {
                    IdCheck::Proceed { overriding: replaced } => overriding = replaced,
                    IdCheck::Skip => {
                        report.skipped += 1;
                        continue;
                    }
                    IdCheck::Failed => {
                        report.failed += 1;
                        continue;
                    }
                }
            }

            let matches = match adapter.get_by_name(name).await {
                Ok(matches) => matches,
                Err(e) => {
                    warn!(kind, name, "Lookup by name failed, assuming no match: {}", e);
                    Vec::new()
                }
            };
            if !matches.is_empty() {
                warn!(
                    kind,
                    name,
                    "{} remote object(s) already use this name, skipping",
                    matches.len()
                );
                if overriding && self.options.dry_run {
                    info!(
                        kind,
                        name, "Dry run: the name match may be the object that would be overridden"
                    );
                }
                report.skipped += 1;
                continue;
            }

            if self.options.dry_run {
                info!(kind, name, "Dry run: would create {}", describe(element.delegate()));
                report.created += 1;
                report.overridden += usize::from(overriding);
                continue;
            }

            match adapter.create(element).await {
                Ok(created) => {
                    info!(kind, name, "Created {}", describe(&created));
                    report.created += 1;
                    report.overridden += usize::from(overriding);
                }
                Err(e) => {
                    error!(kind, name, "Failed to create: {}", e);
                    report.failed += 1;
                }
            }
        }

        info!(kind, "Push finished: {}", report);
        Ok(report)
    }

    /// Delete every local element that carries a remote id
    pub async fn delete(&self, adapter: &dyn ResourceAdapter) -> Result<SyncReport> {
        let kind = adapter.name();
        let elements = self.load(adapter).await?;
        let mut report = SyncReport::new();

        for element in &elements {
            let name = element.name();
            let Some(id) = element.remote_id() else {
                error!(kind, name, "Cannot delete: id is missing");
                report.failed += 1;
                continue;
            };

            if self.options.dry_run {
                info!(kind, name, id, "Dry run: would delete");
                report.deleted += 1;
                continue;
            }

            match adapter.delete(id).await {
                Ok(()) => {
                    info!(kind, name, id, "Deleted");
                    report.deleted += 1;
                }
                Err(e) => {
                    error!(kind, name, id, "Failed to delete: {}", e);
                    report.failed += 1;
                }
            }
        }

        info!(kind, "Delete finished: {}", report);
        Ok(report)
    }

    pub async fn pull_all(&self) -> Result<SyncReport> {
        let mut total = SyncReport::new();
        for adapter in &self.adapters {
            let report = self
                .pull(adapter.as_ref())
                .await
                .map_err(|e| wrap("pull", adapter.name(), e))?;
            total.merge(&report);
        }
        Ok(total)
    }

    pub async fn push_all(&self) -> Result<SyncReport> {
        let mut total = SyncReport::new();
        for adapter in &self.adapters {
            let report = self
                .push(adapter.as_ref())
                .await
                .map_err(|e| wrap("push", adapter.name(), e))?;
            total.merge(&report);
        }
        Ok(total)
    }

    pub async fn delete_all(&self) -> Result<SyncReport> {
        let mut total = SyncReport::new();
        for adapter in &self.adapters {
            let report = self
                .delete(adapter.as_ref())
                .await
                .map_err(|e| wrap("delete", adapter.name(), e))?;
            total.merge(&report);
        }
        Ok(total)
    }

    /// Push every kind, then pull every kind so files pick up the new ids
    pub async fn push_then_pull(&self) -> Result<SyncReport> {
        let mut total = self.push_all().await?;
        total.merge(&self.pull_all().await?);
        Ok(total)
    }

    async fn load(&self, adapter: &dyn ResourceAdapter) -> Result<Vec<ConfigElement>> {
        let source = self.store.read(adapter.name()).await?;
        let elements = adapter.decode_file(&source)?;
        debug!(kind = adapter.name(), "Loaded {} elements", elements.len());
        Ok(elements)
    }

    async fn check_id(
        &self,
        adapter: &dyn ResourceAdapter,
        id: i64,
        name: &str,
    ) -> IdCheck {
        let kind = adapter.name();

        match adapter.get_by_id(id).await {
            Ok(Some(_)) if self.options.override_remote => {
                if !self.options.dry_run {
                    if let Err(e) = adapter.delete(id).await {
                        error!(kind, name, id, "Failed to delete remote object for override: {}", e);
                        return IdCheck::Failed;
                    }
                }
                warn!(kind, name, id, "Overriding existing remote object");
                IdCheck::Proceed { overriding: true }
            }
            Ok(Some(_)) => {
                warn!(
                    kind,
                    name, id, "Remote object with this id exists and override is off, skipping"
                );
                IdCheck::Skip
            }
            Ok(None) => IdCheck::Proceed { overriding: false },
            Err(e) => {
                warn!(kind, name, id, "Lookup by id failed, continuing: {}", e);
                IdCheck::Proceed { overriding: false }
            }
        }
    }
}

fn wrap(action: &'static str, kind: &'static str, source: SyncError) -> SyncError {
    SyncError::Adapter {
        action,
        kind,
        source: Box::new(source),
    }
}

fn describe(resource: &Resource) -> String {
    serde_json::to_string(resource).unwrap_or_else(|e| format!("<unprintable payload: {}>", e))
}
