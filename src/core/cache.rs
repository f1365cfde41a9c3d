use crate::errors::{AppError, AppResult};
use crate::models::catalog::{Catalog, Client, Project};
use crate::remote::TimeService;
use crate::ui::messages::{error, info};
use crate::utils::fs::{delete_file, file_exists, write_json};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Owner of the on-disk catalog snapshot.
///
/// Constructed once by the application and handed to whoever needs the
/// catalog. A snapshot older than `max_age_days` is refetched in full.
pub struct LocalCache {
    path: PathBuf,
    max_age_days: i64,
    loaded: Option<Catalog>,
}

impl LocalCache {
    pub fn new(path: impl Into<PathBuf>, max_age_days: i64) -> Self {
        Self {
            path: path.into(),
            max_age_days,
            loaded: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted snapshot. A file that does not parse is fatal.
    pub fn load_snapshot(&self) -> AppResult<Option<Catalog>> {
        if !file_exists(&self.path) {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str::<Catalog>(&content)
            .map(Some)
            .map_err(|e| AppError::InvalidCache {
                path: self.path.display().to_string(),
                reason: e.to_string().replace('\n', ""),
            })
    }

    pub fn get_catalog(&mut self, service: &dyn TimeService) -> AppResult<&Catalog> {
        self.get_catalog_at(service, Utc::now())
    }

    /// Same as [`get_catalog`](Self::get_catalog) with an injected "now".
    pub fn get_catalog_at(
        &mut self,
        service: &dyn TimeService,
        now: DateTime<Utc>,
    ) -> AppResult<&Catalog> {
        let fresh_in_memory = self
            .loaded
            .as_ref()
            .is_some_and(|c| !c.is_stale(now, self.max_age_days));

        if !fresh_in_memory {
            self.loaded = None;

            if let Some(snapshot) = self.load_snapshot()? {
                if snapshot.is_stale(now, self.max_age_days) {
                    log::debug!("catalog cache stale (last updated {})", snapshot.last_updated);
                } else {
                    log::debug!("catalog cache hit ({})", self.path.display());
                    self.loaded = Some(snapshot);
                }
            } else {
                log::debug!("catalog cache missing ({})", self.path.display());
            }
        }

        if self.loaded.is_none() {
            info("Getting your project data from Tickspot...");
            let catalog = fetch_catalog(service, now)?;

            if let Err(e) = write_json(&self.path, &catalog) {
                log::warn!("cache write to {} failed: {}", self.path.display(), e);
                error("😱 Something went wrong while saving the cache");
            }
            self.loaded = Some(catalog);
        }

        self.loaded
            .as_ref()
            .ok_or_else(|| AppError::InvalidCache {
                path: self.path.display().to_string(),
                reason: "catalog unavailable".to_string(),
            })
    }

    /// Drop the snapshot from disk and memory. Missing file is fine.
    pub fn invalidate(&mut self) -> AppResult<()> {
        self.loaded = None;
        delete_file(&self.path)
    }

    pub fn clear(&mut self) -> AppResult<()> {
        self.invalidate()
    }
}

/// Walk clients → projects → tasks, one call at a time.
///
/// Any failing sub-fetch fails the whole refresh; a partial tree is never
/// returned nor persisted.
pub fn fetch_catalog(service: &dyn TimeService, now: DateTime<Utc>) -> AppResult<Catalog> {
    let mut clients: Vec<Client> = service.list_clients()?;
    let mut calls = 1usize;

    for client in clients.iter_mut() {
        let mut projects: Vec<Project> = service.list_projects_for_client(client.id)?;
        calls += 1;

        for project in projects.iter_mut() {
            project.tasks = service.list_tasks_for_project(project.id)?;
            calls += 1;
        }
        client.projects = projects;
    }

    log::debug!("catalog refreshed with {} remote calls", calls);
    Ok(Catalog::new(now, clients))
}
