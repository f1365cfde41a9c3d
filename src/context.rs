//! Per-run application state, built once in `run` and lent to every command.

use crate::config::Config;
use crate::core::cache::LocalCache;
use crate::credentials::Credentials;
use crate::errors::AppResult;
use crate::remote::TimeService;
use chrono::NaiveDate;

pub struct AppContext {
    pub cfg: Config,
    pub cache: LocalCache,
    pub credentials: Credentials,
    pub service: Box<dyn TimeService>,
    /// Reference day for week windows and "today" entries.
    pub today: NaiveDate,
}

impl AppContext {
    pub fn new(cfg: Config, credentials: Credentials, service: Box<dyn TimeService>, today: NaiveDate) -> Self {
        let cache = LocalCache::new(cfg.data_path(), cfg.days_til_expiration);
        Self {
            cfg,
            cache,
            credentials,
            service,
            today,
        }
    }

    pub fn user_id(&self) -> AppResult<u64> {
        self.credentials.require_user_id()
    }
}
