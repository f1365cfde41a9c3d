use crate::cli::parser::CleanScope;
use crate::config::Config;
use crate::core::cache::LocalCache;
use crate::credentials::CredentialStore;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle `--clean`: remove saved files before the session starts.
/// Removing a file that is not there is not an error.
pub fn handle(scope: CleanScope, cfg: &Config) -> AppResult<()> {
    if scope == CleanScope::All {
        CredentialStore::new(cfg.credentials_path()).clear()?;
        info("Saved Tickspot credentials removed.");
    }

    LocalCache::new(cfg.data_path(), cfg.days_til_expiration).clear()?;
    info("Cached project data removed.");

    Ok(())
}
