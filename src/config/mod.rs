use crate::errors::AppResult;
use crate::utils::path::default_data_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod recurring;

pub const DEFAULT_API_BASE_URL: &str = "https://www.tickspot.com";

/// Per-user settings, read from `<data_dir>/tickory.conf` (YAML).
/// Every field is optional in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data_file: Option<String>,
    #[serde(default)]
    pub credentials_file: Option<String>,
    #[serde(default = "default_days_til_expiration")]
    pub days_til_expiration: i64,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub user_agent_email: Option<String>,

    /// Directory the relative file names above resolve against.
    #[serde(skip)]
    pub data_dir: PathBuf,
}

fn default_days_til_expiration() -> i64 {
    7
}
fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            credentials_file: None,
            days_til_expiration: default_days_til_expiration(),
            api_base_url: default_api_base_url(),
            user_agent_email: None,
            data_dir: default_data_dir(),
        }
    }
}

impl Config {
    pub fn config_file(data_dir: &Path) -> PathBuf {
        data_dir.join("tickory.conf")
    }

    /// Load settings from `data_dir`, or return defaults if the file is absent.
    /// A file that exists but does not parse is an error.
    pub fn load(data_dir: Option<&Path>) -> AppResult<Self> {
        let dir = data_dir.map(Path::to_path_buf).unwrap_or_else(default_data_dir);
        let path = Self::config_file(&dir);

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Config::default()
            } else {
                serde_yaml::from_str::<Config>(&content)?
            }
        } else {
            Config::default()
        };

        log::debug!("settings loaded from {} (exists: {})", path.display(), path.exists());
        cfg.data_dir = dir;
        Ok(cfg)
    }

    fn resolve(&self, name: &Option<String>, fallback: &str) -> PathBuf {
        match name {
            Some(n) => {
                let p = crate::utils::path::expand_tilde(n);
                if p.is_absolute() { p } else { self.data_dir.join(p) }
            }
            None => self.data_dir.join(fallback),
        }
    }

    /// Cached catalog snapshot.
    pub fn data_path(&self) -> PathBuf {
        self.resolve(&self.data_file, "tickory-tasks.json")
    }

    /// Obfuscated credentials.
    pub fn credentials_path(&self) -> PathBuf {
        self.resolve(&self.credentials_file, "tickory.json")
    }
}
