//! Credential persistence.
//!
//! The file holds `username`, `subscriptionId`, `token` and `userId`, each
//! passed through a [`CredentialCodec`]. The password only lives in memory.

pub mod codec;

use crate::errors::{AppError, AppResult};
use crate::utils::fs::{delete_file, file_exists, write_json};
use codec::{Base64Codec, CredentialCodec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
    pub subscription_id: Option<u64>,
    pub token: Option<String>,
    pub user_id: Option<u64>,
}

impl Credentials {
    /// Overwrite only the fields that `other` carries.
    pub fn update(&mut self, other: Credentials) {
        if other.username.is_some() {
            self.username = other.username;
        }
        if other.password.is_some() {
            self.password = other.password;
        }
        if other.subscription_id.is_some() {
            self.subscription_id = other.subscription_id;
        }
        if other.token.is_some() {
            self.token = other.token;
        }
        if other.user_id.is_some() {
            self.user_id = other.user_id;
        }
    }

    /// Enough to call the subscription-scoped API on behalf of a user.
    pub fn is_complete(&self) -> bool {
        self.subscription_id.is_some() && self.token.is_some() && self.user_id.is_some()
    }

    pub fn require_user_id(&self) -> AppResult<u64> {
        self.user_id
            .ok_or_else(|| AppError::MissingCredentials("no user selected".to_string()))
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredCredentials {
    username: Option<String>,
    subscription_id: Option<String>,
    token: Option<String>,
    user_id: Option<String>,
}

pub struct CredentialStore {
    path: PathBuf,
    codec: Box<dyn CredentialCodec>,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_codec(path, Box::new(Base64Codec))
    }

    pub fn with_codec(path: impl Into<PathBuf>, codec: Box<dyn CredentialCodec>) -> Self {
        Self {
            path: path.into(),
            codec,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when nothing has been saved yet.
    pub fn load(&self) -> AppResult<Option<Credentials>> {
        if !file_exists(&self.path) {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let stored: StoredCredentials = serde_json::from_str(&content)?;

        let decode = |v: Option<String>| -> AppResult<Option<String>> {
            v.map(|s| self.codec.decode(&s)).transpose()
        };
        let parse_id = |v: Option<String>, field: &str| -> AppResult<Option<u64>> {
            v.map(|s| {
                s.parse::<u64>()
                    .map_err(|_| AppError::MissingCredentials(format!("invalid {field}: {s}")))
            })
            .transpose()
        };

        Ok(Some(Credentials {
            username: decode(stored.username)?,
            password: None,
            subscription_id: parse_id(decode(stored.subscription_id)?, "subscriptionId")?,
            token: decode(stored.token)?,
            user_id: parse_id(decode(stored.user_id)?, "userId")?,
        }))
    }

    pub fn save(&self, creds: &Credentials) -> AppResult<()> {
        let encode = |v: Option<String>| v.map(|s| self.codec.encode(&s));
        let stored = StoredCredentials {
            username: encode(creds.username.clone()),
            subscription_id: encode(creds.subscription_id.map(|id| id.to_string())),
            token: encode(creds.token.clone()),
            user_id: encode(creds.user_id.map(|id| id.to_string())),
        };
        write_json(&self.path, &stored)
    }

    pub fn clear(&self) -> AppResult<()> {
        delete_file(&self.path)
    }
}
