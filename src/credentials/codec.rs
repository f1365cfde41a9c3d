use crate::errors::{AppError, AppResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Reversible transform applied to every persisted credential field.
/// Swap the implementation to plug in a real secret backend.
pub trait CredentialCodec {
    fn encode(&self, plain: &str) -> String;
    fn decode(&self, encoded: &str) -> AppResult<String>;
}

/// Base64 obfuscation. Keeps tokens out of casual view; it is not encryption.
#[derive(Debug, Default, Clone, Copy)]
pub struct Base64Codec;

impl CredentialCodec for Base64Codec {
    fn encode(&self, plain: &str) -> String {
        STANDARD.encode(plain.as_bytes())
    }

    fn decode(&self, encoded: &str) -> AppResult<String> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|e| AppError::MissingCredentials(format!("undecodable field: {e}")))?;
        String::from_utf8(bytes)
            .map_err(|e| AppError::MissingCredentials(format!("undecodable field: {e}")))
    }
}
