/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/2/26
******************************************************************************/

//! Durable storage for the session token
//!
//! The platform keeps exactly one credential on the client side: the bearer
//! token handed out at login. The store is a single key-value slot named
//! `access_token`, read once when a session is constructed and written or
//! removed as the user logs in and out.

use crate::constants::TOKEN_STORE_KEY;
use crate::error::AppError;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Storage backend for the single `access_token` slot
pub trait TokenStore: Send + Sync {
    /// Reads the persisted token, if any
    fn load(&self) -> Result<Option<String>, AppError>;

    /// Persists the token, replacing any previous value
    fn save(&self, token: &str) -> Result<(), AppError>;

    /// Removes the persisted token
    fn clear(&self) -> Result<(), AppError>;
}

/// File-backed token store
///
/// Persists the slot as a small JSON document (`{"access_token": "..."}`) at
/// the configured path. A missing file means no token; a file that cannot be
/// parsed is treated the same way, since a corrupt slot is indistinguishable
/// from an absent one for the caller.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store backed by the given file path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, AppError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AppError::Io(e)),
        };

        match serde_json::from_str::<Value>(&contents) {
            Ok(document) => Ok(document
                .get(TOKEN_STORE_KEY)
                .and_then(Value::as_str)
                .map(String::from)),
            Err(e) => {
                warn!("Token store at {:?} is not valid JSON: {e}", self.path);
                Ok(None)
            }
        }
    }

    fn save(&self, token: &str) -> Result<(), AppError> {
        let mut document = Map::new();
        document.insert(TOKEN_STORE_KEY.to_string(), Value::from(token));
        fs::write(&self.path, serde_json::to_string(&Value::Object(document))?)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

/// In-memory token store for tests and embeddings that do not want persistence
#[derive(Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    /// Creates an empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, AppError> {
        Ok(self.slot.lock().expect("token slot poisoned").clone())
    }

    fn save(&self, token: &str) -> Result<(), AppError> {
        *self.slot.lock().expect("token slot poisoned") = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        *self.slot.lock().expect("token slot poisoned") = None;
        Ok(())
    }
}
