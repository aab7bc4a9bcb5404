/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/2/26
******************************************************************************/

//! Session state for authenticated requests
//!
//! A [`Session`] owns the optional bearer token for one client instance and
//! the durable store behind it. The token is absent until a login succeeds,
//! attached to every request while present, and removed on logout. Writes go
//! to memory and the store together; under concurrent logins the last write
//! wins.

use crate::error::AppError;
use crate::storage::TokenStore;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Holds the bearer token for one client instance
pub struct Session {
    store: Arc<dyn TokenStore>,
    token: RwLock<Option<String>>,
}

impl Session {
    /// Creates a session, loading any token the store has persisted
    ///
    /// # Arguments
    /// * `store` - Durable backend for the token slot
    ///
    /// # Returns
    /// * `Ok(Session)` - Session primed with the persisted token, if any
    /// * `Err(AppError)` - If the store cannot be read
    pub fn new(store: Arc<dyn TokenStore>) -> Result<Self, AppError> {
        let token = store.load()?;
        if token.is_some() {
            debug!("Restored persisted session token");
        }
        Ok(Self {
            store,
            token: RwLock::new(token),
        })
    }

    /// Stores a token in memory and in the durable store
    ///
    /// The token shape is not validated; whatever the backend issued is kept
    /// verbatim.
    pub fn set_token(&self, token: &str) -> Result<(), AppError> {
        self.store.save(token)?;
        *self.token.write().expect("token lock poisoned") = Some(token.to_string());
        Ok(())
    }

    /// Removes the token from memory and from the durable store
    pub fn clear_token(&self) -> Result<(), AppError> {
        self.store.clear()?;
        *self.token.write().expect("token lock poisoned") = None;
        Ok(())
    }

    /// Returns the current token, if one is set
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    /// Returns the `Bearer <token>` header value, if a token is set
    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {t}"))
    }

    /// Builds the standard header set for a JSON request
    ///
    /// Always carries `Content-Type: application/json`; carries
    /// `Authorization: Bearer <token>` iff a token is set.
    pub fn request_headers(&self) -> Result<HeaderMap, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(bearer) = self.bearer() {
            let value = HeaderValue::from_str(&bearer).map_err(|_| AppError::InvalidToken)?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }
}
