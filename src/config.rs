/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/2/26
******************************************************************************/

use crate::constants::{
    DEFAULT_AUTH_SUFFIX, DEFAULT_BASE_URL, DEFAULT_CONTENT_SUFFIX, DEFAULT_LEARNING_SUFFIX,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TOKEN_STORE_FILE,
};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One of the three backend services the platform exposes
///
/// Every request names its target service; the endpoint table below maps it to
/// a network location. The mapping is total, so a facade can never reference a
/// service without an entry.
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    /// Registration, login, token refresh, profile
    Auth,
    /// Question generation, grading, progress tracking
    Learning,
    /// Question bank, learning resources, uploads
    Content,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Network location suffixes for each backend service
///
/// A suffix is appended directly to the base URL, so `http://localhost` plus
/// `:8001` yields the auth service origin.
pub struct ServiceEndpoints {
    /// Suffix for the auth service
    pub auth: String,
    /// Suffix for the learning service
    pub learning: String,
    /// Suffix for the content service
    pub content: String,
}

impl ServiceEndpoints {
    /// Returns the configured suffix for the given service
    #[must_use]
    pub fn suffix(&self, service: Service) -> &str {
        match service {
            Service::Auth => &self.auth,
            Service::Learning => &self.learning,
            Service::Content => &self.content,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST transport
pub struct RestApiConfig {
    /// Base URL shared by all services
    pub base_url: String,
    /// Timeout in seconds for HTTP requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the InULearning client
pub struct Config {
    /// REST transport configuration
    pub rest_api: RestApiConfig,
    /// Per-service network location suffixes
    pub endpoints: ServiceEndpoints,
    /// Path of the durable token store file
    pub token_store_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from environment variables and an optional `.env` file
    ///
    /// Unset variables fall back to the local development defaults the
    /// platform's compose setup uses (one host, one port per service).
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default("INU_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("INU_REST_TIMEOUT", DEFAULT_REQUEST_TIMEOUT_SECS),
            },
            endpoints: ServiceEndpoints {
                auth: get_env_or_default("INU_AUTH_SUFFIX", String::from(DEFAULT_AUTH_SUFFIX)),
                learning: get_env_or_default(
                    "INU_LEARNING_SUFFIX",
                    String::from(DEFAULT_LEARNING_SUFFIX),
                ),
                content: get_env_or_default(
                    "INU_CONTENT_SUFFIX",
                    String::from(DEFAULT_CONTENT_SUFFIX),
                ),
            },
            token_store_path: get_env_or_default(
                "INU_TOKEN_STORE_PATH",
                String::from(DEFAULT_TOKEN_STORE_FILE),
            ),
        }
    }

    /// Creates a configuration pointing every service at a single origin
    ///
    /// All three suffixes are empty, so requests for any service hit
    /// `base_url` directly. Used against single-host deployments and mock
    /// servers in tests.
    pub fn with_base_url(base_url: impl Into<String>, token_store_path: impl Into<String>) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
            },
            endpoints: ServiceEndpoints {
                auth: String::new(),
                learning: String::new(),
                content: String::new(),
            },
            token_store_path: token_store_path.into(),
        }
    }

    /// Resolves the full URL for a request against the given service
    ///
    /// The result is the exact concatenation of the base URL, the service
    /// suffix, and the path; no normalization is applied.
    #[must_use]
    pub fn endpoint_url(&self, service: Service, path: &str) -> String {
        format!(
            "{}{}{}",
            self.rest_api.base_url,
            self.endpoints.suffix(service),
            path
        )
    }
}
