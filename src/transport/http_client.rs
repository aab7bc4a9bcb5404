/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/2/26
******************************************************************************/

//! HTTP gateway client for the InULearning platform
//!
//! One client owns the session and the endpoint table and serves all three
//! backend services. A request names its target [`Service`]; the gateway
//! resolves the URL, attaches the standard headers, issues the call and
//! decodes the JSON response into the caller's type.
//!
//! Failures surface as [`AppError`]: backend `detail` messages verbatim,
//! bare status lines when the error body is missing or malformed, transport
//! errors after being logged. There are no retries.

use crate::config::{Config, Service};
use crate::constants::{UPLOAD_FIELD_NAME, USER_AGENT};
use crate::error::AppError;
use crate::session::Session;
use crate::storage::{FileTokenStore, TokenStore};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Shape of the error body the platform services emit on failure
#[derive(serde::Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Transport seam between the service facades and the HTTP stack
///
/// Facades are generic over this trait, so tests can substitute a recording
/// implementation without standing up a server.
#[async_trait]
pub trait HttpGateway: Send + Sync {
    /// The session this gateway authenticates with
    fn session(&self) -> &Session;

    /// The configuration this gateway resolves URLs against
    fn config(&self) -> &Config;

    /// Issues a request against a service
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `service` - Target backend service
    /// * `path` - Endpoint path, appended verbatim to the service origin
    /// * `body` - Optional body, JSON-encoded when present
    async fn request<B, T>(
        &self,
        method: Method,
        service: Service,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned;

    /// Makes a GET request
    async fn get<T>(&self, service: Service, path: &str) -> Result<T, AppError>
    where
        T: DeserializeOwned;

    /// Makes a POST request
    async fn post<B, T>(&self, service: Service, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned;

    /// Makes a PUT request
    async fn put<B, T>(&self, service: Service, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned;

    /// Makes a DELETE request
    async fn delete<T>(&self, service: Service, path: &str) -> Result<T, AppError>
    where
        T: DeserializeOwned;

    /// Uploads a file as a multipart POST
    ///
    /// The Authorization header is attached when a token is set; the
    /// Content-Type is left to the multipart encoder, which supplies the
    /// boundary.
    async fn upload<T>(
        &self,
        service: Service,
        path: &str,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned;
}

/// Production gateway backed by `reqwest`
pub struct GatewayHttpClient {
    config: Arc<Config>,
    session: Arc<Session>,
    http_client: Client,
}

impl GatewayHttpClient {
    /// Creates a gateway with a file-backed token store at the configured path
    ///
    /// Any token the store holds is restored into the session, so a client
    /// constructed after a previous login starts out authenticated.
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let store: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(&config.token_store_path));
        Self::with_store(config, store)
    }

    /// Creates a gateway with a caller-supplied token store
    pub fn with_store(config: Arc<Config>, store: Arc<dyn TokenStore>) -> Result<Self, AppError> {
        let session = Arc::new(Session::new(store)?);
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            config,
            session,
            http_client,
        })
    }

    /// Returns the full URL for a request against the given service
    #[must_use]
    pub fn endpoint_url(&self, service: Service, path: &str) -> String {
        self.config.endpoint_url(service, path)
    }

    /// Turns a non-success response into the matching error
    ///
    /// A parseable `{"detail": ...}` body yields the backend message; anything
    /// else degrades to the bare status line.
    fn error_for_status(status: StatusCode, body: &str) -> AppError {
        error!("Request failed with status {}: {}", status, body);
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody {
                detail: Some(message),
            }) => AppError::Api { status, message },
            _ => AppError::Status(status),
        }
    }

    /// Decodes a successful response body into the caller's type
    async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(AppError::Json)
    }
}

#[async_trait]
impl HttpGateway for GatewayHttpClient {
    fn session(&self) -> &Session {
        &self.session
    }

    fn config(&self) -> &Config {
        &self.config
    }

    async fn request<B, T>(
        &self,
        method: Method,
        service: Service,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(service, path);
        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, &url)
            .headers(self.session.request_headers()?);

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Request to {} failed: {}", url, e);
                return Err(AppError::Transport(e));
            }
        };

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(Self::error_for_status(status, &body_text));
        }

        Self::parse_response(response).await
    }

    async fn get<T>(&self, service: Service, path: &str) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        self.request(Method::GET, service, path, None::<&()>).await
    }

    async fn post<B, T>(&self, service: Service, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        self.request(Method::POST, service, path, Some(body)).await
    }

    async fn put<B, T>(&self, service: Service, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        self.request(Method::PUT, service, path, Some(body)).await
    }

    async fn delete<T>(&self, service: Service, path: &str) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        self.request(Method::DELETE, service, path, None::<&()>)
            .await
    }

    async fn upload<T>(
        &self,
        service: Service,
        path: &str,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(service, path);
        debug!("POST {} (multipart, {} bytes)", url, bytes.len());

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = Form::new().part(UPLOAD_FIELD_NAME, part);

        let mut request = self.http_client.post(&url).multipart(form);

        if let Some(bearer) = self.session.bearer() {
            let value = HeaderValue::from_str(&bearer).map_err(|_| AppError::InvalidToken)?;
            request = request.header(AUTHORIZATION, value);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Upload to {} failed: {}", url, e);
                return Err(AppError::Transport(e));
            }
        };

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(Self::error_for_status(status, &body_text));
        }

        Self::parse_response(response).await
    }
}
