/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/2/26
******************************************************************************/
use crate::application::interfaces::AuthService;
use crate::config::Service;
use crate::error::AppError;
use crate::model::requests::{LoginRequest, RegisterRequest};
use crate::model::responses::{
    HealthResponse, LoginResponse, ProfileResponse, RefreshResponse, UserResponse,
};
use crate::transport::HttpGateway;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the auth facade
pub struct AuthServiceImpl<T: HttpGateway> {
    client: Arc<T>,
}

impl<T: HttpGateway> AuthServiceImpl<T> {
    /// Creates a new instance of the auth facade
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: HttpGateway + 'static> AuthService for AuthServiceImpl<T> {
    async fn register(&self, user_data: &RegisterRequest) -> Result<UserResponse, AppError> {
        info!("Registering account: {}", user_data.username);
        self.client
            .post(Service::Auth, "/auth/register", user_data)
            .await
    }

    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, AppError> {
        info!("Logging in: {}", credentials.email);
        let response: LoginResponse = self
            .client
            .post(Service::Auth, "/auth/login", credentials)
            .await?;

        if let Some(token) = response.access_token() {
            self.client.session().set_token(token)?;
            debug!("Session token persisted");
        }

        Ok(response)
    }

    async fn refresh_token(&self) -> Result<RefreshResponse, AppError> {
        // The refresh endpoint expects an empty JSON object, not an empty body.
        let body = serde_json::json!({});
        self.client
            .post(Service::Auth, "/auth/refresh", &body)
            .await
    }

    async fn get_profile(&self) -> Result<ProfileResponse, AppError> {
        self.client.get(Service::Auth, "/auth/profile").await
    }

    fn logout(&self) -> Result<(), AppError> {
        info!("Logging out");
        self.client.session().clear_token()
    }

    async fn health(&self) -> Result<HealthResponse, AppError> {
        self.client.get(Service::Auth, "/auth/health").await
    }
}
