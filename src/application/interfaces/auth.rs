use crate::error::AppError;
use crate::model::requests::{LoginRequest, RegisterRequest};
use crate::model::responses::{
    HealthResponse, LoginResponse, ProfileResponse, RefreshResponse, UserResponse,
};
use async_trait::async_trait;

/// Interface for the auth service facade
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Registers a new account
    async fn register(&self, user_data: &RegisterRequest) -> Result<UserResponse, AppError>;

    /// Logs in and persists the issued token into the session
    ///
    /// The token is persisted only when the response carries one under
    /// `data.access_token`; any previously stored token is left in place
    /// otherwise. The decoded response is returned either way.
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, AppError>;

    /// Requests a fresh token for the current session
    ///
    /// The replacement grant is returned to the caller; the session token is
    /// left untouched.
    async fn refresh_token(&self) -> Result<RefreshResponse, AppError>;

    /// Gets the profile of the logged-in account
    async fn get_profile(&self) -> Result<ProfileResponse, AppError>;

    /// Logs out by clearing the stored token; no network call is made
    fn logout(&self) -> Result<(), AppError>;

    /// Checks the auth service health endpoint
    async fn health(&self) -> Result<HealthResponse, AppError>;
}
