use async_trait::async_trait;

use crate::auth::application::domain::entities::{AdminProfile, AuthSession};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthGatewayError {
    #[error("Invalid login credentials")]
    InvalidCredentials,

    #[error("Refresh token is invalid or already used")]
    InvalidRefreshToken,

    #[error("Session is not valid for the auth service")]
    Unauthorized,

    #[error("Password rejected: {0}")]
    PasswordRejected(String),

    #[error("Auth service error: {0}")]
    Provider(String),

    #[error("Auth service unreachable: {0}")]
    Unreachable(String),
}

/// Hosted auth service (email/password accounts and their sessions).
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthGatewayError>;

    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession, AuthGatewayError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthGatewayError>;

    async fn get_user(&self, access_token: &str) -> Result<AdminProfile, AuthGatewayError>;

    async fn update_password(
        &self,
        access_token: &str,
        new_password: &str,
    ) -> Result<(), AuthGatewayError>;
}
