use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::AuthSession,
    ports::outgoing::{AuthGateway, AuthGatewayError},
};

#[derive(Debug, Clone)]
pub struct RefreshSessionRequest {
    refresh_token: String,
}

impl RefreshSessionRequest {
    pub fn new(refresh_token: String) -> Result<Self, RefreshSessionError> {
        let refresh_token = refresh_token.trim().to_string();
        if refresh_token.is_empty() {
            return Err(RefreshSessionError::MissingRefreshToken);
        }
        Ok(Self { refresh_token })
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefreshSessionError {
    #[error("Refresh token is required")]
    MissingRefreshToken,

    #[error("Refresh token is invalid or expired")]
    InvalidRefreshToken,

    #[error("Auth provider error: {0}")]
    ProviderError(String),
}

#[async_trait]
pub trait IRefreshSessionUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RefreshSessionRequest,
    ) -> Result<AuthSession, RefreshSessionError>;
}

#[derive(Clone)]
pub struct RefreshSessionUseCase {
    gateway: Arc<dyn AuthGateway>,
}

impl RefreshSessionUseCase {
    pub fn new(gateway: Arc<dyn AuthGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl IRefreshSessionUseCase for RefreshSessionUseCase {
    async fn execute(
        &self,
        request: RefreshSessionRequest,
    ) -> Result<AuthSession, RefreshSessionError> {
        self.gateway
            .refresh_session(request.refresh_token())
            .await
            .map_err(|e| match e {
                AuthGatewayError::InvalidRefreshToken | AuthGatewayError::Unauthorized => {
                    RefreshSessionError::InvalidRefreshToken
                }
                other => RefreshSessionError::ProviderError(other.to_string()),
            })
    }
}
