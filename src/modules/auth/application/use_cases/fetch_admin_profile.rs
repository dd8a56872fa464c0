use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::AdminProfile,
    ports::outgoing::{AuthGateway, AuthGatewayError},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchAdminProfileError {
    #[error("Session is no longer valid")]
    SessionExpired,

    #[error("Auth provider error: {0}")]
    ProviderError(String),
}

#[async_trait]
pub trait IFetchAdminProfileUseCase: Send + Sync {
    async fn execute(&self, access_token: &str) -> Result<AdminProfile, FetchAdminProfileError>;
}

#[derive(Clone)]
pub struct FetchAdminProfileUseCase {
    gateway: Arc<dyn AuthGateway>,
}

impl FetchAdminProfileUseCase {
    pub fn new(gateway: Arc<dyn AuthGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl IFetchAdminProfileUseCase for FetchAdminProfileUseCase {
    async fn execute(&self, access_token: &str) -> Result<AdminProfile, FetchAdminProfileError> {
        self.gateway
            .get_user(access_token)
            .await
            .map_err(|e| match e {
                AuthGatewayError::Unauthorized => FetchAdminProfileError::SessionExpired,
                other => FetchAdminProfileError::ProviderError(other.to_string()),
            })
    }
}
