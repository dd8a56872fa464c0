use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{AuthGateway, AuthGatewayError};

/// Minimum length enforced by the settings screen.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone)]
pub struct ChangePasswordCommand {
    new_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChangePasswordCommandError {
    #[error("New passwords do not match")]
    Mismatch,

    #[error("Password must be at least 6 characters")]
    TooShort,
}

impl ChangePasswordCommand {
    pub fn new(
        new_password: String,
        confirm_password: String,
    ) -> Result<Self, ChangePasswordCommandError> {
        if new_password != confirm_password {
            return Err(ChangePasswordCommandError::Mismatch);
        }
        if new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ChangePasswordCommandError::TooShort);
        }
        Ok(Self { new_password })
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("Password rejected: {0}")]
    Rejected(String),

    #[error("Session is no longer valid")]
    SessionExpired,

    #[error("Auth provider error: {0}")]
    ProviderError(String),
}

#[async_trait]
pub trait IChangePasswordUseCase: Send + Sync {
    async fn execute(
        &self,
        access_token: &str,
        command: ChangePasswordCommand,
    ) -> Result<(), ChangePasswordError>;
}

#[derive(Clone)]
pub struct ChangePasswordUseCase {
    gateway: Arc<dyn AuthGateway>,
}

impl ChangePasswordUseCase {
    pub fn new(gateway: Arc<dyn AuthGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl IChangePasswordUseCase for ChangePasswordUseCase {
    async fn execute(
        &self,
        access_token: &str,
        command: ChangePasswordCommand,
    ) -> Result<(), ChangePasswordError> {
        self.gateway
            .update_password(access_token, command.new_password())
            .await
            .map_err(|e| match e {
                AuthGatewayError::PasswordRejected(msg) => ChangePasswordError::Rejected(msg),
                AuthGatewayError::Unauthorized => ChangePasswordError::SessionExpired,
                other => ChangePasswordError::ProviderError(other.to_string()),
            })
    }
}
