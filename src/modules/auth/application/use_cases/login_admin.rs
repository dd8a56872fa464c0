use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::{AdminAllowList, AuthSession},
    ports::outgoing::{AuthGateway, AuthGatewayError},
};
use crate::shared::validation::is_valid_email;

// ========================= Login Command =========================
#[derive(Debug, Clone)]
pub struct LoginCommand {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginCommandError {
    #[error("Email is required")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password is required")]
    EmptyPassword,
}

impl LoginCommand {
    pub fn new(email: String, password: String) -> Result<Self, LoginCommandError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(LoginCommandError::EmptyEmail);
        }
        if !is_valid_email(&email) {
            return Err(LoginCommandError::InvalidEmailFormat);
        }

        // Passwords are sent verbatim; only emptiness is checked here.
        if password.is_empty() {
            return Err(LoginCommandError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ========================= Login Error =========================
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account is not an administrator")]
    NotAnAdmin,

    #[error("Auth provider error: {0}")]
    ProviderError(String),
}

// ========================= Use Case =========================
#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<AuthSession, LoginError>;
}

#[derive(Clone)]
pub struct LoginAdminUseCase {
    gateway: Arc<dyn AuthGateway>,
    allow_list: AdminAllowList,
}

impl LoginAdminUseCase {
    pub fn new(gateway: Arc<dyn AuthGateway>, allow_list: AdminAllowList) -> Self {
        Self {
            gateway,
            allow_list,
        }
    }
}

#[async_trait]
impl ILoginAdminUseCase for LoginAdminUseCase {
    async fn execute(&self, command: LoginCommand) -> Result<AuthSession, LoginError> {
        let session = self
            .gateway
            .sign_in_with_password(command.email(), command.password())
            .await
            .map_err(|e| match e {
                AuthGatewayError::InvalidCredentials => LoginError::InvalidCredentials,
                other => LoginError::ProviderError(other.to_string()),
            })?;

        if !self.allow_list.permits(&session.admin.email) {
            // Do not leave a live session behind for a non-admin account.
            if let Err(e) = self.gateway.sign_out(&session.access_token).await {
                tracing::warn!(error = %e, "Failed to sign out rejected non-admin session");
            }
            return Err(LoginError::NotAnAdmin);
        }

        Ok(session)
    }
}
