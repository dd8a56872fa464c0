use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::{
    domain::entities::AdminSession,
    ports::outgoing::{AuthGateway, SessionBlacklist, SessionBlacklistError},
    services::hash_token,
};

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct LogoutResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogoutError {
    #[error("Token revocation failed: {0}")]
    TokenRevocationFailed(String),
}

#[async_trait]
pub trait ILogoutAdminUseCase: Send + Sync {
    async fn execute(&self, session: AdminSession) -> Result<LogoutResponse, LogoutError>;
}

/// Revokes the presented access token locally, then ends the session at
/// the auth service.
#[derive(Clone)]
pub struct LogoutAdminUseCase {
    gateway: Arc<dyn AuthGateway>,
    blacklist: Arc<dyn SessionBlacklist>,
}

impl LogoutAdminUseCase {
    pub fn new(gateway: Arc<dyn AuthGateway>, blacklist: Arc<dyn SessionBlacklist>) -> Self {
        Self { gateway, blacklist }
    }
}

#[async_trait]
impl ILogoutAdminUseCase for LogoutAdminUseCase {
    async fn execute(&self, session: AdminSession) -> Result<LogoutResponse, LogoutError> {
        match self
            .blacklist
            .revoke(
                hash_token(&session.access_token),
                session.admin_id,
                session.expires_at,
            )
            .await
        {
            Ok(()) | Err(SessionBlacklistError::AlreadyExpired) => {}
            Err(e) => return Err(LogoutError::TokenRevocationFailed(e.to_string())),
        }

        // The local blacklist already blocks the token; a provider failure
        // only leaves its refresh token alive until it expires.
        if let Err(e) = self.gateway.sign_out(&session.access_token).await {
            warn!(admin_id = %session.admin_id, error = %e, "Auth provider sign-out failed");
        }

        info!(admin_id = %session.admin_id, "Admin logged out");

        Ok(LogoutResponse {
            message: "Logged out successfully".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::AuthGatewayError;
    use crate::tests::support::mocks::{MockAuthGateway, MockSessionBlacklistStore};
    use chrono::Utc;
    use mockall::predicate::*;
    use uuid::Uuid;

    fn session() -> AdminSession {
        AdminSession {
            admin_id: Uuid::new_v4(),
            email: "owner@example.com".into(),
            access_token: "access-token".into(),
            expires_at: Utc::now() + chrono::Duration::minutes(10),
        }
    }

    #[tokio::test]
    async fn logout_blacklists_hashed_token_and_signs_out() {
        let session = session();
        let admin_id = session.admin_id;

        let mut blacklist = MockSessionBlacklistStore::new();
        blacklist
            .expect_revoke()
            .with(eq(hash_token("access-token")), eq(admin_id), always())
            .times(1)
            .returning(|_, _, _| Ok(()));

        let mut gateway = MockAuthGateway::new();
        gateway
            .expect_sign_out()
            .with(eq("access-token"))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = LogoutAdminUseCase::new(Arc::new(gateway), Arc::new(blacklist));
        let resp = use_case.execute(session).await.unwrap();

        assert_eq!(resp.message, "Logged out successfully");
    }

    #[tokio::test]
    async fn provider_failure_does_not_fail_logout() {
        let mut blacklist = MockSessionBlacklistStore::new();
        blacklist.expect_revoke().returning(|_, _, _| Ok(()));

        let mut gateway = MockAuthGateway::new();
        gateway
            .expect_sign_out()
            .returning(|_| Err(AuthGatewayError::Unreachable("dns".into())));

        let use_case = LogoutAdminUseCase::new(Arc::new(gateway), Arc::new(blacklist));
        assert!(use_case.execute(session()).await.is_ok());
    }

    #[tokio::test]
    async fn blacklist_failure_fails_logout() {
        let mut blacklist = MockSessionBlacklistStore::new();
        blacklist
            .expect_revoke()
            .returning(|_, _, _| Err(SessionBlacklistError::Store("redis down".into())));

        let gateway = MockAuthGateway::new();

        let use_case = LogoutAdminUseCase::new(Arc::new(gateway), Arc::new(blacklist));
        let result = use_case.execute(session()).await;

        assert!(matches!(
            result,
            Err(LogoutError::TokenRevocationFailed(msg)) if msg.contains("redis down")
        ));
    }
}
