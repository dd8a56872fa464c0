use chrono::DateTime;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::{AdminAllowList, AdminSession},
    ports::outgoing::{SessionBlacklist, SessionTokenError, SessionVerifier},
    services::hash_token,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionGuardError {
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Session has been revoked")]
    Revoked,

    #[error("Account is not an administrator")]
    NotAnAdmin,

    #[error("Blacklist unavailable: {0}")]
    BlacklistUnavailable(String),
}

/// Decides whether a bearer token may reach the admin area.
#[derive(Clone)]
pub struct SessionGuard {
    verifier: Arc<dyn SessionVerifier>,
    blacklist: Arc<dyn SessionBlacklist>,
    allow_list: AdminAllowList,
}

impl SessionGuard {
    pub fn new(
        verifier: Arc<dyn SessionVerifier>,
        blacklist: Arc<dyn SessionBlacklist>,
        allow_list: AdminAllowList,
    ) -> Self {
        Self {
            verifier,
            blacklist,
            allow_list,
        }
    }

    pub async fn authorize(&self, token: &str) -> Result<AdminSession, SessionGuardError> {
        let claims = self.verifier.verify(token).map_err(|e| {
            match e {
                SessionTokenError::Expired => tracing::debug!("Admin token expired"),
                other => tracing::warn!(error = %other, "Admin token rejected"),
            }
            SessionGuardError::InvalidToken
        })?;

        let revoked = self
            .blacklist
            .is_revoked(&hash_token(token))
            .await
            .map_err(|e| SessionGuardError::BlacklistUnavailable(e.to_string()))?;
        if revoked {
            return Err(SessionGuardError::Revoked);
        }

        let email = claims.email.unwrap_or_default();
        if !self.allow_list.permits(&email) {
            tracing::warn!(admin_id = %claims.sub, "Authenticated account is not on the admin list");
            return Err(SessionGuardError::NotAnAdmin);
        }

        let expires_at =
            DateTime::from_timestamp(claims.exp, 0).ok_or(SessionGuardError::InvalidToken)?;

        Ok(AdminSession {
            admin_id: claims.sub,
            email,
            access_token: token.to_string(),
            expires_at,
        })
    }
}
