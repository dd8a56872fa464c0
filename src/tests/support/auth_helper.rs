use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::AdminAllowList,
    ports::outgoing::{
        SessionBlacklist, SessionBlacklistError, SessionClaims, SessionTokenError, SessionVerifier,
    },
    services::{hash_token, SessionGuard},
};

pub const TEST_ADMIN_EMAIL: &str = "owner@example.com";
pub const TEST_ADMIN_TOKEN: &str = "test-admin-token";
pub const REVOKED_ADMIN_TOKEN: &str = "revoked-admin-token";
pub const VISITOR_TOKEN: &str = "visitor-token";

/// Accepts the fixed test tokens above and nothing else.
struct StaticVerifier;

impl SessionVerifier for StaticVerifier {
    fn verify(&self, token: &str) -> Result<SessionClaims, SessionTokenError> {
        let email = match token {
            TEST_ADMIN_TOKEN | REVOKED_ADMIN_TOKEN => TEST_ADMIN_EMAIL,
            VISITOR_TOKEN => "visitor@example.com",
            _ => return Err(SessionTokenError::Malformed),
        };

        Ok(SessionClaims {
            sub: Uuid::nil(),
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
            email: Some(email.to_string()),
            role: Some("authenticated".to_string()),
        })
    }
}

struct StaticBlacklist;

#[async_trait]
impl SessionBlacklist for StaticBlacklist {
    async fn revoke(
        &self,
        _token_hash: String,
        _admin_id: Uuid,
        _expires_at: DateTime<Utc>,
    ) -> Result<(), SessionBlacklistError> {
        Ok(())
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, SessionBlacklistError> {
        Ok(token_hash == hash_token(REVOKED_ADMIN_TOKEN))
    }
}

pub fn test_session_guard() -> SessionGuard {
    SessionGuard::new(
        Arc::new(StaticVerifier),
        Arc::new(StaticBlacklist),
        AdminAllowList::new([TEST_ADMIN_EMAIL]),
    )
}

pub fn admin_auth_header() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", TEST_ADMIN_TOKEN))
}
