use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionBlacklistError {
    #[error("Token already expired")]
    AlreadyExpired,

    #[error("Blacklist store error: {0}")]
    Store(String),
}

/// Access tokens revoked by logout, kept until they would expire anyway.
#[async_trait]
pub trait SessionBlacklist: Send + Sync {
    async fn revoke(
        &self,
        token_hash: String,
        admin_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), SessionBlacklistError>;

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, SessionBlacklistError>;
}
