use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{SessionBlacklist, SessionBlacklistError};

/// Redis-backed blacklist of logged-out access tokens.
///
/// ```text
/// auth:blacklist:session:{token_hash} -> "{admin_id}"   (TTL = token lifetime left)
/// ```
///
/// A key that exists means the token was revoked. Redis drops it once the
/// token would have expired on its own.
#[derive(Clone)]
pub struct RedisSessionBlacklist {
    pool: Arc<Pool>,
}

impl RedisSessionBlacklist {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn session_key(token_hash: &str) -> String {
        format!("auth:blacklist:session:{token_hash}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, SessionBlacklistError> {
        self.pool
            .get()
            .await
            .map_err(|e| SessionBlacklistError::Store(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl SessionBlacklist for RedisSessionBlacklist {
    async fn revoke(
        &self,
        token_hash: String,
        admin_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), SessionBlacklistError> {
        let ttl = (expires_at - Utc::now()).num_seconds();
        if ttl <= 0 {
            return Err(SessionBlacklistError::AlreadyExpired);
        }

        let key = Self::session_key(&token_hash);
        let mut conn = self.get_conn().await?;

        deadpool_redis::redis::pipe()
            .atomic()
            .cmd("SET")
            .arg(&key)
            .arg(admin_id.to_string())
            .ignore()
            .cmd("EXPIRE")
            .arg(&key)
            .arg(ttl)
            .ignore()
            .query_async::<()>(&mut *conn)
            .await
            .map_err(|e| SessionBlacklistError::Store(e.to_string()))?;

        tracing::debug!(admin_id = %admin_id, ttl, "Session token blacklisted");
        Ok(())
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, SessionBlacklistError> {
        let mut conn = self.get_conn().await?;

        conn.exists(Self::session_key(token_hash))
            .await
            .map_err(|e| SessionBlacklistError::Store(e.to_string()))
    }
}
