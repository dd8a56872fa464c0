use async_trait::async_trait;
use uuid::Uuid;

use super::domain::entities::{Message, MessageDraft, MessageSearch};
use crate::shared::pagination::{PageRequest, PageResult};

// ──────────────────────────────────────────────────────────
// Outgoing port
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageRepositoryError {
    #[error("Message not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn insert(&self, draft: MessageDraft) -> Result<Message, MessageRepositoryError>;

    /// Newest first, one page at a time.
    async fn list(
        &self,
        search: MessageSearch,
        page: PageRequest,
    ) -> Result<PageResult<Message>, MessageRepositoryError>;

    async fn mark_read(&self, id: Uuid) -> Result<Message, MessageRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), MessageRepositoryError>;
}

// ──────────────────────────────────────────────────────────
// Incoming port
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageError {
    #[error("Message not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<MessageRepositoryError> for MessageError {
    fn from(err: MessageRepositoryError) -> Self {
        match err {
            MessageRepositoryError::NotFound => MessageError::NotFound,
            MessageRepositoryError::DatabaseError(msg) => MessageError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait MessageUseCase: Send + Sync {
    async fn submit(&self, draft: MessageDraft) -> Result<Message, MessageError>;

    async fn list(
        &self,
        search: MessageSearch,
        page: PageRequest,
    ) -> Result<PageResult<Message>, MessageError>;

    async fn mark_read(&self, id: Uuid) -> Result<Message, MessageError>;

    async fn delete(&self, id: Uuid) -> Result<(), MessageError>;
}
