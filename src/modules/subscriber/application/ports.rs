use async_trait::async_trait;
use uuid::Uuid;

use super::domain::entities::{Subscriber, SubscriberDraft};
use crate::shared::pagination::{PageRequest, PageResult};

// ──────────────────────────────────────────────────────────
// Outgoing port
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubscriberRepositoryError {
    #[error("Email is already subscribed")]
    DuplicateEmail,

    #[error("Subscriber not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    async fn insert(&self, draft: SubscriberDraft)
        -> Result<Subscriber, SubscriberRepositoryError>;

    /// Newest first; `search` is a case-insensitive substring of the email.
    async fn list(
        &self,
        search: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<Subscriber>, SubscriberRepositoryError>;

    /// Every subscriber, newest first.
    async fn all(&self) -> Result<Vec<Subscriber>, SubscriberRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), SubscriberRepositoryError>;
}

// ──────────────────────────────────────────────────────────
// Incoming port
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubscriberError {
    #[error("Email is already subscribed")]
    AlreadySubscribed,

    #[error("Subscriber not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<SubscriberRepositoryError> for SubscriberError {
    fn from(err: SubscriberRepositoryError) -> Self {
        match err {
            SubscriberRepositoryError::DuplicateEmail => SubscriberError::AlreadySubscribed,
            SubscriberRepositoryError::NotFound => SubscriberError::NotFound,
            SubscriberRepositoryError::DatabaseError(msg) => SubscriberError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait SubscriberUseCase: Send + Sync {
    async fn subscribe(&self, draft: SubscriberDraft) -> Result<Subscriber, SubscriberError>;

    async fn list(
        &self,
        search: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<Subscriber>, SubscriberError>;

    async fn delete(&self, id: Uuid) -> Result<(), SubscriberError>;

    /// CSV document of every subscriber.
    async fn export_csv(&self) -> Result<String, SubscriberError>;
}
