//! Ordered, publishable portfolio sections.
//!
//! Experience, education, skills, certifications, achievements and
//! publications all follow the same life cycle: the admin lists every row,
//! creates and fully rewrites rows from a form, and hard-deletes them; the
//! public site reads only the published rows. The ports here are generic over
//! the record (`T`) and the validated form payload (`D`).

mod service;
pub mod web;

pub use service::ContentService;

use async_trait::async_trait;
use uuid::Uuid;

/// Which rows a listing may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Published,
    All,
}

impl Visibility {
    pub fn published_only(self) -> bool {
        matches!(self, Visibility::Published)
    }
}

// ──────────────────────────────────────────────────────────
// Outgoing port
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentRepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContentRepository<T, D>: Send + Sync
where
    T: Send + 'static,
    D: Send + 'static,
{
    async fn list(&self, visibility: Visibility) -> Result<Vec<T>, ContentRepositoryError>;

    async fn create(&self, draft: D) -> Result<T, ContentRepositoryError>;

    /// Full rewrite of every form field of the row.
    async fn update(&self, id: Uuid, draft: D) -> Result<T, ContentRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ContentRepositoryError>;
}

// ──────────────────────────────────────────────────────────
// Incoming port
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentError {
    #[error("Record not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContentRepositoryError> for ContentError {
    fn from(err: ContentRepositoryError) -> Self {
        match err {
            ContentRepositoryError::NotFound => ContentError::NotFound,
            ContentRepositoryError::DatabaseError(msg) => ContentError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait ContentUseCase<T, D>: Send + Sync
where
    T: Send + 'static,
    D: Send + 'static,
{
    async fn list_published(&self) -> Result<Vec<T>, ContentError>;

    async fn list_all(&self) -> Result<Vec<T>, ContentError>;

    async fn create(&self, draft: D) -> Result<T, ContentError>;

    async fn update(&self, id: Uuid, draft: D) -> Result<T, ContentError>;

    async fn delete(&self, id: Uuid) -> Result<(), ContentError>;
}
