use async_trait::async_trait;
use uuid::Uuid;

use super::domain::entities::{NewResume, Resume, ResumeFile, ResumeFileError};
use crate::shared::storage::StorageError;

// ──────────────────────────────────────────────────────────
// Outgoing port
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResumeRepositoryError {
    #[error("Resume not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// Most recently uploaded resume, if any.
    async fn latest(&self) -> Result<Option<Resume>, ResumeRepositoryError>;

    /// Deletes `previous` (when given) and inserts `resume` in one transaction.
    async fn swap(
        &self,
        previous: Option<Uuid>,
        resume: NewResume,
    ) -> Result<Resume, ResumeRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ResumeRepositoryError>;
}

// ──────────────────────────────────────────────────────────
// Incoming port
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResumeError {
    #[error("{0}")]
    InvalidFile(ResumeFileError),

    #[error("Resume not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ResumeRepositoryError> for ResumeError {
    fn from(err: ResumeRepositoryError) -> Self {
        match err {
            ResumeRepositoryError::NotFound => ResumeError::NotFound,
            ResumeRepositoryError::DatabaseError(msg) => ResumeError::RepositoryError(msg),
        }
    }
}

impl From<StorageError> for ResumeError {
    fn from(err: StorageError) -> Self {
        ResumeError::Storage(err.to_string())
    }
}

impl From<ResumeFileError> for ResumeError {
    fn from(err: ResumeFileError) -> Self {
        ResumeError::InvalidFile(err)
    }
}

#[async_trait]
pub trait ResumeUseCase: Send + Sync {
    async fn current(&self) -> Result<Option<Resume>, ResumeError>;

    /// Uploads `file` and makes it the current resume, replacing the old one.
    async fn replace(&self, file: ResumeFile) -> Result<Resume, ResumeError>;

    async fn remove(&self) -> Result<(), ResumeError>;
}
