use async_trait::async_trait;
use uuid::Uuid;

use crate::project::application::ports::outgoing::project_repository::ProjectRepositoryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HardDeleteProjectError {
    #[error("Project not found")]
    ProjectNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectRepositoryError> for HardDeleteProjectError {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::NotFound => HardDeleteProjectError::ProjectNotFound,
            ProjectRepositoryError::DatabaseError(msg) => {
                HardDeleteProjectError::RepositoryError(msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait HardDeleteProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: Uuid) -> Result<(), HardDeleteProjectError>;
}
