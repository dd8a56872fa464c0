use async_trait::async_trait;
use uuid::Uuid;

use crate::project::application::domain::entities::{ProjectDetail, ProjectDraft};
use crate::project::application::ports::outgoing::project_repository::ProjectRepositoryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    ProjectNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectRepositoryError> for UpdateProjectError {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::NotFound => UpdateProjectError::ProjectNotFound,
            ProjectRepositoryError::DatabaseError(msg) => UpdateProjectError::RepositoryError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: Uuid,
        draft: ProjectDraft,
    ) -> Result<ProjectDetail, UpdateProjectError>;
}
