use async_trait::async_trait;

use crate::project::application::domain::entities::{ProjectDetail, ProjectDraft};
use crate::project::application::ports::outgoing::project_repository::ProjectRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateProjectError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectRepositoryError> for CreateProjectError {
    fn from(err: ProjectRepositoryError) -> Self {
        CreateProjectError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, draft: ProjectDraft) -> Result<ProjectDetail, CreateProjectError>;
}
