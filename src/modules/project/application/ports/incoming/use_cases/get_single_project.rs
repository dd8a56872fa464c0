use async_trait::async_trait;
use uuid::Uuid;

use crate::project::application::domain::entities::ProjectDetail;
use crate::project::application::ports::outgoing::project_query::ProjectQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetSingleProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectQueryError> for GetSingleProjectError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::NotFound => GetSingleProjectError::NotFound,
            ProjectQueryError::DatabaseError(msg) => GetSingleProjectError::RepositoryError(msg),
        }
    }
}

/// Admin view: drafts included.
#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: Uuid) -> Result<ProjectDetail, GetSingleProjectError>;
}
