use async_trait::async_trait;
use uuid::Uuid;

use crate::project::application::domain::entities::PublicProjectDetail;
use crate::project::application::ports::outgoing::project_query::ProjectQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetPublicSingleProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectQueryError> for GetPublicSingleProjectError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::NotFound => GetPublicSingleProjectError::NotFound,
            ProjectQueryError::DatabaseError(msg) => {
                GetPublicSingleProjectError::RepositoryError(msg)
            }
        }
    }
}

#[async_trait]
pub trait GetPublicSingleProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: Uuid,
    ) -> Result<PublicProjectDetail, GetPublicSingleProjectError>;
}
