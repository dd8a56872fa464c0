use async_trait::async_trait;

use crate::project::application::domain::entities::{Project, ProjectListFilter};
use crate::project::application::ports::outgoing::project_query::ProjectQueryError;
use crate::shared::content::Visibility;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for GetProjectsError {
    fn from(err: ProjectQueryError) -> Self {
        GetProjectsError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ProjectListFilter,
        visibility: Visibility,
    ) -> Result<Vec<Project>, GetProjectsError>;
}
