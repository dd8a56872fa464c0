use async_trait::async_trait;

use crate::project::application::ports::outgoing::project_query::ProjectQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetProjectCategoriesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for GetProjectCategoriesError {
    fn from(err: ProjectQueryError) -> Self {
        GetProjectCategoriesError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetProjectCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<String>, GetProjectCategoriesError>;
}
