use async_trait::async_trait;

use crate::project::application::domain::entities::{Project, ProjectListFilter};
use crate::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::project::application::ports::outgoing::project_query::ProjectQuery;
use crate::shared::content::Visibility;

pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: ProjectListFilter,
        visibility: Visibility,
    ) -> Result<Vec<Project>, GetProjectsError> {
        Ok(self.query.list(filter, visibility).await?)
    }
}
