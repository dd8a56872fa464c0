use async_trait::async_trait;
use uuid::Uuid;

use crate::project::application::domain::entities::ProjectDetail;
use crate::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::project::application::ports::outgoing::project_query::ProjectQuery;
use crate::shared::content::Visibility;

pub struct GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleProjectUseCase for GetSingleProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, project_id: Uuid) -> Result<ProjectDetail, GetSingleProjectError> {
        let (project, children) = tokio::try_join!(
            self.query.get_by_id(project_id, Visibility::All),
            self.query.get_children(project_id),
        )?;

        Ok(ProjectDetail { project, children })
    }
}
