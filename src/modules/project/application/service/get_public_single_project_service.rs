use async_trait::async_trait;
use uuid::Uuid;

use crate::project::application::domain::entities::{PublicProjectDetail, RELATED_PROJECTS_LIMIT};
use crate::project::application::ports::incoming::use_cases::{
    GetPublicSingleProjectError, GetPublicSingleProjectUseCase,
};
use crate::project::application::ports::outgoing::project_query::ProjectQuery;
use crate::shared::content::Visibility;

pub struct GetPublicSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetPublicSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPublicSingleProjectUseCase for GetPublicSingleProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(
        &self,
        project_id: Uuid,
    ) -> Result<PublicProjectDetail, GetPublicSingleProjectError> {
        // Drafts are reported as missing on the public site.
        let (project, children, related) = tokio::try_join!(
            self.query.get_by_id(project_id, Visibility::Published),
            self.query.get_children(project_id),
            self.query.related(project_id, RELATED_PROJECTS_LIMIT),
        )?;

        Ok(PublicProjectDetail {
            project,
            children,
            related,
        })
    }
}
