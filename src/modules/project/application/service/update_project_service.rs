use async_trait::async_trait;
use uuid::Uuid;

use crate::project::application::domain::entities::{ProjectDetail, ProjectDraft};
use crate::project::application::ports::incoming::use_cases::{
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::project::application::ports::outgoing::project_repository::ProjectRepository;

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        project_id: Uuid,
        draft: ProjectDraft,
    ) -> Result<ProjectDetail, UpdateProjectError> {
        self.repository
            .update_project(project_id, draft)
            .await
            .map_err(UpdateProjectError::from)
    }
}
