use async_trait::async_trait;

use crate::project::application::domain::entities::{ProjectDetail, ProjectDraft};
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase,
};
use crate::project::application::ports::outgoing::project_repository::ProjectRepository;

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, draft: ProjectDraft) -> Result<ProjectDetail, CreateProjectError> {
        let detail = self.repository.create_project(draft).await?;
        tracing::info!(project_id = %detail.project.id, "Project created");
        Ok(detail)
    }
}
