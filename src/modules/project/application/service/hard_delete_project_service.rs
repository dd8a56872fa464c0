use async_trait::async_trait;
use uuid::Uuid;

use crate::project::application::ports::incoming::use_cases::{
    HardDeleteProjectError, HardDeleteProjectUseCase,
};
use crate::project::application::ports::outgoing::project_repository::ProjectRepository;

pub struct HardDeleteProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> HardDeleteProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> HardDeleteProjectUseCase for HardDeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, project_id: Uuid) -> Result<(), HardDeleteProjectError> {
        self.repository
            .delete_project(project_id)
            .await
            .map_err(HardDeleteProjectError::from)?;

        tracing::info!(project_id = %project_id, "Project deleted");
        Ok(())
    }
}
