use async_trait::async_trait;
use uuid::Uuid;

use crate::project::application::domain::entities::{ProjectDetail, ProjectDraft};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side)
// ──────────────────────────────────────────────────────────
//

/// Every write covers the project row and all of its children in one
/// transaction.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, draft: ProjectDraft)
        -> Result<ProjectDetail, ProjectRepositoryError>;

    /// Rewrites the project row and replaces each child set with the
    /// drafted one.
    async fn update_project(
        &self,
        project_id: Uuid,
        draft: ProjectDraft,
    ) -> Result<ProjectDetail, ProjectRepositoryError>;

    /// Removes the children first, then the project.
    async fn delete_project(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError>;
}
