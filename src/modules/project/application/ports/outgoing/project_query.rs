use async_trait::async_trait;
use uuid::Uuid;

use crate::project::application::domain::entities::{Project, ProjectChildren, ProjectListFilter};
use crate::shared::content::Visibility;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectQueryError {
    /// Missing, or hidden from the requested visibility.
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Ordered by `display_order`.
    async fn list(
        &self,
        filter: ProjectListFilter,
        visibility: Visibility,
    ) -> Result<Vec<Project>, ProjectQueryError>;

    /// Distinct, non-empty categories of published projects, sorted.
    async fn published_categories(&self) -> Result<Vec<String>, ProjectQueryError>;

    async fn get_by_id(
        &self,
        project_id: Uuid,
        visibility: Visibility,
    ) -> Result<Project, ProjectQueryError>;

    async fn get_children(&self, project_id: Uuid) -> Result<ProjectChildren, ProjectQueryError>;

    /// Published, featured projects other than `exclude`.
    async fn related(&self, exclude: Uuid, limit: u64) -> Result<Vec<Project>, ProjectQueryError>;
}
