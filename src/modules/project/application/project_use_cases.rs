use std::sync::Arc;

use crate::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, GetProjectCategoriesUseCase, GetProjectsUseCase,
    GetPublicSingleProjectUseCase, GetSingleProjectUseCase, HardDeleteProjectUseCase,
    UpdateProjectUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub get_list: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_categories: Arc<dyn GetProjectCategoriesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleProjectUseCase + Send + Sync>,
    pub get_public_single: Arc<dyn GetPublicSingleProjectUseCase + Send + Sync>,
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    pub hard_delete: Arc<dyn HardDeleteProjectUseCase + Send + Sync>,
}
