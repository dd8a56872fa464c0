use async_trait::async_trait;

use crate::project::application::ports::incoming::use_cases::{
    GetProjectCategoriesError, GetProjectCategoriesUseCase,
};
use crate::project::application::ports::outgoing::project_query::ProjectQuery;

pub struct GetProjectCategoriesService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectCategoriesService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectCategoriesUseCase for GetProjectCategoriesService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<String>, GetProjectCategoriesError> {
        Ok(self.query.published_categories().await?)
    }
}
