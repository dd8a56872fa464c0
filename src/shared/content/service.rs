use async_trait::async_trait;
use uuid::Uuid;

use super::{ContentError, ContentRepository, ContentUseCase, Visibility};

#[derive(Debug, Clone)]
pub struct ContentService<R> {
    repository: R,
}

impl<R> ContentService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<T, D, R> ContentUseCase<T, D> for ContentService<R>
where
    T: Send + 'static,
    D: Send + 'static,
    R: ContentRepository<T, D>,
{
    async fn list_published(&self) -> Result<Vec<T>, ContentError> {
        Ok(self.repository.list(Visibility::Published).await?)
    }

    async fn list_all(&self) -> Result<Vec<T>, ContentError> {
        Ok(self.repository.list(Visibility::All).await?)
    }

    async fn create(&self, draft: D) -> Result<T, ContentError> {
        Ok(self.repository.create(draft).await?)
    }

    async fn update(&self, id: Uuid, draft: D) -> Result<T, ContentError> {
        Ok(self.repository.update(id, draft).await?)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentError> {
        Ok(self.repository.delete(id).await?)
    }
}
