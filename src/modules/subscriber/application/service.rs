use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::domain::csv_export::subscribers_csv;
use super::domain::entities::{Subscriber, SubscriberDraft};
use super::ports::{SubscriberError, SubscriberRepository, SubscriberUseCase};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone)]
pub struct SubscriberService<R> {
    repository: R,
}

impl<R> SubscriberService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: SubscriberRepository> SubscriberUseCase for SubscriberService<R> {
    async fn subscribe(&self, draft: SubscriberDraft) -> Result<Subscriber, SubscriberError> {
        let subscriber = self.repository.insert(draft).await?;
        info!(subscriber_id = %subscriber.id, "New newsletter subscriber");
        Ok(subscriber)
    }

    async fn list(
        &self,
        search: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<Subscriber>, SubscriberError> {
        let search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Ok(self.repository.list(search, page).await?)
    }

    async fn delete(&self, id: Uuid) -> Result<(), SubscriberError> {
        Ok(self.repository.delete(id).await?)
    }

    async fn export_csv(&self) -> Result<String, SubscriberError> {
        let subscribers = self.repository.all().await?;
        Ok(subscribers_csv(&subscribers))
    }
}
