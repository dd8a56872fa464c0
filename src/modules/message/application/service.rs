use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::domain::entities::{Message, MessageDraft, MessageSearch};
use super::ports::{MessageError, MessageRepository, MessageUseCase};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone)]
pub struct MessageService<R> {
    repository: R,
}

impl<R> MessageService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: MessageRepository> MessageUseCase for MessageService<R> {
    async fn submit(&self, draft: MessageDraft) -> Result<Message, MessageError> {
        let message = self.repository.insert(draft).await?;
        info!(message_id = %message.id, "Contact message received");
        Ok(message)
    }

    async fn list(
        &self,
        search: MessageSearch,
        page: PageRequest,
    ) -> Result<PageResult<Message>, MessageError> {
        Ok(self.repository.list(search, page).await?)
    }

    async fn mark_read(&self, id: Uuid) -> Result<Message, MessageError> {
        Ok(self.repository.mark_read(id).await?)
    }

    async fn delete(&self, id: Uuid) -> Result<(), MessageError> {
        Ok(self.repository.delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::application::ports::MessageRepositoryError;
    use chrono::Utc;
    use mockall::{mock, predicate::*};

    mock! {
        pub Repo {}

        #[async_trait]
        impl MessageRepository for Repo {
            async fn insert(&self, draft: MessageDraft) -> Result<Message, MessageRepositoryError>;
            async fn list(
                &self,
                search: MessageSearch,
                page: PageRequest,
            ) -> Result<PageResult<Message>, MessageRepositoryError>;
            async fn mark_read(&self, id: Uuid) -> Result<Message, MessageRepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), MessageRepositoryError>;
        }
    }

    fn message(id: Uuid, is_read: bool) -> Message {
        Message {
            id,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello there, friend".into(),
            is_read,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn submit_returns_stored_message() {
        let mut repo = MockRepo::new();
        repo.expect_insert()
            .times(1)
            .returning(|_| Ok(message(Uuid::new_v4(), false)));

        let stored = MessageService::new(repo)
            .submit(MessageDraft {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                message: "Hello there, friend".into(),
            })
            .await
            .unwrap();

        assert!(!stored.is_read);
    }

    #[tokio::test]
    async fn list_forwards_search_and_page() {
        let mut repo = MockRepo::new();
        repo.expect_list()
            .with(
                eq(MessageSearch::new(Some("ada".into()))),
                eq(PageRequest::new(2, 10)),
            )
            .returning(|_, page| Ok(PageResult::new(vec![], page, 11)));

        let result = MessageService::new(repo)
            .list(MessageSearch::new(Some(" ada ".into())), PageRequest::new(2, 10))
            .await
            .unwrap();
        assert!(result.items.is_empty());
        assert_eq!(result.page, 2);
        assert_eq!(result.total, 11);
    }

    #[tokio::test]
    async fn mark_read_of_missing_message_is_not_found() {
        let mut repo = MockRepo::new();
        repo.expect_mark_read()
            .returning(|_| Err(MessageRepositoryError::NotFound));

        let result = MessageService::new(repo).mark_read(Uuid::new_v4()).await;
        assert_eq!(result, Err(MessageError::NotFound));
    }

    #[tokio::test]
    async fn database_error_is_mapped() {
        let mut repo = MockRepo::new();
        repo.expect_delete()
            .returning(|_| Err(MessageRepositoryError::DatabaseError("down".into())));

        let result = MessageService::new(repo).delete(Uuid::new_v4()).await;
        assert_eq!(result, Err(MessageError::RepositoryError("down".into())));
    }
}
