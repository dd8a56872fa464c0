use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::publication::application::domain::entities::{Publication, PublicationDraft};
use crate::shared::content::{ContentRepository, ContentRepositoryError, Visibility};
use crate::shared::db::is_missing_row;

use super::sea_orm_entity::{
    ActiveModel as PublicationActiveModel, Column as PublicationColumn,
    Entity as PublicationEntity,
};

#[derive(Debug, Clone)]
pub struct PublicationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PublicationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn active_model(id: Uuid, draft: PublicationDraft) -> PublicationActiveModel {
        PublicationActiveModel {
            id: Set(id),
            title: Set(draft.title),
            authors: Set(draft.authors),
            publication_venue: Set(draft.publication_venue),
            publication_date: Set(draft.publication_date),
            abstract_text: Set(draft.abstract_text),
            url: Set(draft.url),
            display_order: Set(draft.display_order),
            is_published: Set(draft.is_published),
            created_at: NotSet,
        }
    }
}

#[async_trait]
impl ContentRepository<Publication, PublicationDraft> for PublicationRepositoryPostgres {
    async fn list(
        &self,
        visibility: Visibility,
    ) -> Result<Vec<Publication>, ContentRepositoryError> {
        let mut query = PublicationEntity::find();
        if visibility.published_only() {
            query = query.filter(PublicationColumn::IsPublished.eq(true));
        }

        query
            .order_by_asc(PublicationColumn::DisplayOrder)
            .all(&*self.db)
            .await
            .map(|rows| rows.into_iter().map(|m| m.to_domain()).collect())
            .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))
    }

    async fn create(&self, draft: PublicationDraft) -> Result<Publication, ContentRepositoryError> {
        Self::active_model(Uuid::new_v4(), draft)
            .insert(&*self.db)
            .await
            .map(|m| m.to_domain())
            .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))
    }

    async fn update(
        &self,
        id: Uuid,
        draft: PublicationDraft,
    ) -> Result<Publication, ContentRepositoryError> {
        Self::active_model(id, draft)
            .update(&*self.db)
            .await
            .map(|m| m.to_domain())
            .map_err(|e| match e {
                e if is_missing_row(&e) => ContentRepositoryError::NotFound,
                e => ContentRepositoryError::DatabaseError(e.to_string()),
            })
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentRepositoryError> {
        let result = PublicationEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))?;

        match result.rows_affected {
            0 => Err(ContentRepositoryError::NotFound),
            _ => Ok(()),
        }
    }
}
