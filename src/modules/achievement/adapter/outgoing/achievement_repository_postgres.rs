use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::achievement::application::domain::entities::{Achievement, AchievementDraft};
use crate::shared::content::{ContentRepository, ContentRepositoryError, Visibility};
use crate::shared::db::is_missing_row;

use super::sea_orm_entity::{
    ActiveModel as AchievementActiveModel, Column as AchievementColumn,
    Entity as AchievementEntity,
};

#[derive(Debug, Clone)]
pub struct AchievementRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AchievementRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn active_model(id: Uuid, draft: AchievementDraft) -> AchievementActiveModel {
        AchievementActiveModel {
            id: Set(id),
            title: Set(draft.title),
            description: Set(draft.description),
            date: Set(draft.date),
            image_url: Set(draft.image_url),
            certificate_url: Set(draft.certificate_url),
            display_order: Set(draft.display_order),
            is_published: Set(draft.is_published),
            created_at: NotSet,
        }
    }
}

#[async_trait]
impl ContentRepository<Achievement, AchievementDraft> for AchievementRepositoryPostgres {
    async fn list(
        &self,
        visibility: Visibility,
    ) -> Result<Vec<Achievement>, ContentRepositoryError> {
        let mut query = AchievementEntity::find();
        if visibility.published_only() {
            query = query.filter(AchievementColumn::IsPublished.eq(true));
        }

        query
            .order_by_asc(AchievementColumn::DisplayOrder)
            .all(&*self.db)
            .await
            .map(|rows| rows.into_iter().map(|m| m.to_domain()).collect())
            .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))
    }

    async fn create(&self, draft: AchievementDraft) -> Result<Achievement, ContentRepositoryError> {
        Self::active_model(Uuid::new_v4(), draft)
            .insert(&*self.db)
            .await
            .map(|m| m.to_domain())
            .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))
    }

    async fn update(
        &self,
        id: Uuid,
        draft: AchievementDraft,
    ) -> Result<Achievement, ContentRepositoryError> {
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
        let result = AchievementEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))?;

        match result.rows_affected {
            0 => Err(ContentRepositoryError::NotFound),
            _ => Ok(()),
        }
    }
}
