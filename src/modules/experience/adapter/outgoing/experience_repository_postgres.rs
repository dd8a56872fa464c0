use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::experience::application::domain::entities::{Experience, ExperienceDraft};
use crate::shared::content::{ContentRepository, ContentRepositoryError, Visibility};
use crate::shared::db::is_missing_row;

use super::sea_orm_entity::{
    ActiveModel as ExperienceActiveModel, Column as ExperienceColumn,
    Entity as ExperienceEntity,
};

#[derive(Debug, Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn active_model(id: Uuid, draft: ExperienceDraft) -> ExperienceActiveModel {
        ExperienceActiveModel {
            id: Set(id),
            company_name: Set(draft.company_name),
            role: Set(draft.role),
            start_date: Set(draft.start_date),
            end_date: Set(draft.end_date),
            is_current: Set(draft.is_current),
            description: Set(draft.description),
            certificate_url: Set(draft.certificate_url),
            logo_url: Set(draft.logo_url),
            display_order: Set(draft.display_order),
            is_published: Set(draft.is_published),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

#[async_trait]
impl ContentRepository<Experience, ExperienceDraft> for ExperienceRepositoryPostgres {
    async fn list(&self, visibility: Visibility) -> Result<Vec<Experience>, ContentRepositoryError> {
        let mut query = ExperienceEntity::find();
        if visibility.published_only() {
            query = query.filter(ExperienceColumn::IsPublished.eq(true));
        }

        let rows = query
            .order_by_asc(ExperienceColumn::DisplayOrder)
            .all(&*self.db)
            .await
            .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(|m| m.to_domain()).collect())
    }

    async fn create(&self, draft: ExperienceDraft) -> Result<Experience, ContentRepositoryError> {
        let inserted = Self::active_model(Uuid::new_v4(), draft)
            .insert(&*self.db)
            .await
            .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_domain())
    }

    async fn update(
        &self,
        id: Uuid,
        draft: ExperienceDraft,
    ) -> Result<Experience, ContentRepositoryError> {
        let updated = Self::active_model(id, draft)
            .update(&*self.db)
            .await
            .map_err(|e| {
                if is_missing_row(&e) {
                    ContentRepositoryError::NotFound
                } else {
                    ContentRepositoryError::DatabaseError(e.to_string())
                }
            })?;

        Ok(updated.to_domain())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentRepositoryError> {
        let result = ExperienceEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(ContentRepositoryError::NotFound);
        }
        Ok(())
    }
}
