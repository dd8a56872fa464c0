use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::education::application::domain::entities::{Education, EducationDraft};
use crate::shared::content::{ContentRepository, ContentRepositoryError, Visibility};
use crate::shared::db::is_missing_row;

use super::sea_orm_entity::{
    ActiveModel as EducationActiveModel, Column as EducationColumn, Entity as EducationEntity,
};

#[derive(Debug, Clone)]
pub struct EducationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn active_model(id: Uuid, draft: EducationDraft) -> EducationActiveModel {
        EducationActiveModel {
            id: Set(id),
            degree: Set(draft.degree),
            institution: Set(draft.institution),
            start_date: Set(draft.start_date),
            end_date: Set(draft.end_date),
            is_current: Set(draft.is_current),
            grade: Set(draft.grade),
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
impl ContentRepository<Education, EducationDraft> for EducationRepositoryPostgres {
    async fn list(&self, visibility: Visibility) -> Result<Vec<Education>, ContentRepositoryError> {
        let mut query = EducationEntity::find();
        if visibility.published_only() {
            query = query.filter(EducationColumn::IsPublished.eq(true));
        }

        query
            .order_by_asc(EducationColumn::DisplayOrder)
            .all(&*self.db)
            .await
            .map(|rows| rows.into_iter().map(|m| m.to_domain()).collect())
            .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))
    }

    async fn create(&self, draft: EducationDraft) -> Result<Education, ContentRepositoryError> {
        Self::active_model(Uuid::new_v4(), draft)
            .insert(&*self.db)
            .await
            .map(|m| m.to_domain())
            .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))
    }

    async fn update(
        &self,
        id: Uuid,
        draft: EducationDraft,
    ) -> Result<Education, ContentRepositoryError> {
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
        let result = EducationEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))?;

        match result.rows_affected {
            0 => Err(ContentRepositoryError::NotFound),
            _ => Ok(()),
        }
    }
}
