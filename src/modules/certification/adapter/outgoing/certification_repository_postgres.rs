use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::certification::application::domain::entities::{Certification, CertificationDraft};
use crate::shared::content::{ContentRepository, ContentRepositoryError, Visibility};
use crate::shared::db::is_missing_row;

use super::sea_orm_entity::{
    ActiveModel as CertificationActiveModel, Column as CertificationColumn,
    Entity as CertificationEntity,
};

#[derive(Debug, Clone)]
pub struct CertificationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CertificationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn active_model(id: Uuid, draft: CertificationDraft) -> CertificationActiveModel {
        CertificationActiveModel {
            id: Set(id),
            certificate_name: Set(draft.certificate_name),
            provider: Set(draft.provider),
            issue_date: Set(draft.issue_date),
            expiry_date: Set(draft.expiry_date),
            certificate_image_url: Set(draft.certificate_image_url),
            certificate_url: Set(draft.certificate_url),
            display_order: Set(draft.display_order),
            is_published: Set(draft.is_published),
            created_at: NotSet,
        }
    }
}

#[async_trait]
impl ContentRepository<Certification, CertificationDraft> for CertificationRepositoryPostgres {
    async fn list(
        &self,
        visibility: Visibility,
    ) -> Result<Vec<Certification>, ContentRepositoryError> {
        let mut query = CertificationEntity::find();
        if visibility.published_only() {
            query = query.filter(CertificationColumn::IsPublished.eq(true));
        }

        query
            .order_by_asc(CertificationColumn::DisplayOrder)
            .all(&*self.db)
            .await
            .map(|rows| rows.into_iter().map(|m| m.to_domain()).collect())
            .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))
    }

    async fn create(
        &self,
        draft: CertificationDraft,
    ) -> Result<Certification, ContentRepositoryError> {
        Self::active_model(Uuid::new_v4(), draft)
            .insert(&*self.db)
            .await
            .map(|m| m.to_domain())
            .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))
    }

    async fn update(
        &self,
        id: Uuid,
        draft: CertificationDraft,
    ) -> Result<Certification, ContentRepositoryError> {
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
        let result = CertificationEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))?;

        match result.rows_affected {
            0 => Err(ContentRepositoryError::NotFound),
            _ => Ok(()),
        }
    }
}
